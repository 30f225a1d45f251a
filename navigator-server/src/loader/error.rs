//! Network description error types.

use std::path::PathBuf;

use crate::domain::NetworkError;

/// Errors that can occur while loading a network description.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be understood
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// A key the format does not define
    #[error("line {line}: unknown key '{key}'")]
    UnknownKey { line: usize, key: String },

    /// Stations given before any line name
    #[error("line {line}: cart_line_stations without a preceding cart_line_name")]
    OrphanStations { line: usize },

    /// A required key never appeared
    #[error("missing required key '{0}'")]
    MissingKey(&'static str),

    /// The description parsed but does not form a valid network
    #[error("invalid network: {0}")]
    Network(#[from] NetworkError),
}
