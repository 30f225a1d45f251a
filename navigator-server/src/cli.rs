//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Fastest campus routes by foot and cart.
///
/// With a network description file, prints directions for it and exits.
/// Without one, serves the HTTP interface configured by the `NAVIGATOR_*`
/// environment variables.
#[derive(Debug, Parser)]
#[command(name = "navigator-server", version, about)]
pub struct Cli {
    /// Network description to print directions for
    pub network: Option<PathBuf>,
}
