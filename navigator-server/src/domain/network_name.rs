//! Network name type.

use std::fmt;

/// Longest accepted network name.
const MAX_LEN: usize = 64;

/// Error returned when parsing an invalid network name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid network name: {reason}")]
pub struct InvalidNetworkName {
    reason: &'static str,
}

/// The name of a stored network description, e.g. `north-campus`.
///
/// Names are 1 to 64 ASCII letters, digits, `-` or `_`. They map directly to
/// file names, so anything that could escape the network directory is
/// rejected at parse time.
///
/// # Examples
///
/// ```
/// use navigator_server::domain::NetworkName;
///
/// let name = NetworkName::parse("north-campus").unwrap();
/// assert_eq!(name.as_str(), "north-campus");
///
/// assert!(NetworkName::parse("../secrets").is_err());
/// assert!(NetworkName::parse("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkName(String);

impl NetworkName {
    /// Parse a network name from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidNetworkName> {
        if s.is_empty() {
            return Err(InvalidNetworkName {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_LEN {
            return Err(InvalidNetworkName {
                reason: "must be at most 64 characters",
            });
        }

        if !s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(InvalidNetworkName {
                reason: "must contain only ASCII letters, digits, '-' or '_'",
            });
        }

        Ok(NetworkName(s.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The description file name for this network.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.0)
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
