//! Error types
//!
//! Formatting itself never fails. Errors only come from parsing a format
//! name or a configuration document.

use thiserror::Error;

/// Errors raised while interpreting user-supplied settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The given name does not match any supported output format
    #[error("unknown output format '{name}' (expected one of: markdown, html)")]
    UnknownFormat {
        /// The name that failed to parse
        name: String,
    },

    /// The given name does not match any binding discipline
    #[error("unknown binding '{name}' (expected one of: dynamic, static)")]
    UnknownBinding {
        /// The name that failed to parse
        name: String,
    },

    /// Configuration document could not be parsed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::InvalidConfig(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::InvalidConfig(err.to_string())
    }
}

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;
