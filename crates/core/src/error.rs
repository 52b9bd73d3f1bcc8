use std::path::PathBuf;

use thiserror::Error;

/// The request never produced a response: connection refused, DNS failure,
/// platform timeout, or the body could not be read.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("transport failure: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Why a search attempt rendered nothing.
///
/// Both variants are recovered locally by the controller; they are returned
/// for logging and inspection, never surfaced to the end user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status.
    #[error("HTTP error, status {status}")]
    Status { status: u16 },
}

/// Errors raised while loading `searchbox.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}
