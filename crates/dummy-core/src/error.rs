//! Error types for dummy-core

use thiserror::Error;

/// Result type alias for dummy operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the dummy responder
#[derive(Debug, Error)]
pub enum Error {
    /// Listener could not acquire the configured address
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// `hostname:port` did not parse as a socket address
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Hyper error
    #[error("HTTP error: {0}")]
    Hyper(String),
}

impl Error {
    /// Whether this error happened while acquiring the listening socket
    pub fn is_bind(&self) -> bool {
        matches!(self, Error::Bind { .. } | Error::InvalidAddress(_))
    }
}

impl From<hyper::Error> for Error {
    fn from(err: hyper::Error) -> Self {
        Error::Hyper(err.to_string())
    }
}
