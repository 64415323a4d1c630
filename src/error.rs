//! Error types for the server.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop the server from starting.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The compiled-in configuration could not be assembled.
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// `host:port` did not parse as a socket address.
    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),

    /// The listening socket could not be created or bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The served directory is missing or unreadable.
    #[error("Server root {} is not accessible: {source}", .path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a request path did not produce a file.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Nothing under the root matches the path.
    #[error("No file matches the request path")]
    NotFound,

    /// The path, or a symlink along it, leads outside the root.
    #[error("Path escapes the server root: {0}")]
    Traversal(String),

    /// A matching file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    /// HTTP status the request should be answered with
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotFound | Self::Traversal(_) => 404,
            Self::Read { .. } => 500,
        }
    }
}
