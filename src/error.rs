//! Errors for the I/O surface
//!
//! The expression algebra and the matcher never fail. Reading configuration
//! and revision documents can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading configuration or revision documents
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("failed to access {}", .path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::GlobalConfig`]
    #[error("invalid config file {}", .path.display())]
    Config {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// Config could not be serialized
    #[error("failed to serialize config")]
    ConfigWrite(#[from] toml::ser::Error),

    /// Revision document is not valid JSON for a component revision
    #[error("invalid revision document {}", .path.display())]
    Document {
        /// Document file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias for the I/O surface
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
