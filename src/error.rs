//! Error types for the outer surfaces.
//!
//! Tree building itself cannot fail; these cover configuration, serialization and I/O
//! around it.

use crate::formats::FormatError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration loading or deserialization failed
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    /// Unknown format or serializer failure
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Reading input failed
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
