//! Error types for fetch-core

use std::path::PathBuf;

/// Result type for fetch-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fetch-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a mapping overlay file
    #[error("failed to parse mapping file {path}: {source}")]
    MappingParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
