use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for mappack
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid path: {0}")]
    PathError(String),

    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No map documents found in the input directory")]
    NoDocumentsFound,

    #[error("Packaging engine '{0}' not found")]
    EngineNotFound(String),

    #[error("Failed to start packaging engine '{0}': {1}")]
    EngineStart(String, std::io::Error),

    #[error("Packaging failed: {0}")]
    Packaging(String),

    #[error("Failed to remove directory tree '{path}': {source}")]
    Cleanup {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for mappack operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
