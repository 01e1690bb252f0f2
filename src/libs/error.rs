use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading or writing a task file.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
