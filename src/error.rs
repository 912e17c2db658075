//! Unified error types for the manifest generator.

use std::fmt;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Error scanning the directory for media files
    DirectoryScan(String),
    /// Error writing the manifest file
    ManifestWrite(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DirectoryScan(msg) => write!(f, "Directory scan error: {}", msg),
            AppError::ManifestWrite(msg) => write!(f, "Manifest write error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::DirectoryScan(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
