//! Error types and exit codes for docmd

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for docmd operations
#[derive(Error, Debug)]
pub enum DocmdError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse file: {message}")]
    ParseFailure { message: String },

    #[error("JSON serialization failed: {message}")]
    Serialization { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocmdError {
    /// Convert error to an exit code:
    /// - 0: Success
    /// - 1: File not found / IO error
    /// - 3: Parse failure
    /// - 4: Serialization failure
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(1),
            Self::Io(_) => ExitCode::from(1),
            Self::ParseFailure { .. } => ExitCode::from(3),
            Self::Serialization { .. } => ExitCode::from(4),
        }
    }
}

impl From<serde_json::Error> for DocmdError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}

/// Result type alias for docmd operations
pub type Result<T> = std::result::Result<T, DocmdError>;
