//! Error types for the pq-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// gives the CLI a single error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Machine error: {0}")]
    Machine(String),

    #[error("Control error: {0}")]
    Control(String),

    #[error("Failed to write output file: {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for pq-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<pq_core::PqError> for AppError {
    fn from(err: pq_core::PqError) -> Self {
        AppError::Machine(err.to_string())
    }
}

impl From<pq_controls::ControlError> for AppError {
    fn from(err: pq_controls::ControlError) -> Self {
        AppError::Control(err.to_string())
    }
}
