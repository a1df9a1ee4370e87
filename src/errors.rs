use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not encode contacts: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Contacts file {path:?} is corrupt: {reason}")]
    MalformedSnapshot { path: PathBuf, reason: String },

    #[error("Failed to insert valid {0}")]
    Validation(String),

    #[error("Contact already exists")]
    AlreadyExists(String),

    #[error("Contact doesn't exist")]
    NotFound(String),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Input closed")]
    InputClosed,
}

impl AppError {
    /// Errors that abandon the current operation but keep the session alive.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::AlreadyExists(_)
                | AppError::NotFound(_)
                | AppError::ParseCommand(_)
        )
    }
}
