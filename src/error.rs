// src/error.rs

use std::fmt;

/// Global Application Error Enum.
/// Centralizes error handling for every command the quiz core exposes.
/// None of these are fatal: the presentation layer reports the message and
/// lets the user retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    // Empty name, short PIN, missing avatar, bad choice number
    InvalidInput(String),

    // PIN does not match the stored profile
    AuthError(String),

    // The selected category/difficulty has no questions
    NoContent(String),

    // Question source unreachable or unparseable
    LoadError(String),

    // Command issued in a phase that does not accept it
    InvalidState(String),

    // Key-value store failed to read or write
    StorageError(String),
}

impl AppError {
    /// True for errors caused by what the user typed or chose, as opposed to
    /// the environment (question source, storage).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidInput(_)
                | AppError::AuthError(_)
                | AppError::NoContent(_)
                | AppError::InvalidState(_)
        )
    }

    /// Message suitable for showing to the user.
    pub fn message(&self) -> &str {
        match self {
            AppError::InvalidInput(msg)
            | AppError::AuthError(msg)
            | AppError::NoContent(msg)
            | AppError::LoadError(msg)
            | AppError::InvalidState(msg)
            | AppError::StorageError(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            AppError::InvalidInput(_) => "invalid input",
            AppError::AuthError(_) => "authentication failed",
            AppError::NoContent(_) => "no content",
            AppError::LoadError(_) => "load error",
            AppError::InvalidState(_) => "invalid state",
            AppError::StorageError(_) => "storage error",
        };
        write!(f, "{}: {}", kind, self.message())
    }
}

impl std::error::Error for AppError {}

/// Stored values that fail to (de)serialize surface as storage errors.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
