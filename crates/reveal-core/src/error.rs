//! Core error types for reveal-core.
//!
//! Almost every operation in this library is total: a deadline already in
//! the past, a degenerate arena, or a pointer outside the arena are all
//! valid inputs that degrade to "do nothing" rather than failing. The only
//! real failure is a deadline whose calendar fields name an instant the calendar
//! cannot represent.

use thiserror::Error;

/// Core error type for reveal-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The deadline fields do not name a representable instant.
    #[error("Invalid deadline field '{field}': {message}")]
    InvalidDeadline { field: String, message: String },

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub(crate) fn invalid_deadline(field: &str, message: impl Into<String>) -> Self {
        CoreError::InvalidDeadline {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
