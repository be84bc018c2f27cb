use crate::input::ValueKind;
use thiserror::Error;

/// Errors raised by the library's conversion entry points.
///
/// The `&str` converters never fail; these only surface at the dynamic
/// input boundary in [`crate::input`].
#[derive(Debug, Error)]
pub enum CaseError {
    /// The value handed to a converter was not a string.
    #[error("Invalid input: expected a string, but received {received}")]
    InvalidInput { received: ValueKind },

    /// A JSON-encoded input line could not be parsed.
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

impl CaseError {
    /// Runtime type of the rejected value, if this is an `InvalidInput`.
    pub fn received(&self) -> Option<ValueKind> {
        match self {
            CaseError::InvalidInput { received } => Some(*received),
            CaseError::Json(_) => None,
        }
    }
}
