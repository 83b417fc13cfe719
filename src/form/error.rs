//! Error types for form encoding.

use thiserror::Error;

/// Errors that abort a form encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The value has no form representation.
    #[error("Unsupported value of kind '{kind}' at '{path}'")]
    UnsupportedValue { path: String, kind: String },

    /// The input could not be converted into a form value.
    #[error("Failed to convert value for form encoding: {message}")]
    Conversion { message: String },
}

impl From<serde_json::Error> for EncodingError {
    fn from(err: serde_json::Error) -> Self {
        EncodingError::Conversion {
            message: err.to_string(),
        }
    }
}
