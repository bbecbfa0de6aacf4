//! JSON (de)serialization for syntax files.
//!
//! Every field is optional; omitted fields keep their built-in defaults.

use super::types::Syntax;

/// Error while reading or writing a syntax file.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    #[error("JSON parse error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Syntax {
    /// Parse a syntax from JSON.
    pub fn from_json(json: &str) -> Result<Self, SyntaxError> {
        serde_json::from_str(json).map_err(SyntaxError::Decode)
    }

    pub fn to_json_pretty(&self) -> Result<String, SyntaxError> {
        serde_json::to_string_pretty(self).map_err(SyntaxError::Encode)
    }
}
