//! Error types for format operations

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No format registered under this name
    FormatNotFound(String),
    /// The format exists but cannot perform the requested direction
    NotSupported(String),
    /// Source text could not be turned into a document
    ParseError(String),
    /// The document could not be written out
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{}' not found", name),
            FormatError::NotSupported(msg) => write!(f, "Not supported: {}", msg),
            FormatError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            FormatError::ParseError(err.to_string())
        } else {
            FormatError::SerializationError(err.to_string())
        }
    }
}
