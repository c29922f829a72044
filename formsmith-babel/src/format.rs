//! Format trait definition
//!
//! Every output (and the one input) format implements [`Format`], which gives the registry and
//! the CLI a uniform way to list, pick and run formats.

use crate::error::FormatError;
use formsmith_model::FormDocument;

/// Trait for document formats
///
/// Implementors convert between a string representation and a [`FormDocument`]. Formats can
/// support parsing, serialization, or both.
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "json")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, preferred one first
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    fn supports_parsing(&self) -> bool {
        false
    }

    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a document
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<FormDocument, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a document into text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _doc: &FormDocument) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
