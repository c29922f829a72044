//! Preview fragment format
//!
//! Serializes the first page of a document exactly as the live preview shows it, followed by
//! the page counter. Useful for inspecting a document from the shell.

use crate::error::FormatError;
use crate::format::Format;
use crate::render::render_preview;
use formsmith_model::FormDocument;

#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewFormat;

impl PreviewFormat {
    /// Render page `index` (clamped), body then counter on its own line
    pub fn serialize_page(&self, doc: &FormDocument, index: usize) -> Result<String, FormatError> {
        let frame = render_preview(doc, index)?;
        Ok(format!("{}\n{}\n", frame.body, frame.progress.counter_text()))
    }
}

impl Format for PreviewFormat {
    fn name(&self) -> &str {
        "preview"
    }

    fn description(&self) -> &str {
        "Live-preview markup of a single page"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &FormDocument) -> Result<String, FormatError> {
        self.serialize_page(doc, 0)
    }
}
