//! Standalone HTML export
//!
//! Strategy: FormDocument → one self-contained HTML file (one-way only)
//!
//! # Artifact layout
//!
//! | Part            | Contents                                                       |
//! |-----------------|----------------------------------------------------------------|
//! | `<style>`       | Inline stylesheet (`css/export.css`)                           |
//! | `formData`      | Snapshot of the document: title and pages with their fields     |
//! | `pageMarkup`    | Every page body, rendered by [`crate::render::render_page`]    |
//! | `emptyMarkup`   | The empty state, for documents with no pages                   |
//! | pager routine   | `showPage` / `nextPage` / `prevPage` (`js/pager.js`)            |
//! | Back / Next     | Buttons wired to `prevPage()` / `nextPage()`                    |
//!
//! # Parity with the preview
//!
//! `formData` is the durable snapshot, in the same shape the `json` format reads, so the
//! document can be recovered from an artifact. The pager only takes the page count from it.
//! Rendering is driven by `pageMarkup`: the pager only mounts markup the canonical renderer
//! produced, and computes the counter and progress the same way [`crate::render::Progress`]
//! does. On the last page `Next` shows the completion notice instead of advancing.
//!
//! # Determinism
//!
//! The artifact depends on nothing but the document and [`ExportOptions`]. Ids are not part
//! of the snapshot; there are no timestamps.

mod serializer;

pub use serializer::{export_html, script_json};

use crate::error::FormatError;
use crate::format::Format;
use formsmith_model::FormDocument;

/// Title used when the document's title is empty
pub const DEFAULT_TITLE: &str = "Custom Form";
/// Shown by the exported pager when `Next` is pressed on the last page
pub const COMPLETION_NOTICE: &str = "Submitted!";

/// Knobs for the exported artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub default_title: String,
    pub completion_notice: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            default_title: DEFAULT_TITLE.to_string(),
            completion_notice: COMPLETION_NOTICE.to_string(),
        }
    }
}

/// Standalone paged HTML form
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: ExportOptions,
}

impl HtmlFormat {
    pub fn new(options: ExportOptions) -> Self {
        HtmlFormat { options }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Standalone paged HTML form"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &FormDocument) -> Result<String, FormatError> {
        export_html(doc, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_format_name() {
        let format = HtmlFormat::default();
        assert_eq!(format.name(), "html");
    }

    #[test]
    fn test_html_format_capabilities() {
        let format = HtmlFormat::default();
        assert!(!format.supports_parsing());
        assert!(format.supports_serialization());
    }

    #[test]
    fn test_html_format_extensions() {
        let format = HtmlFormat::default();
        assert_eq!(format.file_extensions(), &["html", "htm"]);
    }

    #[test]
    fn test_html_format_uses_options() {
        let format = HtmlFormat::new(ExportOptions {
            default_title: "Untitled".into(),
            completion_notice: "Thanks!".into(),
        });
        let html = format.serialize(&FormDocument::new()).unwrap();
        assert!(html.contains("<title>Untitled</title>"));
        assert!(html.contains(r#"const completionNotice = "Thanks!";"#));
    }
}
