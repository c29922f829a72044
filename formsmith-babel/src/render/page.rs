//! Page rendering
//!
//! A page renders as a `<section>` holding its title as an `<h2>` followed by one block per
//! field, in field order:
//!
//! ```text
//! <section class="fs-page">
//!   <h2 class="fs-page-title">Contact</h2>
//!   <div class="fs-field"><label class="fs-label">Name*</label><input ...></div>
//!   ...
//! </section>
//! ```
//!
//! (whitespace added for reading; the serialized output has none)

use super::control::Control;
use super::progress::Progress;
use crate::error::FormatError;
use crate::markup::{append, element, text_element, to_html};
use formsmith_model::{Field, FormDocument, Page};
use markup5ever_rcdom::Handle;

/// Shown in place of a page when the document has none
pub const EMPTY_STATE: &str = "No pages yet.";

/// One rendered preview page plus where it sits in the document
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFrame {
    pub body: String,
    pub progress: Progress,
    /// True when the document has no pages and `body` is the empty state
    pub empty: bool,
}

/// Render the page at `index` (clamped) of `doc`, or the empty state
pub fn render_preview(doc: &FormDocument, index: usize) -> Result<PreviewFrame, FormatError> {
    let progress = Progress::new(index, doc.page_count());
    match doc.page(progress.index()) {
        Some(page) => Ok(PreviewFrame {
            body: render_page(page)?,
            progress,
            empty: false,
        }),
        None => Ok(PreviewFrame {
            body: render_empty_state()?,
            progress,
            empty: true,
        }),
    }
}

pub fn render_page(page: &Page) -> Result<String, FormatError> {
    to_html(&[page_node(page)])
}

pub fn render_empty_state() -> Result<String, FormatError> {
    to_html(&[text_element("p", &[("class", "fs-empty")], EMPTY_STATE)])
}

fn page_node(page: &Page) -> Handle {
    let section = element("section", &[("class", "fs-page")]);
    append(
        &section,
        text_element("h2", &[("class", "fs-page-title")], &page.title),
    );
    for field in &page.fields {
        append(&section, field_node(field));
    }
    section
}

fn field_node(field: &Field) -> Handle {
    let block = element("div", &[("class", "fs-field")]);
    append(
        &block,
        text_element("label", &[("class", "fs-label")], &field.display_label()),
    );
    for node in Control::for_field(field).build(field.required) {
        append(&block, node);
    }
    block
}
