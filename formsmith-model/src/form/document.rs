//! Form document
//!
//! The single source of truth for a form: a title plus pages in navigation order. A document
//! starts with no pages; pages are only ever appended.
//!
//! Every mutation addresses its target by position. A target that does not exist is ignored
//! and reported through the return value, never as an error: the builder only hands out
//! positions it just read from the document, so a miss means the view was stale.
//!
//! Serialized form (the snapshot embedded by the exporter):
//!
//! ```text
//! { "title": "...", "pages": [ { "title": "...", "fields": [ { "label", "type",
//!   "placeholder", "options": [..], "required" } ] } ] }
//! ```

use super::field::{Field, FieldPatch};
use super::id::{FieldId, PageId};
use super::page::Page;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl FormDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        FormDocument {
            title: title.into(),
            pages: Vec::new(),
        }
    }

    pub fn with_pages(mut self, pages: Vec<Page>) -> Self {
        self.pages = pages;
        self
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn field(&self, page: usize, field: usize) -> Option<&Field> {
        self.pages.get(page)?.fields.get(field)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Append an empty page and return its index
    pub fn add_page(&mut self, title: impl Into<String>) -> usize {
        let page = Page::new(title);
        debug!(page = %page.id(), title = %page.title, "page added");
        self.pages.push(page);
        self.pages.len() - 1
    }

    /// Rename the page at `page`; false when there is no such page
    pub fn set_page_title(&mut self, page: usize, title: impl Into<String>) -> bool {
        match self.pages.get_mut(page) {
            Some(target) => {
                target.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Append a default field to the page at `page` and return the new field's index
    pub fn add_field(&mut self, page: usize) -> Option<usize> {
        let target = self.pages.get_mut(page)?;
        let index = target.push_field();
        debug!(page, field = index, "field added");
        Some(index)
    }

    /// Overwrite the editable attributes of one field; false when there is no such field
    pub fn update_field(&mut self, page: usize, field: usize, patch: FieldPatch) -> bool {
        match self
            .pages
            .get_mut(page)
            .and_then(|target| target.fields.get_mut(field))
        {
            Some(target) => {
                target.apply(patch);
                debug!(page, field, "field updated");
                true
            }
            None => false,
        }
    }

    /// Remove one field. Later fields on the same page shift down by one.
    pub fn remove_field(&mut self, page: usize, field: usize) -> Option<Field> {
        let removed = self.pages.get_mut(page)?.remove_field(field)?;
        debug!(page, field, "field removed");
        Some(removed)
    }

    /// Current index of the page with the given id
    pub fn locate_page(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|page| page.id() == id)
    }

    /// Current `(page, field)` indices of a field, searched within its page
    pub fn locate_field(&self, page: PageId, field: FieldId) -> Option<(usize, usize)> {
        let page_index = self.locate_page(page)?;
        let field_index = self.pages[page_index].position_of(field)?;
        Some((page_index, field_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::kind::FieldType;

    fn three_field_page() -> FormDocument {
        let mut doc = FormDocument::with_title("Survey");
        let page = doc.add_page("Page 1");
        for _ in 0..3 {
            doc.add_field(page);
        }
        doc
    }

    #[test]
    fn starts_empty() {
        let doc = FormDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
    }

    #[test]
    fn add_page_appends_in_order() {
        let mut doc = FormDocument::new();
        assert_eq!(doc.add_page("Page 1"), 0);
        assert_eq!(doc.add_page("Page 2"), 1);
        assert_eq!(doc.pages[1].title, "Page 2");
        assert!(doc.pages[1].is_empty());
    }

    #[test]
    fn add_field_out_of_range_is_noop() {
        let mut doc = FormDocument::new();
        assert_eq!(doc.add_field(0), None);
        doc.add_page("Page 1");
        assert_eq!(doc.add_field(4), None);
        assert!(doc.pages[0].is_empty());
    }

    #[test]
    fn update_field_replaces_attributes() {
        let mut doc = three_field_page();
        let patch = FieldPatch::from_raw("Plan", "select", "", "A\nB", false);
        assert!(doc.update_field(0, 1, patch));

        let field = doc.field(0, 1).unwrap();
        assert_eq!(field.kind, FieldType::Select);
        assert_eq!(field.options, vec!["A", "B"]);
    }

    #[test]
    fn update_missing_field_is_noop() {
        let mut doc = three_field_page();
        let before = doc.clone();
        assert!(!doc.update_field(0, 9, FieldPatch::default()));
        assert!(!doc.update_field(2, 0, FieldPatch::default()));
        assert_eq!(doc, before);
    }

    #[test]
    fn remove_field_shifts_later_fields() {
        let mut doc = three_field_page();
        let ids: Vec<_> = doc.pages[0].fields.iter().map(Field::id).collect();

        let removed = doc.remove_field(0, 1).unwrap();
        assert_eq!(removed.id(), ids[1]);

        let remaining: Vec<_> = doc.pages[0].fields.iter().map(Field::id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2]]);
    }

    #[test]
    fn locate_field_tracks_ids_after_removal() {
        let mut doc = three_field_page();
        let page = doc.pages[0].id();
        let last = doc.pages[0].fields[2].id();
        let removed = doc.pages[0].fields[0].id();

        doc.remove_field(0, 0);
        assert_eq!(doc.locate_field(page, last), Some((0, 1)));
        assert_eq!(doc.locate_field(page, removed), None);
    }

    #[test]
    fn set_page_title_out_of_range_is_noop() {
        let mut doc = FormDocument::new();
        assert!(!doc.set_page_title(0, "Nope"));
        doc.add_page("Page 1");
        assert!(doc.set_page_title(0, "Contact"));
        assert_eq!(doc.pages[0].title, "Contact");
    }

    #[test]
    fn loads_snapshot_json() {
        let json = r#"{
            "title": "Signup",
            "pages": [{
                "title": "Contact",
                "fields": [
                    {"label": "Name", "type": "text", "placeholder": "", "options": [], "required": true},
                    {"label": "Plan", "type": "select", "options": ["A", "B"]}
                ]
            }]
        }"#;
        let doc: FormDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.title, "Signup");
        assert_eq!(doc.pages[0].fields.len(), 2);
        assert!(doc.pages[0].fields[0].required);
        assert_eq!(doc.pages[0].fields[1].options, vec!["A", "B"]);
        assert_ne!(doc.pages[0].fields[0].id(), doc.pages[0].fields[1].id());
    }
}
