//! Selection State and the field-editor state machine

use super::draft::{AuxiliaryInputs, DraftEdit, FieldDraft};
use crate::form::{FieldId, FormDocument, PageId};

/// The field editor: either empty or staging edits for one field
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldEditor {
    #[default]
    Empty,
    Editing {
        page: PageId,
        field: FieldId,
        draft: FieldDraft,
    },
}

impl FieldEditor {
    pub fn is_editing(&self) -> bool {
        matches!(self, FieldEditor::Editing { .. })
    }

    pub fn target(&self) -> Option<(PageId, FieldId)> {
        match self {
            FieldEditor::Editing { page, field, .. } => Some((*page, *field)),
            FieldEditor::Empty => None,
        }
    }

    pub fn draft(&self) -> Option<&FieldDraft> {
        match self {
            FieldEditor::Editing { draft, .. } => Some(draft),
            FieldEditor::Empty => None,
        }
    }

    pub fn auxiliary_inputs(&self) -> Option<AuxiliaryInputs> {
        self.draft().map(FieldDraft::auxiliary_inputs)
    }
}

/// Which page is being edited, and the field editor for that page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    page: Option<PageId>,
    editor: FieldEditor,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Option<PageId> {
        self.page
    }

    pub fn editor(&self) -> &FieldEditor {
        &self.editor
    }

    /// Current index of the selected page, if it still exists
    pub fn page_index(&self, doc: &FormDocument) -> Option<usize> {
        doc.locate_page(self.page?)
    }

    /// Current `(page, field)` indices of the field being edited, if it still exists
    pub fn field_position(&self, doc: &FormDocument) -> Option<(usize, usize)> {
        let (page, field) = self.editor.target()?;
        doc.locate_field(page, field)
    }

    /// Select a page. The field editor always empties, even when reselecting the same page.
    pub fn select_page(&mut self, doc: &FormDocument, index: usize) -> bool {
        match doc.page(index) {
            Some(page) => {
                self.page = Some(page.id());
                self.editor = FieldEditor::Empty;
                true
            }
            None => false,
        }
    }

    /// Select a field on the selected page: Empty/Editing → Editing, draft loaded from the model
    pub fn select_field(&mut self, doc: &FormDocument, index: usize) -> bool {
        let Some(page_index) = self.page_index(doc) else {
            return false;
        };
        let page = &doc.pages[page_index];
        match page.fields.get(index) {
            Some(field) => {
                self.editor = FieldEditor::Editing {
                    page: page.id(),
                    field: field.id(),
                    draft: FieldDraft::from_field(field),
                };
                true
            }
            None => false,
        }
    }

    /// Stage one edit in the draft. Ignored when nothing is being edited.
    pub fn edit_draft(&mut self, edit: DraftEdit) -> bool {
        match &mut self.editor {
            FieldEditor::Editing { draft, .. } => {
                draft.apply(edit);
                true
            }
            FieldEditor::Empty => false,
        }
    }

    /// Commit the draft to the model: Editing → Editing. False when there is nothing to save.
    pub fn save(&self, doc: &mut FormDocument) -> bool {
        let (Some((page, field)), Some(draft)) =
            (self.field_position(doc), self.editor.draft())
        else {
            return false;
        };
        doc.update_field(page, field, draft.to_patch())
    }

    /// Remove the field being edited: Editing → Empty. False when there is nothing to remove.
    pub fn remove(&mut self, doc: &mut FormDocument) -> bool {
        let Some((page, field)) = self.field_position(doc) else {
            return false;
        };
        let removed = doc.remove_field(page, field).is_some();
        self.editor = FieldEditor::Empty;
        removed
    }

    /// Drop references that no longer resolve against `doc`
    pub fn revalidate(&mut self, doc: &FormDocument) {
        if self.page.is_some() && self.page_index(doc).is_none() {
            self.page = None;
            self.editor = FieldEditor::Empty;
        }
        if self.editor.is_editing() && self.field_position(doc).is_none() {
            self.editor = FieldEditor::Empty;
        }
    }
}
