//! Field editor state
//!
//! Selection State and the editor's staged values live outside the document: they are a
//! cursor into it, not part of it. The editor is a two-state machine:
//!
//! - `Empty`: nothing selected. Initial state, and the state after the selected field is
//!   removed or another page is selected.
//! - `Editing`: one field is selected and its values are staged in a [`FieldDraft`]. Edits
//!   touch only the draft; the document changes when the draft is saved.

pub mod draft;
pub mod selection;

pub use draft::{AuxiliaryInputs, DraftEdit, FieldDraft};
pub use selection::{FieldEditor, Selection};
