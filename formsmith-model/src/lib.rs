//! Document model for multi-page forms
//!
//!     A form is a tree three levels deep: a [`FormDocument`] owns an ordered list of
//!     [`Page`]s, and every page owns an ordered list of [`Field`]s. Order is meaningful at every
//!     level: page order is navigation order, field order is display order.
//!
//!     The file structure :
//!     .
//!     ├── form
//!     │   ├── id.rs          # Stable opaque page / field identifiers
//!     │   ├── kind.rs        # FieldType, the open enum of input kinds
//!     │   ├── options.rs     # The canonical options-parsing rule
//!     │   ├── field.rs       # Field and FieldPatch
//!     │   ├── page.rs        # Page
//!     │   └── document.rs    # FormDocument
//!     ├── editor
//!     │   ├── draft.rs       # Editor-local staged values and presentation rules
//!     │   └── selection.rs   # Selection State and the field-editor state machine
//!     └── lib.rs
//!
//! Identity
//!
//!     Pages and fields get a stable id when they are created. The selection stores ids, so
//!     removing a field never leaves the editor pointing at a neighbour that slid into its slot.
//!     Ids are not part of the serialized snapshot: a freshly loaded document gets fresh ids.
//!
//!     Index-based operations are still offered, since that is how a paged renderer addresses
//!     the document. Mutations with an out-of-range target are silent no-ops.

pub mod editor;
pub mod form;

pub use editor::{AuxiliaryInputs, DraftEdit, FieldDraft, FieldEditor, Selection};
pub use form::{
    parse_options, Field, FieldId, FieldPatch, FieldType, FormDocument, Page, PageId,
    NEW_FIELD_LABEL,
};
