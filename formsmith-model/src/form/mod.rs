//! Form elements: document, pages, fields

pub mod document;
pub mod field;
pub mod id;
pub mod kind;
pub mod options;
pub mod page;

pub use document::FormDocument;
pub use field::{Field, FieldPatch, NEW_FIELD_LABEL};
pub use id::{FieldId, PageId};
pub use kind::FieldType;
pub use options::{join_options, parse_options};
pub use page::Page;
