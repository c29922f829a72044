//! Page element
//!
//! A page is a titled, ordered list of fields. Fields are appended at the end and removed at
//! any position; removal shifts every later field down by one.

use super::field::Field;
use super::id::{FieldId, PageId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(skip)]
    id: PageId,
    pub title: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Page {
            id: PageId::new(),
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Append a default field and return its index
    pub fn push_field(&mut self) -> usize {
        self.fields.push(Field::new());
        self.fields.len() - 1
    }

    /// Remove the field at `index`, if any
    pub fn remove_field(&mut self, index: usize) -> Option<Field> {
        (index < self.fields.len()).then(|| self.fields.remove(index))
    }

    /// Current position of the field with the given id
    pub fn position_of(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|field| field.id() == id)
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|field| field.id() == id)
    }
}
