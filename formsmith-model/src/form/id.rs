//! Stable identifiers for pages and fields
//!
//! An id is assigned once, when the element is created, and never changes. Ids are opaque:
//! the only operations are equality, hashing and display.

use std::fmt;
use uuid::Uuid;

macro_rules! element_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl $name {
            /// Mint a new, globally unique id
            pub fn new() -> Self {
                $name(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.simple())
            }
        }
    };
}

element_id!(
    /// Identifies a [`Page`](super::Page) independently of its position
    PageId
);

element_id!(
    /// Identifies a [`Field`](super::Field) independently of its position
    FieldId
);
