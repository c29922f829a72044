//! Rendering and export formats for formsmith documents
//!
//!     This crate turns a [`FormDocument`](formsmith_model::FormDocument) into markup. It powers
//!     both the builder's live preview and the standalone export, and it is shell agnostic: no
//!     code here prints, reads env vars or touches the filesystem except [`publish`] when it is
//!     given an explicit output path.
//!
//! Architecture
//!
//!     - markup: thin helpers over an html5ever `RcDom`. All user text goes through the html5ever
//!       serializer, so labels, titles, placeholders and options are always escaped.
//!     - render: the one canonical page renderer. `(document, page index) → page markup` plus
//!       the paging progress. The preview calls it directly; the exporter calls it for every page
//!       and embeds the results, so the two paths cannot drift apart.
//!     - Format trait and FormatRegistry: uniform interface over the output formats.
//!     - formats: `html` (standalone export), `json` (document snapshot), `preview` (page
//!       fragment).
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── markup.rs               # RcDom construction and serialization
//!     ├── render
//!     │   ├── control.rs          # Field kind → control mapping
//!     │   ├── page.rs             # Page and preview rendering
//!     │   └── progress.rs         # Page counter and progress fraction
//!     ├── formats
//!     │   ├── html                # Standalone export artifact
//!     │   ├── json                # Snapshot
//!     │   └── preview             # Page fragment
//!     ├── publish.rs
//!     └── lib.rs

pub mod error;
pub mod format;
pub mod formats;
pub mod markup;
pub mod publish;
pub mod registry;
pub mod render;

pub use error::FormatError;
pub use format::Format;
pub use formats::html::ExportOptions;
pub use registry::FormatRegistry;
pub use render::{render_page, render_preview, PreviewFrame, Progress};
