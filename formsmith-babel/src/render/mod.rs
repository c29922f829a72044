//! The canonical renderer
//!
//! One function maps a page to markup. The live preview shows its output directly and the
//! exporter embeds its output for every page, so the field-to-control mapping, the required
//! marker and the paging arithmetic exist exactly once.

pub mod control;
pub mod page;
pub mod progress;

pub use control::Control;
pub use page::{render_empty_state, render_page, render_preview, PreviewFrame, EMPTY_STATE};
pub use progress::Progress;
