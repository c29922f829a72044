//! Format implementations

pub mod html;
pub mod json;
pub mod preview;

pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use preview::PreviewFormat;
