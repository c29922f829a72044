//! Interactive form builder
//!
//! The builder holds a [`FormDocument`](formsmith_model::FormDocument) plus what the user
//! currently has selected, and reacts to discrete [`Action`]s. It draws nothing itself:
//! after every action it hands freshly rendered markup for each affected [`Region`] to a
//! [`RenderTarget`], and exported artifacts go out through an [`ExportSink`].
//!
//!     Action ──▶ Builder::dispatch ──▶ model + selection
//!                      │
//!                      ├──▶ views / formsmith_babel::render ──▶ RenderTarget
//!                      └──▶ HtmlFormat ──▶ ExportSink (clipboard, file)
//!
//! The preview shown here and the pages of the exported file come from the same renderer in
//! `formsmith-babel`, so they cannot drift apart.

pub mod action;
pub mod app;
pub mod sink;
pub mod target;
pub mod views;

pub use action::{Action, Notice};
pub use app::{Builder, BuilderSettings, Surfaces, SUBMITTED_NOTICE};
pub use sink::{Artifact, ClipboardSink, ExportSink, FileSink, SinkError};
pub use target::{RecordingTarget, Region, RenderTarget};
