//! The builder
//!
//! [`Builder`] owns the document, the selection, and the preview position. Each
//! [`Action`] mutates that state and then re-renders every region the change can affect,
//! instead of patching them. Regions untouched by an action are left alone.

use crate::action::{Action, Notice};
use crate::sink::{Artifact, ExportSink, DEFAULT_FILE_NAME, DEFAULT_MIME_TYPE};
use crate::target::{Region, RenderTarget};
use crate::views;
use formsmith_babel::{render_preview, ExportOptions, Format, FormatError};
use formsmith_babel::formats::HtmlFormat;
use formsmith_model::{FormDocument, Selection};
use tracing::{debug, info, warn};

/// Shown when `Next` is pressed on the last previewed page
pub const SUBMITTED_NOTICE: &str = "Form submitted! (Preview)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderSettings {
    pub submitted_notice: String,
    pub file_name: String,
    pub mime_type: String,
    pub export: ExportOptions,
}

impl Default for BuilderSettings {
    fn default() -> Self {
        BuilderSettings {
            submitted_notice: SUBMITTED_NOTICE.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            export: ExportOptions::default(),
        }
    }
}

/// Everything outside the builder that an action can reach
pub struct Surfaces<'a> {
    pub target: &'a mut dyn RenderTarget,
    pub clipboard: &'a mut dyn ExportSink,
    pub downloads: &'a mut dyn ExportSink,
}

#[derive(Debug, Clone, Default)]
pub struct Builder {
    document: FormDocument,
    selection: Selection,
    preview_index: usize,
    last_export: Option<Artifact>,
    settings: BuilderSettings,
}

impl Builder {
    pub fn new(settings: BuilderSettings) -> Self {
        Self::with_document(FormDocument::new(), settings)
    }

    /// Start from an existing document, nothing selected, previewing its first page
    pub fn with_document(document: FormDocument, settings: BuilderSettings) -> Self {
        Builder {
            document,
            selection: Selection::new(),
            preview_index: 0,
            last_export: None,
            settings,
        }
    }

    pub fn document(&self) -> &FormDocument {
        &self.document
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn preview_index(&self) -> usize {
        self.preview_index
    }

    pub fn settings(&self) -> &BuilderSettings {
        &self.settings
    }

    /// The artifact most recently generated by [`Action::Export`]
    pub fn last_export(&self) -> Option<&Artifact> {
        self.last_export.as_ref()
    }

    /// Paint every region except the export area from scratch
    pub fn render_all(&self, target: &mut dyn RenderTarget) -> Result<(), FormatError> {
        self.render_page_list(target)?;
        self.render_page_editor(target)?;
        self.render_field_editor(target)?;
        self.render_title(target);
        self.render_preview(target)
    }

    /// Generate the standalone HTML artifact for the current document
    pub fn export(&self) -> Result<Artifact, FormatError> {
        let contents = HtmlFormat::new(self.settings.export.clone()).serialize(&self.document)?;
        info!(
            pages = self.document.page_count(),
            bytes = contents.len(),
            "form exported"
        );
        Ok(Artifact {
            file_name: self.settings.file_name.clone(),
            mime_type: self.settings.mime_type.clone(),
            contents,
        })
    }

    /// Apply one action, re-render what it touched, and return what the user must be told
    pub fn dispatch(
        &mut self,
        action: Action,
        surfaces: &mut Surfaces<'_>,
    ) -> Result<Vec<Notice>, FormatError> {
        debug!(?action, "dispatch");
        let target = &mut *surfaces.target;
        let mut notices = Vec::new();

        match action {
            Action::AddPage => {
                let title = format!("Page {}", self.document.page_count() + 1);
                let index = self.document.add_page(title);
                self.selection.select_page(&self.document, index);
                self.render_page_list(target)?;
                self.render_page_editor(target)?;
                self.render_field_editor(target)?;
                self.render_preview(target)?;
            }
            Action::SelectPage { page } => {
                if self.selection.select_page(&self.document, page) {
                    self.render_page_list(target)?;
                    self.render_page_editor(target)?;
                    self.render_field_editor(target)?;
                }
            }
            Action::SetPageTitle { title } => {
                if let Some(page) = self.selection.page_index(&self.document) {
                    self.document.set_page_title(page, title);
                    self.render_page_list(target)?;
                    self.render_preview(target)?;
                }
            }
            Action::SetFormTitle { title } => {
                self.document.set_title(title);
                self.render_title(target);
            }
            Action::AddField => {
                let added = self
                    .selection
                    .page_index(&self.document)
                    .and_then(|page| self.document.add_field(page));
                if let Some(field) = added {
                    self.selection.select_field(&self.document, field);
                    self.render_page_editor(target)?;
                    self.render_field_editor(target)?;
                    self.render_preview(target)?;
                }
            }
            Action::SelectField { field } => {
                if self.selection.select_field(&self.document, field) {
                    self.render_page_editor(target)?;
                    self.render_field_editor(target)?;
                }
            }
            Action::EditDraft { edit } => {
                if self.selection.edit_draft(edit) {
                    self.render_field_editor(target)?;
                }
            }
            Action::SaveField => {
                if self.selection.save(&mut self.document) {
                    self.render_page_editor(target)?;
                    self.render_field_editor(target)?;
                    self.render_preview(target)?;
                }
            }
            Action::RemoveField => {
                if self.selection.remove(&mut self.document) {
                    self.render_page_editor(target)?;
                    self.render_field_editor(target)?;
                    self.render_preview(target)?;
                }
            }
            Action::PreviewNext => {
                if self.preview_index + 1 < self.document.page_count() {
                    self.preview_index += 1;
                    self.render_preview(target)?;
                } else {
                    notices.push(Notice::Info(self.settings.submitted_notice.clone()));
                }
            }
            Action::PreviewPrevious => {
                if self.preview_index > 0 {
                    self.preview_index -= 1;
                    self.render_preview(target)?;
                }
            }
            Action::Export => {
                let artifact = self.export()?;
                target.replace(Region::ExportArea, artifact.contents.clone());
                self.last_export = Some(artifact);
            }
            Action::CopyExport => {
                let artifact = match &self.last_export {
                    Some(artifact) => artifact.clone(),
                    None => self.export()?,
                };
                notices.extend(deliver(&mut *surfaces.clipboard, &artifact));
            }
            Action::DownloadExport => {
                let artifact = self.export()?;
                notices.extend(deliver(&mut *surfaces.downloads, &artifact));
            }
        }

        Ok(notices)
    }

    fn render_page_list(&self, target: &mut dyn RenderTarget) -> Result<(), FormatError> {
        let html = views::page_list(&self.document, &self.selection)?;
        target.replace(Region::PageList, html);
        Ok(())
    }

    fn render_page_editor(&self, target: &mut dyn RenderTarget) -> Result<(), FormatError> {
        let html = views::page_editor(&self.document, &self.selection)?;
        target.replace(Region::PageEditor, html);
        Ok(())
    }

    fn render_field_editor(&self, target: &mut dyn RenderTarget) -> Result<(), FormatError> {
        let html = views::field_editor(&self.selection)?;
        target.replace(Region::FieldEditor, html);
        Ok(())
    }

    fn render_title(&self, target: &mut dyn RenderTarget) {
        target.replace(Region::PreviewTitle, self.document.title.clone());
    }

    fn render_preview(&self, target: &mut dyn RenderTarget) -> Result<(), FormatError> {
        let frame = render_preview(&self.document, self.preview_index)?;
        target.replace(Region::Preview, frame.body);
        target.replace(Region::PageCounter, frame.progress.counter_text());
        target.replace(Region::Progress, frame.progress.width());
        Ok(())
    }
}

fn deliver(sink: &mut dyn ExportSink, artifact: &Artifact) -> Option<Notice> {
    match sink.deliver(artifact) {
        Ok(notice) => notice.map(Notice::Info),
        Err(err) => {
            warn!(error = %err, file = %artifact.file_name, "export delivery failed");
            Some(Notice::Failure(format!("Export failed: {}", err)))
        }
    }
}
