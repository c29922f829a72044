//! Export sinks
//!
//! Where an exported artifact goes once the user asks for it: the clipboard (through the
//! export text area) or a downloaded file. Delivery is best-effort; a failure is reported back
//! to the builder, which shows it to the user.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default download name of the exported form
pub const DEFAULT_FILE_NAME: &str = "custom-form.html";
/// MIME type of the exported form
pub const DEFAULT_MIME_TYPE: &str = "text/html";
/// Shown after a successful copy
pub const COPIED_NOTICE: &str = "Copied to clipboard!";

/// One exported document, ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The environment refused access (e.g. clipboard permission)
    Denied(String),
    /// Writing the artifact failed
    Io(String),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Denied(msg) => write!(f, "access denied: {}", msg),
            SinkError::Io(msg) => write!(f, "write failed: {}", msg),
        }
    }
}

impl std::error::Error for SinkError {}

pub trait ExportSink {
    /// Deliver the artifact. `Ok(Some(notice))` when the user should be told it happened.
    fn deliver(&mut self, artifact: &Artifact) -> Result<Option<String>, SinkError>;
}

/// In-memory clipboard behind the export text area
#[derive(Debug, Clone)]
pub struct ClipboardSink {
    contents: Option<String>,
    available: bool,
}

impl ClipboardSink {
    pub fn new() -> Self {
        ClipboardSink {
            contents: None,
            available: true,
        }
    }

    /// A clipboard that refuses every copy
    pub fn denied() -> Self {
        ClipboardSink {
            contents: None,
            available: false,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Default for ClipboardSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportSink for ClipboardSink {
    fn deliver(&mut self, artifact: &Artifact) -> Result<Option<String>, SinkError> {
        if !self.available {
            warn!("clipboard unavailable");
            return Err(SinkError::Denied("clipboard is not available".to_string()));
        }
        self.contents = Some(artifact.contents.clone());
        Ok(Some(COPIED_NOTICE.to_string()))
    }
}

/// Writes artifacts into a directory under their file name
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl FileSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        FileSink {
            dir: dir.as_ref().to_path_buf(),
            written: Vec::new(),
        }
    }

    /// Paths written so far, oldest first
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ExportSink for FileSink {
    fn deliver(&mut self, artifact: &Artifact) -> Result<Option<String>, SinkError> {
        let path = self.dir.join(&artifact.file_name);
        fs::write(&path, artifact.contents.as_bytes())
            .map_err(|err| SinkError::Io(format!("{}: {}", path.display(), err)))?;
        info!(path = %path.display(), mime = %artifact.mime_type, "artifact downloaded");
        self.written.push(path);
        Ok(None)
    }
}
