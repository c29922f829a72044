use crate::error::FormatError;
use crate::registry::FormatRegistry;
use formsmith_model::FormDocument;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug)]
pub struct PublishSpec<'a> {
    pub document: &'a FormDocument,
    pub format: &'a str,
    pub output: Option<PathBuf>,
}

impl<'a> PublishSpec<'a> {
    pub fn new(document: &'a FormDocument, format: &'a str) -> Self {
        Self {
            document,
            format,
            output: None,
        }
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    InMemory(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
}

/// Publish with the built-in formats and their default options
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, FormatError> {
    publish_with(&FormatRegistry::with_defaults(), spec)
}

pub fn publish_with(
    registry: &FormatRegistry,
    spec: PublishSpec<'_>,
) -> Result<PublishResult, FormatError> {
    let text = registry.serialize(spec.document, spec.format)?;
    match spec.output {
        Some(path) => write_to_path(path, text.into_bytes()).map(|path| PublishResult {
            artifact: PublishArtifact::File(path),
        }),
        None => Ok(PublishResult {
            artifact: PublishArtifact::InMemory(text),
        }),
    }
}

fn write_to_path(path: PathBuf, bytes: Vec<u8>) -> Result<PathBuf, FormatError> {
    fs::write(&path, &bytes)
        .map(|_| {
            info!(path = %path.display(), bytes = bytes.len(), "published");
            path.clone()
        })
        .map_err(|err| FormatError::SerializationError(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_model::{Field, Page};
    use tempfile::tempdir;

    fn sample_document() -> FormDocument {
        FormDocument::with_title("Signup").with_pages(vec![
            Page::new("Contact").with_fields(vec![Field::with_label("Paragraph text.")])
        ])
    }

    #[test]
    fn publishes_to_memory_when_no_output_path() {
        let doc = sample_document();
        let result = publish(PublishSpec::new(&doc, "html")).expect("publish");
        match result.artifact {
            PublishArtifact::InMemory(content) => {
                assert!(content.contains("Paragraph text."));
            }
            PublishArtifact::File(_) => panic!("expected in-memory artifact"),
        }
    }

    #[test]
    fn writes_to_disk_when_output_path_provided() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom-form.html");
        let doc = sample_document();
        let result =
            publish(PublishSpec::new(&doc, "html").with_output_path(&path)).expect("publish");
        match result.artifact {
            PublishArtifact::File(p) => assert_eq!(p, path),
            PublishArtifact::InMemory(_) => panic!("expected file artifact"),
        }
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("Paragraph text."));
    }

    #[test]
    fn unknown_format_is_an_error() {
        let doc = sample_document();
        let result = publish(PublishSpec::new(&doc, "pdf"));
        assert!(matches!(result, Err(FormatError::FormatNotFound(_))));
    }
}
