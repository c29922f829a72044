//! JSON snapshot format
//!
//! The same `{ title, pages: [{ title, fields: [..] }] }` shape the exporter embeds. This is
//! the only format that can be parsed back into a document; ids are minted fresh on load.

use crate::error::FormatError;
use crate::format::Format;
use formsmith_model::FormDocument;

#[derive(Debug, Clone, Copy)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl Default for JsonFormat {
    fn default() -> Self {
        JsonFormat { pretty: true }
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Form document snapshot (JSON)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<FormDocument, FormatError> {
        Ok(serde_json::from_str(source)?)
    }

    fn serialize(&self, doc: &FormDocument) -> Result<String, FormatError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(doc)
        } else {
            serde_json::to_string(doc)
        };
        json.map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
