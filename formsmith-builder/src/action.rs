//! Actions and notices
//!
//! An [`Action`] is one discrete UI event, already resolved to what it means for the model.
//! Positions (`page`, `field`) are the ones the views rendered into `data-page` and
//! `data-field`. Actions deserialize from tagged JSON so a session can be scripted:
//!
//! ```text
//! [{"action": "add-page"}, {"action": "add-field"},
//!  {"action": "edit-draft", "edit": {"input": "label", "value": "Name"}},
//!  {"action": "save-field"}]
//! ```

use formsmith_model::DraftEdit;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Action {
    /// Append a page named `Page N` and select it
    AddPage,
    SelectPage {
        page: usize,
    },
    /// Rename the selected page
    SetPageTitle {
        title: String,
    },
    SetFormTitle {
        title: String,
    },
    /// Append a default field to the selected page and start editing it
    AddField,
    /// Start editing a field of the selected page
    SelectField {
        field: usize,
    },
    /// Stage one edit in the field editor
    EditDraft {
        edit: DraftEdit,
    },
    SaveField,
    RemoveField,
    PreviewNext,
    PreviewPrevious,
    /// Generate the artifact into the export text area
    Export,
    CopyExport,
    DownloadExport,
}

/// Something the user must be told, shown as a blocking message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Failure(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(message) | Notice::Failure(message) => message,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::Failure(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
