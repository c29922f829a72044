//! Rendering target
//!
//! The builder never touches a real UI. It hands finished markup for a whole region to a
//! [`RenderTarget`], which replaces whatever the region showed before.

use std::collections::BTreeMap;
use std::fmt;

/// A replaceable area of the builder UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// Navigator listing every page
    PageList,
    /// Title input and field cards of the selected page
    PageEditor,
    /// Inputs of the field being edited
    FieldEditor,
    /// Form title above the preview (plain text)
    PreviewTitle,
    /// The one previewed page
    Preview,
    /// `Page i / N` (plain text)
    PageCounter,
    /// Progress bar fill width, as a CSS percentage (plain text)
    Progress,
    /// The export text area (plain text: the whole artifact)
    ExportArea,
}

impl Region {
    pub const ALL: [Region; 8] = [
        Region::PageList,
        Region::PageEditor,
        Region::FieldEditor,
        Region::PreviewTitle,
        Region::Preview,
        Region::PageCounter,
        Region::Progress,
        Region::ExportArea,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::PageList => "page-list",
            Region::PageEditor => "page-editor",
            Region::FieldEditor => "field-editor",
            Region::PreviewTitle => "preview-title",
            Region::Preview => "preview",
            Region::PageCounter => "page-counter",
            Region::Progress => "progress",
            Region::ExportArea => "export-area",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait RenderTarget {
    /// Replace the contents of `region` with `contents`
    fn replace(&mut self, region: Region, contents: String);
}

/// Keeps the latest contents of every region, plus how often each was replaced
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    regions: BTreeMap<Region, String>,
    replacements: BTreeMap<Region, usize>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    pub fn replacements(&self, region: Region) -> usize {
        self.replacements.get(&region).copied().unwrap_or(0)
    }

    /// Forget replacement counts, keeping contents
    pub fn reset_counts(&mut self) {
        self.replacements.clear();
    }
}

impl RenderTarget for RecordingTarget {
    fn replace(&mut self, region: Region, contents: String) {
        *self.replacements.entry(region).or_insert(0) += 1;
        self.regions.insert(region, contents);
    }
}
