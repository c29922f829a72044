//! Paging position: the `Page i / N` counter and the progress fraction
//!
//! The denominator is never zero: an empty document counts as one (empty) page.

/// Position of the displayed page within the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    index: usize,
    total: usize,
}

impl Progress {
    /// Progress for `index` in a document of `page_count` pages; the index is clamped
    pub fn new(index: usize, page_count: usize) -> Self {
        let total = page_count.max(1);
        Progress {
            index: index.min(total - 1),
            total,
        }
    }

    /// Zero-based index of the displayed page
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based page number
    pub fn current(&self) -> usize {
        self.index + 1
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current() == self.total
    }

    /// `(i + 1) / N`, in `(0, 1]`
    pub fn fraction(&self) -> f64 {
        self.current() as f64 / self.total as f64
    }

    pub fn counter_text(&self) -> String {
        format!("Page {} / {}", self.current(), self.total)
    }

    /// CSS width for the progress bar fill, rounded half up to hundredths of a percent.
    /// `js/pager.js` computes the same value for the exported form.
    pub fn width(&self) -> String {
        let percent = (self.fraction() * 10000.0).round() / 100.0;
        format!("{:.2}%", percent)
    }
}
