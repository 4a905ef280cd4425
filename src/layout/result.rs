//! Layout result with statistics.

use crate::model::Page;
use serde::{Deserialize, Serialize};

/// Result of laying out a document, including pages and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResult {
    /// The laid-out pages
    pub pages: Vec<Page>,

    /// Statistics collected during layout
    pub stats: LayoutStats,
}

impl LayoutResult {
    /// Number of pages produced.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Statistics collected during layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Total number of pages produced
    pub page_count: u32,

    /// Number of text runs emitted
    pub run_count: u32,

    /// Number of line slots consumed (a split line counts once)
    pub line_count: u32,

    /// Number of sections that produced output, header included
    pub section_count: u32,

    /// Repeatable entries that were rendered
    pub entries_rendered: u32,

    /// Repeatable entries skipped because their required field was blank
    pub entries_skipped: u32,

    /// Number of page breaks taken
    pub page_breaks: u32,
}

impl LayoutStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }
}
