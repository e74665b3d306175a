//! View-model surface consumed by the rendering layer.

use crate::models::PublicationRecord;
use serde::{Deserialize, Serialize};

/// Ordering applied within each category container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recent first: descending lexicographic comparison of year text.
    ///
    /// This is a string comparison, not numeric, matching the documented
    /// contract; it is only correct for fixed-width 4-digit years, and
    /// malformed year text keeps the same tie-break behavior the contract
    /// describes.
    Recent,
    /// Most cited first: descending citation count, stable on ties.
    Cited,
    /// Ascending title, case-sensitive as displayed.
    Title,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Recent
    }
}

impl SortKey {
    /// Returns the sort identifier (for CLI flags and documents).
    pub fn id(&self) -> &'static str {
        match self {
            SortKey::Recent => "recent",
            SortKey::Cited => "cited",
            SortKey::Title => "title",
        }
    }
}

/// Byte ranges of the current search term within a record's text fields.
///
/// Ranges index into the original (not lowercased) strings so any renderer
/// can wrap them directly. Recomputed wholesale on each search pass, so no
/// stale or nested wrapping can accumulate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpans {
    /// Match ranges in the title
    pub title: Vec<(usize, usize)>,
    /// Match ranges in the description
    pub description: Vec<(usize, usize)>,
}

impl HighlightSpans {
    /// True when neither field carries a match.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }
}

/// One row of the ordered sequence the view must render for a category.
#[derive(Debug, Clone, Serialize)]
pub struct ViewEntry<'a> {
    /// The underlying record
    pub record: &'a PublicationRecord,

    /// Whether the record passes the current search AND year predicates
    pub visible: bool,

    /// Whether pagination has exposed the record
    pub revealed: bool,

    /// Whether the view must actually paint this entry:
    /// `visible && (revealed || within the first page)`
    pub rendered: bool,

    /// Current search-term match ranges for this record
    pub highlights: &'a HighlightSpans,
}
