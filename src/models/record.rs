//! Publication record model, the unit the directory controller operates on.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// The category container a publication lives in.
///
/// Records never change category; each category keeps its own ordering and
/// pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Article,
    Book,
    Conference,
    Patent,
}

impl Category {
    /// All categories, in the order the tab bar presents them.
    pub const ALL: [Category; 4] = [
        Category::Article,
        Category::Book,
        Category::Conference,
        Category::Patent,
    ];

    /// Returns the display name of the category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Article => "Articles",
            Category::Book => "Books",
            Category::Conference => "Conference Papers",
            Category::Patent => "Patents",
        }
    }

    /// Returns the category identifier (for CLI flags and documents).
    pub fn id(&self) -> &'static str {
        match self {
            Category::Article => "article",
            Category::Book => "book",
            Category::Conference => "conference",
            Category::Patent => "patent",
        }
    }

    /// Parse a category from its identifier.
    pub fn parse(id: &str) -> Option<Category> {
        match id.trim().to_lowercase().as_str() {
            "article" | "articles" => Some(Category::Article),
            "book" | "books" => Some(Category::Book),
            "conference" | "conferences" => Some(Category::Conference),
            "patent" | "patents" => Some(Category::Patent),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single publication in the directory.
///
/// Year and citation count come from hand-authored text and may be absent or
/// malformed; accessors degrade to an empty string / zero rather than
/// failing, and the controller treats them the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// Publication title (non-empty)
    pub title: String,

    /// Short description or abstract text
    pub description: String,

    /// Year as authored, kept as opaque text (e.g. "2022")
    pub year: Option<String>,

    /// Citation count
    pub citations: Option<u32>,

    /// Category container the record lives in
    pub category: Category,
}

impl PublicationRecord {
    /// Create a new record with required fields.
    pub fn new(title: String, category: Category) -> Self {
        Self {
            title,
            description: String::new(),
            year: None,
            citations: None,
            category,
        }
    }

    /// The year text used for filtering and ordering; empty when absent.
    pub fn year_text(&self) -> &str {
        self.year.as_deref().unwrap_or("")
    }

    /// The citation count used for ordering; zero when absent.
    pub fn citation_count(&self) -> u32 {
        self.citations.unwrap_or(0)
    }
}

/// Builder for constructing publication records.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: PublicationRecord,
}

impl RecordBuilder {
    /// Create a new builder with required fields.
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        Self {
            record: PublicationRecord::new(title.into(), category),
        }
    }

    /// Set the description text.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.record.description = description.into();
        self
    }

    /// Set the year text.
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.record.year = Some(year.into());
        self
    }

    /// Set the citation count.
    pub fn citations(mut self, count: u32) -> Self {
        self.record.citations = Some(count);
        self
    }

    /// Build the record.
    pub fn build(self) -> PublicationRecord {
        self.record
    }
}

static CITATION_RE: OnceLock<Regex> = OnceLock::new();

/// Extract a citation count from free-form metadata text.
///
/// Accepts either a bare number or phrases like `"120 citations"` /
/// `"1 citation"`; anything else degrades to `None` rather than erroring.
pub fn parse_citation_text(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    if let Ok(n) = trimmed.parse::<u32>() {
        return Some(n);
    }
    let re = CITATION_RE
        .get_or_init(|| Regex::new(r"(?i)(\d+)\s+citations?").expect("static citation pattern"));
    re.captures(trimmed)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
