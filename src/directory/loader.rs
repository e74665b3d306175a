//! Directory document loading.
//!
//! The hand-authored page content of the original site becomes a TOML or
//! JSON document here: one entry per publication, grouped only by its
//! `category` field. Year and citation values are kept lenient: hand-typed
//! metadata like `"120 citations"` parses, and anything unusable degrades
//! to absent rather than failing the load.

use crate::directory::state::{DirectoryState, DEFAULT_PAGE_SIZE};
use crate::error::DirectoryError;
use crate::models::{parse_citation_text, Category, PublicationRecord};
use serde::Deserialize;
use std::path::Path;

/// On-disk shape of a directory document.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryDocument {
    /// Records per category shown before "reveal more"; when absent the
    /// caller's configured page size applies
    #[serde(default)]
    pub page_size: Option<usize>,

    /// The publications, in authored order
    #[serde(default)]
    pub publications: Vec<PublicationEntry>,
}

/// One publication as authored in the document.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicationEntry {
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Year, either a number or text
    #[serde(default)]
    pub year: Option<YearField>,

    /// Citations, either a count or text like "120 citations"
    #[serde(default)]
    pub citations: Option<CitationField>,

    pub category: String,
}

/// Year as authored: a bare number or free text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum YearField {
    Number(i64),
    Text(String),
}

impl YearField {
    fn into_text(self) -> Option<String> {
        match self {
            YearField::Number(n) => Some(n.to_string()),
            YearField::Text(t) => {
                let t = t.trim().to_string();
                if t.is_empty() {
                    None
                } else {
                    Some(t)
                }
            }
        }
    }
}

/// Citations as authored: a bare count or free text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CitationField {
    Count(u32),
    Text(String),
}

impl CitationField {
    fn into_count(self) -> Option<u32> {
        match self {
            CitationField::Count(n) => Some(n),
            CitationField::Text(t) => parse_citation_text(&t),
        }
    }
}

/// Load a directory from a TOML or JSON document on disk.
///
/// A `page_size` in the document wins over the `default_page_size` the
/// caller's configuration supplies.
pub fn load_from_path(
    path: &Path,
    default_page_size: usize,
) -> Result<DirectoryState, DirectoryError> {
    let content = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    let document = match extension.as_str() {
        "toml" => parse_toml(&content)?,
        "json" => parse_json(&content)?,
        other => return Err(DirectoryError::UnsupportedFormat(other.to_string())),
    };
    tracing::info!(
        path = %path.display(),
        publications = document.publications.len(),
        "loaded directory document"
    );
    build_state(document, default_page_size)
}

/// Parse a TOML directory document.
pub fn parse_toml(content: &str) -> Result<DirectoryDocument, DirectoryError> {
    toml::from_str(content).map_err(|e| DirectoryError::Parse(e.to_string()))
}

/// Parse a JSON directory document.
pub fn parse_json(content: &str) -> Result<DirectoryDocument, DirectoryError> {
    serde_json::from_str(content).map_err(|e| DirectoryError::Parse(e.to_string()))
}

/// Build the controller state from a parsed document.
pub fn build_state(
    document: DirectoryDocument,
    default_page_size: usize,
) -> Result<DirectoryState, DirectoryError> {
    let page_size = document.page_size.unwrap_or(default_page_size);
    let mut records = Vec::with_capacity(document.publications.len());
    for (index, entry) in document.publications.into_iter().enumerate() {
        let title = entry.title.trim().to_string();
        if title.is_empty() {
            return Err(DirectoryError::EmptyTitle(index));
        }
        let category =
            Category::parse(&entry.category).ok_or_else(|| DirectoryError::UnknownCategory {
                title: title.clone(),
                category: entry.category.clone(),
            })?;
        records.push(PublicationRecord {
            title,
            description: entry.description,
            year: entry.year.and_then(YearField::into_text),
            citations: entry.citations.and_then(CitationField::into_count),
            category,
        });
    }
    Ok(DirectoryState::new(records, page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortKey;

    const TOML_DOC: &str = r#"
page_size = 2

[[publications]]
title = "Deep Learning"
description = "A survey of deep neural networks."
year = 2022
citations = 50
category = "article"

[[publications]]
title = "Graph Theory"
year = "2019"
citations = "120 citations"
category = "article"

[[publications]]
title = "Compilers"
category = "book"
"#;

    #[test]
    fn test_parse_toml_document() {
        let state = build_state(parse_toml(TOML_DOC).unwrap(), DEFAULT_PAGE_SIZE).unwrap();
        assert_eq!(state.page_size(), 2);
        assert_eq!(state.count(Category::Article), 2);
        assert_eq!(state.count(Category::Book), 1);

        let entries = state.entries(Category::Article);
        assert_eq!(entries[0].record.year_text(), "2022");
        assert_eq!(entries[1].record.citation_count(), 120);
    }

    #[test]
    fn test_parse_json_document() {
        let json = r#"{
            "publications": [
                {"title": "Patents at Work", "category": "patent", "year": "2015"}
            ]
        }"#;
        let state = build_state(parse_json(json).unwrap(), DEFAULT_PAGE_SIZE).unwrap();
        assert_eq!(state.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(state.count(Category::Patent), 1);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"{"publications": [{"title": "X", "category": "thesis"}]}"#;
        let err = build_state(parse_json(json).unwrap(), DEFAULT_PAGE_SIZE).unwrap_err();
        assert!(matches!(err, DirectoryError::UnknownCategory { .. }));
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let json = r#"{"publications": [{"title": "  ", "category": "book"}]}"#;
        let err = build_state(parse_json(json).unwrap(), DEFAULT_PAGE_SIZE).unwrap_err();
        assert!(matches!(err, DirectoryError::EmptyTitle(0)));
    }

    #[test]
    fn test_lenient_metadata_degrades() {
        let json = r#"{
            "publications": [
                {"title": "Odd One", "category": "article",
                 "year": "  ", "citations": "no citations yet"}
            ]
        }"#;
        let state = build_state(parse_json(json).unwrap(), DEFAULT_PAGE_SIZE).unwrap();
        let entries = state.entries(Category::Article);
        assert_eq!(entries[0].record.year_text(), "");
        assert_eq!(entries[0].record.citation_count(), 0);
    }

    #[test]
    fn test_loaded_state_sorts() {
        let mut state = build_state(parse_toml(TOML_DOC).unwrap(), DEFAULT_PAGE_SIZE).unwrap();
        state.sort(SortKey::Cited);
        let entries = state.entries(Category::Article);
        assert_eq!(entries[0].record.title, "Graph Theory");
    }
}
