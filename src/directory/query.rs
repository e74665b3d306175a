//! Search and year predicates.
//!
//! A record is visible iff both predicates pass. The two are independent of
//! ordering, which is what makes search, filter and sort commute.

use crate::models::PublicationRecord;

/// Normalize a raw search term: trimmed, lowercased.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Normalize a raw year selection: trimmed. Empty means no filter.
pub fn normalize_year(year: &str) -> String {
    year.trim().to_string()
}

/// Case-insensitive substring test against title OR description.
///
/// The term must already be normalized. An empty term matches everything;
/// absent fields behave as empty strings.
pub fn matches_search(record: &PublicationRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    record.title.to_lowercase().contains(term) || record.description.to_lowercase().contains(term)
}

/// Substring test against the record's year text.
///
/// Deliberately a loose match, not equality: "20" matches any year
/// containing "20". This is the documented contract for the year filter and
/// must not be tightened to exact comparison.
pub fn matches_year(record: &PublicationRecord, year: &str) -> bool {
    if year.is_empty() {
        return true;
    }
    record.year_text().contains(year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, RecordBuilder};

    fn record(title: &str, description: &str, year: Option<&str>) -> PublicationRecord {
        let mut builder = RecordBuilder::new(title, Category::Article).description(description);
        if let Some(y) = year {
            builder = builder.year(y);
        }
        builder.build()
    }

    #[test]
    fn test_search_matches_title_or_description() {
        let r = record("Graph Theory", "Spectral methods for networks.", Some("2019"));
        assert!(matches_search(&r, "graph"));
        assert!(matches_search(&r, "spectral"));
        assert!(!matches_search(&r, "quantum"));
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let r = record("Anything", "", None);
        assert!(matches_search(&r, ""));
    }

    #[test]
    fn test_year_substring_semantics() {
        let r = record("Paper", "", Some("2022"));
        assert!(matches_year(&r, "2022"));
        assert!(matches_year(&r, "20"));
        assert!(matches_year(&r, "22"));
        assert!(!matches_year(&r, "2019"));
    }

    #[test]
    fn test_missing_year_only_matches_empty_filter() {
        let r = record("Paper", "", None);
        assert!(matches_year(&r, ""));
        assert!(!matches_year(&r, "2022"));
    }

    #[test]
    fn test_normalization() {
        assert_eq!(normalize_term("  Graph Theory "), "graph theory");
        assert_eq!(normalize_year(" 2022 "), "2022");
    }
}
