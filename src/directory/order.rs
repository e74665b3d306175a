//! Per-category comparators.
//!
//! Ordering is a property of the whole category container, revealed or not,
//! and never depends on the search/filter predicates.

use crate::models::{PublicationRecord, SortKey};
use std::cmp::Ordering;

/// Compare two records under the given sort key.
///
/// `Recent` compares year **text** descending (string comparison, per the
/// documented contract; correct for fixed-width 4-digit years and stable in
/// its tie-breaks for anything else). `Cited` compares citation counts
/// descending with missing counts as zero; callers rely on a stable sort to
/// keep equal counts in prior order. `Title` compares the title as
/// displayed, ascending and case-sensitive.
pub fn compare(key: SortKey, a: &PublicationRecord, b: &PublicationRecord) -> Ordering {
    match key {
        SortKey::Recent => b.year_text().cmp(a.year_text()),
        SortKey::Cited => b.citation_count().cmp(&a.citation_count()),
        SortKey::Title => a.title.cmp(&b.title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, RecordBuilder};

    fn record(title: &str, year: Option<&str>, citations: Option<u32>) -> PublicationRecord {
        let mut builder = RecordBuilder::new(title, Category::Article);
        if let Some(y) = year {
            builder = builder.year(y);
        }
        if let Some(c) = citations {
            builder = builder.citations(c);
        }
        builder.build()
    }

    #[test]
    fn test_recent_is_descending_on_year_text() {
        let newer = record("A", Some("2022"), None);
        let older = record("B", Some("2019"), None);
        assert_eq!(compare(SortKey::Recent, &newer, &older), Ordering::Less);
        assert_eq!(compare(SortKey::Recent, &older, &newer), Ordering::Greater);
    }

    #[test]
    fn test_recent_missing_year_sorts_last() {
        let dated = record("A", Some("1999"), None);
        let undated = record("B", None, None);
        assert_eq!(compare(SortKey::Recent, &dated, &undated), Ordering::Less);
    }

    #[test]
    fn test_cited_is_descending_numeric() {
        let heavy = record("A", None, Some(120));
        let light = record("B", None, Some(50));
        assert_eq!(compare(SortKey::Cited, &heavy, &light), Ordering::Less);
        // Missing citations behave as zero.
        let none = record("C", None, None);
        assert_eq!(compare(SortKey::Cited, &light, &none), Ordering::Less);
    }

    #[test]
    fn test_title_is_ascending_case_sensitive() {
        let a = record("Algebra", None, None);
        let z = record("Zoology", None, None);
        assert_eq!(compare(SortKey::Title, &a, &z), Ordering::Less);
    }
}
