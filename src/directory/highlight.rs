//! Search-term highlight spans.
//!
//! Spans are byte ranges over the original title/description text, found
//! with a case-insensitive escaped-literal pattern so they line up with the
//! search predicate. They are recomputed wholesale on every search pass;
//! the previous pass's spans are simply discarded, which is what keeps a
//! renderer from nesting or duplicating highlight wrapping.

use crate::models::{HighlightSpans, PublicationRecord};
use regex::Regex;

/// Build the match pattern for a normalized search term.
///
/// Returns `None` for an empty term (nothing to highlight).
pub fn term_pattern(term: &str) -> Option<Regex> {
    if term.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(term))).ok()
}

/// Compute the highlight spans for one record under the current pattern.
pub fn spans_for(record: &PublicationRecord, pattern: Option<&Regex>) -> HighlightSpans {
    let Some(pattern) = pattern else {
        return HighlightSpans::default();
    };
    HighlightSpans {
        title: field_spans(&record.title, pattern),
        description: field_spans(&record.description, pattern),
    }
}

fn field_spans(text: &str, pattern: &Regex) -> Vec<(usize, usize)> {
    pattern.find_iter(text).map(|m| (m.start(), m.end())).collect()
}
