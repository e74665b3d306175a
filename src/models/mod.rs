//! Core data models for publication records and the view surface.

mod record;
mod view;

pub use record::{parse_citation_text, Category, PublicationRecord, RecordBuilder};
pub use view::{HighlightSpans, SortKey, ViewEntry};
