//! The publications directory controller.
//!
//! One [`DirectoryState`] holds the full set of publication records, grouped
//! by category, and reacts synchronously to the page's input events: search
//! keystrokes, year-filter changes, sort-order changes, per-category
//! "reveal more" clicks, and tab selections. Operations always apply across
//! every category container so a tab switch can never expose stale
//! filtering.
//!
//! ```rust
//! use publications_directory::directory::{DirectoryEvent, DirectoryState};
//! use publications_directory::models::{Category, RecordBuilder, SortKey};
//!
//! let records = vec![
//!     RecordBuilder::new("Graph Theory", Category::Article)
//!         .year("2019")
//!         .citations(120)
//!         .build(),
//!     RecordBuilder::new("Deep Learning", Category::Article)
//!         .year("2022")
//!         .citations(50)
//!         .build(),
//! ];
//! let mut state = DirectoryState::new(records, 5);
//!
//! state.apply(DirectoryEvent::SortChange(SortKey::Recent));
//! state.apply(DirectoryEvent::SearchInput("graph".into()));
//!
//! let visible: Vec<_> = state
//!     .entries(Category::Article)
//!     .into_iter()
//!     .filter(|e| e.rendered)
//!     .map(|e| e.record.title.clone())
//!     .collect();
//! assert_eq!(visible, vec!["Graph Theory"]);
//! ```

pub mod highlight;
mod loader;
mod order;
mod query;
mod state;

pub use loader::{
    build_state, load_from_path, parse_json, parse_toml, CitationField, DirectoryDocument,
    PublicationEntry, YearField,
};
pub use order::compare;
pub use query::{matches_search, matches_year, normalize_term, normalize_year};
pub use state::{DirectoryEvent, DirectoryState, DEFAULT_PAGE_SIZE};
