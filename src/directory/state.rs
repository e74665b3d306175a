//! The directory controller: one `DirectoryState` per page load.

use crate::directory::{highlight, order, query};
use crate::models::{Category, HighlightSpans, PublicationRecord, SortKey, ViewEntry};

/// Default number of records per category shown before "reveal more".
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Input events the controller reacts to.
///
/// Tab state is owned by the external tab widget; `TabSelect` only mirrors
/// it here so the view can ask for the active container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEvent {
    /// A keystroke in the search box
    SearchInput(String),
    /// A new year-filter selection (empty clears the filter)
    YearChange(String),
    /// A new sort-order selection
    SortChange(SortKey),
    /// A click on a category's "reveal more" control
    RevealMore(Category),
    /// A tab selection in the external tab widget
    TabSelect(Category),
}

/// One record plus its derived per-pass state.
#[derive(Debug, Clone)]
struct Slot {
    record: PublicationRecord,
    visible: bool,
    revealed: bool,
    highlights: HighlightSpans,
}

/// One category container: its ordered records and pagination state.
#[derive(Debug, Clone, Default)]
struct Shelf {
    slots: Vec<Slot>,
    reveal_exhausted: bool,
}

/// In-memory state of the publications directory.
///
/// Records are constructed once at load time; the controller never creates
/// or deletes them, it only toggles visibility and reveal flags and reorders
/// each category container. Search, year filter and sort always apply to
/// **all** categories, never just the active tab, so switching tabs can
/// never surface stale state.
#[derive(Debug, Clone)]
pub struct DirectoryState {
    search_term: String,
    selected_year: String,
    sort_key: SortKey,
    active_tab: Category,
    page_size: usize,
    shelves: [Shelf; Category::ALL.len()],
}

fn shelf_index(category: Category) -> usize {
    match category {
        Category::Article => 0,
        Category::Book => 1,
        Category::Conference => 2,
        Category::Patent => 3,
    }
}

impl DirectoryState {
    /// Build the directory from its initial records.
    ///
    /// Records are grouped by category in their given order; the first
    /// `page_size` of each category start revealed, the rest wait behind
    /// that category's "reveal more" control. A `page_size` of zero reveals
    /// nothing up front.
    pub fn new(records: Vec<PublicationRecord>, page_size: usize) -> Self {
        let mut shelves: [Shelf; Category::ALL.len()] = Default::default();
        for record in records {
            let shelf = &mut shelves[shelf_index(record.category)];
            let revealed = shelf.slots.len() < page_size;
            shelf.slots.push(Slot {
                record,
                visible: true,
                revealed,
                highlights: HighlightSpans::default(),
            });
        }
        for (shelf, category) in shelves.iter().zip(Category::ALL) {
            tracing::debug!(
                category = category.id(),
                records = shelf.slots.len(),
                "loaded category"
            );
        }
        Self {
            search_term: String::new(),
            selected_year: String::new(),
            sort_key: SortKey::default(),
            active_tab: Category::Article,
            page_size,
            shelves,
        }
    }

    /// Dispatch one input event.
    pub fn apply(&mut self, event: DirectoryEvent) {
        match event {
            DirectoryEvent::SearchInput(term) => self.search(&term),
            DirectoryEvent::YearChange(year) => self.filter_by_year(&year),
            DirectoryEvent::SortChange(key) => self.sort(key),
            DirectoryEvent::RevealMore(category) => self.reveal_more(category),
            DirectoryEvent::TabSelect(category) => self.select_tab(category),
        }
    }

    /// Recompute visibility and highlighting for every record in every
    /// category from the given search term.
    ///
    /// The term is trimmed and lowercased; an empty result clears the
    /// search (everything visible, subject to the year filter). Highlight
    /// spans from the previous pass are discarded before the new ones are
    /// computed.
    pub fn search(&mut self, term: &str) {
        self.search_term = query::normalize_term(term);
        tracing::debug!(term = %self.search_term, "search");
        self.refresh();
    }

    /// Set or clear the year filter and recompute visibility everywhere.
    ///
    /// A non-empty value is a substring match against each record's year
    /// text; it ANDs with the search predicate.
    pub fn filter_by_year(&mut self, year: &str) {
        self.selected_year = query::normalize_year(year);
        tracing::debug!(year = %self.selected_year, "filter by year");
        self.refresh();
    }

    /// Re-order every category container under the given sort key.
    ///
    /// Sorting covers the whole container, revealed or not; the sort is
    /// stable, which `cited` relies on for its tie-break contract.
    pub fn sort(&mut self, key: SortKey) {
        self.sort_key = key;
        tracing::debug!(key = key.id(), "sort");
        for shelf in &mut self.shelves {
            shelf
                .slots
                .sort_by(|a, b| order::compare(key, &a.record, &b.record));
        }
    }

    /// Reveal every paginated record in one category.
    ///
    /// One-shot and idempotent: after the first call the category's reveal
    /// control is exhausted and later calls are no-ops. Other categories,
    /// ordering and visibility are untouched.
    pub fn reveal_more(&mut self, category: Category) {
        let shelf = &mut self.shelves[shelf_index(category)];
        if shelf.reveal_exhausted {
            tracing::debug!(category = category.id(), "reveal already exhausted");
            return;
        }
        for slot in &mut shelf.slots {
            slot.revealed = true;
        }
        shelf.reveal_exhausted = true;
        tracing::debug!(category = category.id(), "revealed all records");
    }

    /// Mirror the externally-owned active tab.
    pub fn select_tab(&mut self, category: Category) {
        self.active_tab = category;
        tracing::debug!(category = category.id(), "tab selected");
    }

    fn refresh(&mut self) {
        let pattern = highlight::term_pattern(&self.search_term);
        for shelf in &mut self.shelves {
            for slot in &mut shelf.slots {
                slot.visible = query::matches_search(&slot.record, &self.search_term)
                    && query::matches_year(&slot.record, &self.selected_year);
                slot.highlights = highlight::spans_for(&slot.record, pattern.as_ref());
            }
        }
    }

    /// The normalized search term currently applied.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The year filter currently applied; empty when cleared.
    pub fn selected_year(&self) -> &str {
        &self.selected_year
    }

    /// The sort key currently applied.
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// The category the external tab widget last selected.
    pub fn active_tab(&self) -> Category {
        self.active_tab
    }

    /// The per-category first-page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether a category's reveal control has been used up.
    pub fn is_reveal_exhausted(&self, category: Category) -> bool {
        self.shelves[shelf_index(category)].reveal_exhausted
    }

    /// Total records in a category.
    pub fn count(&self, category: Category) -> usize {
        self.shelves[shelf_index(category)].slots.len()
    }

    /// Records in a category passing the current search and year predicates.
    pub fn visible_count(&self, category: Category) -> usize {
        self.shelves[shelf_index(category)]
            .slots
            .iter()
            .filter(|s| s.visible)
            .count()
    }

    /// The full ordered sequence for one category, with derived flags.
    ///
    /// `rendered` is `visible && (revealed || within the first page)`,
    /// where position counts in the container's current order.
    pub fn entries(&self, category: Category) -> Vec<ViewEntry<'_>> {
        self.shelves[shelf_index(category)]
            .slots
            .iter()
            .enumerate()
            .map(|(position, slot)| ViewEntry {
                record: &slot.record,
                visible: slot.visible,
                revealed: slot.revealed,
                rendered: slot.visible && (slot.revealed || position < self.page_size),
                highlights: &slot.highlights,
            })
            .collect()
    }

    /// Just the records the view must paint for one category, in order.
    pub fn rendered(&self, category: Category) -> Vec<&PublicationRecord> {
        self.entries(category)
            .into_iter()
            .filter(|e| e.rendered)
            .map(|e| e.record)
            .collect()
    }

    /// The entries of the active tab's category.
    pub fn active_entries(&self) -> Vec<ViewEntry<'_>> {
        self.entries(self.active_tab)
    }
}
