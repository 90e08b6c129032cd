//! The state of one list widget and the pipeline that derives what it shows.
//!
//! A [`ListView`] is an immutable value. Every user edit or feed tick goes
//! through one of the `with_*` reducers, which return a new state, and
//! [`ListView::derive`] turns the state into the rows of the current page:
//!
//! snapshot → filter → sort → highlight → paginate

use std::sync::Arc;

use crate::entity::ListEntity;
use crate::filter;
use crate::filter::FilterState;
use crate::paginate;
use crate::paginate::PageState;
use crate::sort;
use crate::sort::SortState;

/// Lifecycle of a list widget. Loading is synchronous, so `Loading` is only
/// observable between creating a view and its first snapshot being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIs)]
pub enum ListPhase {
    #[default]
    Idle,
    Loading,
    Displaying,
}

/// What the widget should render for the derived page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum ListOutcome {
    Rows,
    /// The snapshot has entities but none pass the search and filters.
    NoMatches,
    /// The feed has produced nothing (yet).
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<E> {
    pub items: Vec<E>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Entities passing search and filters, across all pages.
    pub total_matches: usize,
    pub outcome: ListOutcome,
}

impl<E> ListPage<E> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListView<E: ListEntity> {
    snapshot: Arc<[E]>,
    phase: ListPhase,
    search: String,
    filters: FilterState<E::Field>,
    sort: SortState<E::Field>,
    page: PageState,
    highlight: Option<String>,
}

impl<E: ListEntity> Default for ListView<E> {
    fn default() -> Self {
        Self::new(PageState::default())
    }
}

impl<E: ListEntity> ListView<E> {
    pub fn new(page: PageState) -> Self {
        Self {
            snapshot: Arc::from(Vec::new()),
            phase: ListPhase::Idle,
            search: String::new(),
            filters: FilterState::default(),
            sort: SortState::default(),
            page,
            highlight: None,
        }
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self::new(PageState::with_size(page_size))
    }

    // --- Getters ---

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn snapshot(&self) -> &[E] {
        &self.snapshot
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &FilterState<E::Field> {
        &self.filters
    }

    pub fn sort(&self) -> SortState<E::Field> {
        self.sort
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn highlight(&self) -> Option<&str> {
        self.highlight.as_deref()
    }

    // --- Reducers ---

    /// Marks the view as waiting for its first snapshot.
    pub fn loading(self) -> Self {
        Self {
            phase: if self.phase.is_idle() {
                ListPhase::Loading
            } else {
                self.phase
            },
            ..self
        }
    }

    /// Replaces the working set with a new feed tick. The page is kept if it
    /// is still in range and clamped otherwise.
    pub fn with_snapshot(self, snapshot: Vec<E>) -> Self {
        let snapshot: Arc<[E]> = Arc::from(snapshot);
        let matches = self.count_matches(&snapshot);
        Self {
            page: self.page.clamped(matches),
            snapshot,
            phase: ListPhase::Displaying,
            ..self
        }
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        let search = search.into();
        if search == self.search {
            return self;
        }
        Self {
            search,
            page: self.page.reset(),
            ..self
        }
    }

    pub fn with_filters(self, filters: FilterState<E::Field>) -> Self {
        if filters == self.filters {
            return self;
        }
        Self {
            filters,
            page: self.page.reset(),
            ..self
        }
    }

    /// Highlighted entities are moved to the front of the list.
    pub fn with_highlight(self, highlight: Option<String>) -> Self {
        let highlight = highlight.filter(|h| !h.trim().is_empty());
        if highlight == self.highlight {
            return self;
        }
        Self {
            highlight,
            page: self.page.reset(),
            ..self
        }
    }

    /// Header click on `key`, see [`SortState::toggled`].
    pub fn sort_by(self, key: E::Field) -> Self {
        Self {
            sort: self.sort.toggled(key),
            ..self
        }
    }

    pub fn with_sort(self, sort: SortState<E::Field>) -> Self {
        Self { sort, ..self }
    }

    pub fn go_to_page(self, page: usize) -> Self {
        let matches = self.count_matches(&self.snapshot);
        Self {
            page: self.page.go_to(page).clamped(matches),
            ..self
        }
    }

    pub fn next_page(self) -> Self {
        let next = self.page.current_page().saturating_add(1);
        self.go_to_page(next)
    }

    pub fn previous_page(self) -> Self {
        let previous = self.page.current_page().saturating_sub(1);
        self.go_to_page(previous)
    }

    // --- Derivation ---

    fn count_matches(&self, snapshot: &[E]) -> usize {
        snapshot
            .iter()
            .filter(|e| filter::matches(*e, &self.search, &self.filters))
            .count()
    }

    /// Filtered and sorted entities of every page, highlighted ones first.
    pub fn ordered(&self) -> Vec<E> {
        let filtered = filter::apply(&self.snapshot, &self.search, &self.filters);
        let sorted = sort::apply(filtered, &self.sort);
        match &self.highlight {
            Some(needle) => promote(sorted, needle),
            None => sorted,
        }
    }

    pub fn derive(&self) -> ListPage<E> {
        let ordered = self.ordered();
        let page = paginate::apply(&ordered, &self.page);
        let outcome = if self.snapshot.is_empty() {
            ListOutcome::Empty
        } else if ordered.is_empty() {
            ListOutcome::NoMatches
        } else {
            ListOutcome::Rows
        };

        ListPage {
            items: page.items,
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_matches: ordered.len(),
            outcome,
        }
    }

    /// True if `entity` matches the current highlight needle.
    pub fn is_highlighted(&self, entity: &E) -> bool {
        self.highlight
            .as_deref()
            .is_some_and(|needle| matches_highlight(entity, needle))
    }
}

fn matches_highlight<E: ListEntity>(entity: &E, needle: &str) -> bool {
    let needle_lower = needle.trim().to_lowercase();
    E::highlight_fields().iter().any(|f| {
        let value = entity.field(*f);
        match value {
            crate::entity::FieldValue::Tags(_) => value.contains_lowercase(&needle_lower),
            _ => value.equals_ignore_case(&needle_lower),
        }
    })
}

/// Stable partition: entities matching `needle` first, each group in its
/// original order.
pub fn promote<E: ListEntity>(entities: Vec<E>, needle: &str) -> Vec<E> {
    let (mut front, back): (Vec<E>, Vec<E>) = entities
        .into_iter()
        .partition(|e| matches_highlight(e, needle));
    front.extend(back);
    front
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::testing::ids;
    use crate::entity::testing::Col;
    use crate::entity::testing::Row;
    use crate::filter::Constraint;
    use crate::sort::SortDirection;

    fn rows(n: u32) -> Vec<Row> {
        (1..=n).map(|i| Row::new(i, &format!("Token{i}"), i as f64 * 100.0)).collect()
    }

    #[test]
    fn test_volume_scenario() {
        let snapshot = vec![Row::new(1, "One", 500.0), Row::new(2, "Two", 1500.0), Row::new(3, "Three", 1000.0)];
        let view = ListView::with_page_size(2)
            .with_snapshot(snapshot)
            .with_filters(FilterState::new().with("volumeMin", Constraint::range_from_text(Col::Volume, "600", "")))
            .with_sort(SortState::by(Col::Volume, SortDirection::Descending));

        let page = view.derive();
        assert_eq!(ids(&page.items), vec!["2", "3"]);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_matches, 2);
        assert!(page.outcome.is_rows());
    }

    #[test]
    fn test_phase_transitions() {
        let view: ListView<Row> = ListView::default();
        assert!(view.phase().is_idle());
        let view = view.loading();
        assert!(view.phase().is_loading());
        let view = view.with_snapshot(rows(3));
        assert!(view.phase().is_displaying());
        assert!(view.loading().phase().is_displaying());
    }

    #[test]
    fn test_search_and_filter_edits_reset_page() {
        let view = ListView::with_page_size(2).with_snapshot(rows(9)).go_to_page(4);
        assert_eq!(view.page().current_page(), 4);

        let searched = view.clone().with_search("token");
        assert_eq!(searched.page().current_page(), 1);

        let filtered = view.clone().with_filters(
            FilterState::new().with("vol", Constraint::range_from_text(Col::Volume, "100", "")),
        );
        assert_eq!(filtered.page().current_page(), 1);

        // an identical edit is not a change
        let same = view.clone().with_search("");
        assert_eq!(same.page().current_page(), 4);
    }

    #[test]
    fn test_filter_shrink_clamps_to_last_page() {
        let view = ListView::with_page_size(2).with_snapshot(rows(9)).go_to_page(5);
        assert_eq!(view.derive().current_page, 5);

        // the next tick shrinks the list to three rows
        let view = view.with_snapshot(rows(3));
        let page = view.derive();
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 2);
        assert_eq!(ids(&page.items), vec!["3"]);
    }

    #[test]
    fn test_derive_clamps_stale_page() {
        // bypass with_filters so the page is not reset
        let view = ListView::with_page_size(3).with_snapshot(rows(9)).go_to_page(3);
        let narrowed = ListView {
            filters: FilterState::new().with("vol", Constraint::range_from_text(Col::Volume, "", "200")),
            ..view
        };
        let page = narrowed.derive();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(ids(&page.items), vec!["1", "2"]);
    }

    #[test]
    fn test_outcomes() {
        let empty: ListView<Row> = ListView::default().with_snapshot(Vec::new());
        assert!(empty.derive().outcome.is_empty());

        let no_match = ListView::default().with_snapshot(rows(3)).with_search("zzz");
        let page = no_match.derive();
        assert!(page.outcome.is_no_matches());
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_sort_by_toggles() {
        let view = ListView::default().with_snapshot(rows(4)).sort_by(Col::Volume);
        assert_eq!(ids(&view.derive().items), vec!["4", "3", "2", "1"]);
        let view = view.sort_by(Col::Volume);
        assert_eq!(ids(&view.derive().items), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_highlight_moves_matches_first_stably() {
        let snapshot = vec![
            Row::new(1, "Alpha", 1.0).labels(&["Whale"]),
            Row::new(2, "Frog", 2.0),
            Row::new(3, "Gamma", 3.0).labels(&["Smart Money", "Whale"]),
            Row::new(4, "Delta", 4.0),
        ];
        let view = ListView::default()
            .with_snapshot(snapshot)
            .with_highlight(Some("whale".to_string()));
        assert_eq!(ids(&view.derive().items), vec!["1", "3", "2", "4"]);

        let by_symbol = view.clone().with_highlight(Some("FROG".to_string()));
        assert_eq!(ids(&by_symbol.derive().items), vec!["2", "1", "3", "4"]);
        assert!(by_symbol.is_highlighted(&by_symbol.snapshot()[1]));

        let blank = view.with_highlight(Some("  ".to_string()));
        assert_eq!(blank.highlight(), None);
    }

    #[test]
    fn test_page_navigation() {
        let view = ListView::with_page_size(4).with_snapshot(rows(10));
        let view = view.next_page().next_page().next_page();
        assert_eq!(view.derive().current_page, 3);
        assert!(!view.derive().has_next());
        let view = view.previous_page();
        let page = view.derive();
        assert_eq!(page.current_page, 2);
        assert!(page.has_previous());
        assert!(page.has_next());
    }
}
