//! # Catalog
//!
//! The loaded collection plus everything needed to show it: the current query, the
//! remembered sort state and the derived view.
//!
//! `Catalog` is the single owner of that state. Every change goes through a `&mut self`
//! method that recomputes the view from scratch with
//! [`commands::view::derive`](crate::commands::view::derive), so the view can never
//! drift from `(papers, query, sort)`:
//!
//! ```text
//!   QueryChanged("x")  ──┐
//!                        ├──▶ derive(all, query, sort) ──▶ view
//!   HeaderClicked(key) ──┘
//! ```
//!
//! Searching then clearing the search brings back every loaded paper, because the
//! filter always runs against the full collection.

use crate::commands::view;
use crate::model::{Paper, SortDirection, SortKey, SortState};
use serde::Serialize;

/// A user input the listing reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search text changed to the given value.
    QueryChanged(String),
    /// A column header was clicked.
    HeaderClicked(SortKey),
}

/// Value of a column header's `aria-sort` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AriaSort {
    Ascending,
    Descending,
    None,
}

impl AriaSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            AriaSort::Ascending => "ascending",
            AriaSort::Descending => "descending",
            AriaSort::None => "none",
        }
    }
}

impl From<SortDirection> for AriaSort {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => AriaSort::Ascending,
            SortDirection::Descending => AriaSort::Descending,
        }
    }
}

/// Sort indicator for one column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderState {
    pub key: SortKey,
    pub aria_sort: AriaSort,
}

/// Header indicators for `state`: the sorted column shows its direction, the rest `none`.
pub fn header_states(state: Option<SortState>) -> Vec<HeaderState> {
    SortKey::ALL
        .iter()
        .map(|&key| HeaderState {
            key,
            aria_sort: match state {
                Some(s) if s.key == key => s.direction.into(),
                _ => AriaSort::None,
            },
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct Catalog {
    all: Vec<Paper>,
    query: String,
    sort: SortState,
    view: Vec<usize>,
}

impl Catalog {
    /// Builds a catalog showing every paper under the default sort.
    pub fn new(papers: Vec<Paper>) -> Self {
        let mut catalog = Self {
            all: papers,
            query: String::new(),
            sort: SortState::default(),
            view: Vec::new(),
        };
        catalog.refresh();
        catalog
    }

    fn refresh(&mut self) {
        self.view = view::derive(&self.all, &self.query, self.sort);
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::QueryChanged(query) => self.set_query(query),
            Event::HeaderClicked(key) => self.click_header(key),
        }
    }

    /// Re-filters from the full collection and re-applies the remembered sort.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh();
    }

    /// Sorts by `key`, flipping direction when it is already the sorted column.
    pub fn click_header(&mut self, key: SortKey) {
        self.sort = self.sort.after_click(key);
        self.refresh();
    }

    pub fn sort_by(&mut self, key: SortKey, direction: SortDirection) {
        self.sort = SortState::new(key, direction);
        self.refresh();
    }

    pub fn all(&self) -> &[Paper] {
        &self.all
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Positions of the visible papers within [`Catalog::all`].
    pub fn view_indexes(&self) -> &[usize] {
        &self.view
    }

    /// The visible papers, in display order.
    pub fn view(&self) -> Vec<&Paper> {
        self.view.iter().map(|&i| &self.all[i]).collect()
    }

    pub fn header_states(&self) -> Vec<HeaderState> {
        header_states(Some(self.sort))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::abc_papers;

    fn titles(catalog: &Catalog) -> Vec<&str> {
        catalog.view().iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn starts_sorted_by_title() {
        let catalog = Catalog::new(abc_papers());
        assert_eq!(titles(&catalog), vec!["A Paper", "B Paper", "C Paper"]);
        assert_eq!(catalog.sort_state(), SortState::default());
    }

    #[test]
    fn date_header_clicks_toggle_and_keep_undated_last() {
        let mut catalog = Catalog::new(abc_papers());

        catalog.apply(Event::HeaderClicked(SortKey::Date));
        assert_eq!(titles(&catalog), vec!["A Paper", "B Paper", "C Paper"]);

        catalog.apply(Event::HeaderClicked(SortKey::Date));
        assert_eq!(titles(&catalog), vec!["B Paper", "A Paper", "C Paper"]);
        assert_eq!(
            catalog.sort_state(),
            SortState::new(SortKey::Date, SortDirection::Descending)
        );
    }

    #[test]
    fn query_keeps_remembered_sort() {
        let mut catalog = Catalog::new(abc_papers());
        catalog.sort_by(SortKey::Date, SortDirection::Descending);

        catalog.apply(Event::QueryChanged("paper".into()));
        assert_eq!(titles(&catalog), vec!["B Paper", "A Paper", "C Paper"]);

        catalog.apply(Event::QueryChanged("2024-01".into()));
        assert_eq!(titles(&catalog), vec!["A Paper"]);
    }

    #[test]
    fn clearing_query_restores_everything() {
        let mut catalog = Catalog::new(abc_papers());
        catalog.set_query("no such paper");
        assert!(catalog.view().is_empty());

        catalog.set_query("");
        assert_eq!(catalog.view().len(), 3);
    }

    #[test]
    fn narrowing_twice_is_not_cumulative() {
        let mut catalog = Catalog::new(abc_papers());
        catalog.set_query("a paper");
        assert_eq!(titles(&catalog), vec!["A Paper"]);

        catalog.set_query("b paper");
        assert_eq!(titles(&catalog), vec!["B Paper"]);
    }

    #[test]
    fn view_indexes_point_into_load_order() {
        let catalog = Catalog::new(abc_papers());
        assert_eq!(catalog.view_indexes(), &[1, 0, 2]);
        assert_eq!(catalog.all()[0].title, "B Paper");
    }

    #[test]
    fn headers_follow_sort_state() {
        let mut catalog = Catalog::new(abc_papers());
        let headers = catalog.header_states();
        assert_eq!(headers[0].aria_sort, AriaSort::Ascending);
        assert!(headers[1..].iter().all(|h| h.aria_sort == AriaSort::None));

        catalog.click_header(SortKey::Date);
        catalog.click_header(SortKey::Date);
        let headers = catalog.header_states();
        assert_eq!(headers[0].aria_sort, AriaSort::None);
        assert_eq!(headers[3].key, SortKey::Date);
        assert_eq!(headers[3].aria_sort, AriaSort::Descending);
    }

    #[test]
    fn no_sort_state_means_no_indicators() {
        assert!(header_states(None)
            .iter()
            .all(|h| h.aria_sort == AriaSort::None));
    }
}
