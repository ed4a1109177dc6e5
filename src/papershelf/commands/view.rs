use crate::model::{Paper, SortState};
use tracing::debug;

use super::{search, sort};

/// Derives the visible listing from the full collection.
///
/// Always starts from `papers` (never from a previous view), filters by `query`,
/// then orders by `state`. Filtering and sorting are therefore order independent.
pub fn derive(papers: &[Paper], query: &str, state: SortState) -> Vec<usize> {
    let mut view = search::filter_indexes(papers, query);
    sort::sort_indexes(papers, &mut view, state);
    debug!(
        query,
        key = %state.key,
        direction = state.direction.as_str(),
        shown = view.len(),
        total = papers.len(),
        "derived view"
    );
    view
}
