use crate::model::Paper;

/// Whether `paper` matches an already lowercased query.
///
/// A paper matches when the query is a substring of its title, its joined authors,
/// its joined presenters or its date.
pub fn matches(paper: &Paper, query_lower: &str) -> bool {
    let date = paper.date_str().unwrap_or_default();
    [
        paper.title.to_lowercase(),
        paper.joined_authors().to_lowercase(),
        paper.joined_presenters().to_lowercase(),
        date.to_lowercase(),
    ]
    .iter()
    .any(|field| field.contains(query_lower))
}

/// Positions of the papers matching `query`, in load order.
///
/// An empty query matches everything.
pub fn filter_indexes(papers: &[Paper], query: &str) -> Vec<usize> {
    let query_lower = query.to_lowercase();
    papers
        .iter()
        .enumerate()
        .filter(|(_, paper)| matches(paper, &query_lower))
        .map(|(i, _)| i)
        .collect()
}
