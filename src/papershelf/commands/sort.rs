use crate::model::{Paper, SortDirection, SortKey, SortState};
use chrono::NaiveDate;
use icu_collator::{Collator, CollatorOptions, Strength};
use std::cmp::Ordering;
use tracing::warn;

thread_local! {
    static COLLATOR: Option<Collator> = new_collator();
}

/// Root-locale collator at primary strength, which ignores case and accents.
fn new_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Primary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!(error = %e, "collator unavailable, comparing lowercased text");
            None
        }
    }
}

fn collate(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Compares two strings ignoring case and diacritics (base sensitivity).
pub fn compare_text(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collate(collator.as_ref(), a, b))
}

/// Orders two optional dates so that missing ones always come last.
///
/// A missing date behaves as +infinity when ascending and -infinity when descending,
/// which after the direction is applied puts it at the bottom either way.
pub fn compare_dates(
    a: Option<NaiveDate>,
    b: Option<NaiveDate>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => directed(a.cmp(&b), direction),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn text_of(paper: &Paper, key: SortKey) -> String {
    match key {
        SortKey::Title => paper.title.clone(),
        SortKey::Authors => paper.joined_authors(),
        SortKey::Presenters => paper.joined_presenters(),
        SortKey::Date => paper.date_str().unwrap_or_default().to_string(),
    }
}

/// Stable in-place sort of `view` (positions into `papers`) by `state`.
///
/// Papers comparing equal keep their relative order in both directions.
pub fn sort_indexes(papers: &[Paper], view: &mut [usize], state: SortState) {
    match state.key {
        SortKey::Date => {
            view.sort_by(|&a, &b| {
                compare_dates(
                    papers[a].parsed_date(),
                    papers[b].parsed_date(),
                    state.direction,
                )
            });
        }
        key => {
            let mut keyed: Vec<(String, usize)> = view
                .iter()
                .map(|&i| (text_of(&papers[i], key), i))
                .collect();
            COLLATOR.with(|collator| {
                keyed.sort_by(|(a, _), (b, _)| {
                    directed(collate(collator.as_ref(), a, b), state.direction)
                });
            });
            for (slot, (_, i)) in view.iter_mut().zip(keyed) {
                *slot = i;
            }
        }
    }
}
