//! # Session
//!
//! Lifecycle of one listing, from nothing to a loaded catalog:
//!
//! ```text
//! Unloaded ──load()──▶ Loading ──ok──▶ Loaded(Catalog)   (accepts events forever)
//!                                └─err─▶ LoadFailed        (terminal)
//! ```
//!
//! The collection is fetched once. A failed fetch is not an error to the caller: it
//! moves the session to `LoadFailed`, which renders as a status row. There is no retry.

use crate::catalog::{header_states, Catalog, Event, HeaderState};
use crate::model::Paper;
use crate::store::PaperSource;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub enum Session {
    #[default]
    Unloaded,
    Loading,
    Loaded(Catalog),
    LoadFailed,
}

/// What the listing area should show right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<'a> {
    /// Nothing has been loaded yet; the area stays blank.
    Pending,
    /// The load failed.
    LoadFailed,
    /// The current view. Empty means no paper matches the query.
    Rows(Vec<&'a Paper>),
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the collection from `source` and settles into `Loaded` or `LoadFailed`.
    ///
    /// Only an `Unloaded` session fetches; later calls are ignored.
    pub fn load<S: PaperSource>(&mut self, source: &S) {
        if !matches!(self, Session::Unloaded) {
            debug!("load ignored, session already started");
            return;
        }

        *self = Session::Loading;
        *self = match source.fetch() {
            Ok(papers) => {
                info!(source = %source.describe(), count = papers.len(), "loaded papers");
                Session::Loaded(Catalog::new(papers))
            }
            Err(e) => {
                warn!(source = %source.describe(), error = %e, "failed to load papers");
                Session::LoadFailed
            }
        };
    }

    /// Applies an input event. Returns false when there is no catalog to apply it to.
    pub fn dispatch(&mut self, event: Event) -> bool {
        match self {
            Session::Loaded(catalog) => {
                catalog.apply(event);
                true
            }
            _ => {
                debug!(?event, "event ignored, nothing loaded");
                false
            }
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            Session::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn catalog_mut(&mut self) -> Option<&mut Catalog> {
        match self {
            Session::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Session::LoadFailed)
    }

    pub fn listing(&self) -> Listing<'_> {
        match self {
            Session::Unloaded | Session::Loading => Listing::Pending,
            Session::LoadFailed => Listing::LoadFailed,
            Session::Loaded(catalog) => Listing::Rows(catalog.view()),
        }
    }

    /// Column header indicators. Headers are only marked once a load succeeds.
    pub fn header_states(&self) -> Vec<HeaderState> {
        header_states(self.catalog().map(Catalog::sort_state))
    }
}
