//! # API Facade
//!
//! The API layer is a **thin facade** over the session, the command layer and the
//! renderer. It is the single entry point for UI clients (the CLI today, a page
//! generator or anything else tomorrow).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the paper source and the [`Session`] built from it
//! - **Dispatches** input events to the session
//! - **Returns structured types** (`Listing`, `HeaderState`, `CmdResult`) or rendered HTML
//!
//! It does not write to stdout or stderr and holds no listing logic of its own.
//!
//! ## Generic Over PaperSource
//!
//! `ShelfApi<S: PaperSource>` works with any source:
//! - Production: `ShelfApi<FileSource>`
//! - Testing: `ShelfApi<InMemorySource>`

use crate::catalog::{Event, HeaderState};
use crate::commands;
use crate::error::Result;
use crate::model::{SortDirection, SortKey};
use crate::paths::PdfLayout;
use crate::render::HtmlRenderer;
use crate::session::{Listing, Session};
use crate::store::PaperSource;
use std::path::Path;

/// The main API facade for papershelf operations.
pub struct ShelfApi<S: PaperSource> {
    source: S,
    session: Session,
    renderer: HtmlRenderer,
}

impl<S: PaperSource> ShelfApi<S> {
    pub fn new(source: S, layout: PdfLayout) -> Result<Self> {
        Ok(Self {
            source,
            session: Session::new(),
            renderer: HtmlRenderer::new(layout)?,
        })
    }

    /// Fetches the collection. Safe to call more than once; only the first call fetches.
    pub fn load(&mut self) -> &Session {
        self.session.load(&self.source);
        &self.session
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn layout(&self) -> &PdfLayout {
        self.renderer.layout()
    }

    pub fn dispatch(&mut self, event: Event) -> bool {
        self.session.dispatch(event)
    }

    pub fn search(&mut self, query: &str) -> bool {
        self.dispatch(Event::QueryChanged(query.to_string()))
    }

    pub fn click_header(&mut self, key: SortKey) -> bool {
        self.dispatch(Event::HeaderClicked(key))
    }

    /// Sorts by an explicit key and direction, bypassing header toggling.
    pub fn sort_by(&mut self, key: SortKey, direction: SortDirection) -> bool {
        match self.session.catalog_mut() {
            Some(catalog) => {
                catalog.sort_by(key, direction);
                true
            }
            None => false,
        }
    }

    pub fn listing(&self) -> Listing<'_> {
        self.session.listing()
    }

    pub fn header_states(&self) -> Vec<HeaderState> {
        self.session.header_states()
    }

    pub fn render_body(&self) -> Result<String> {
        self.renderer.render_body(&self.session.listing())
    }

    pub fn render_page(&self) -> Result<String> {
        self.renderer.render_page(&self.session)
    }

    /// File paths of the visible papers. Empty until the session has loaded.
    pub fn paper_paths(&self) -> commands::CmdResult {
        match &self.session {
            Session::Loaded(catalog) => {
                commands::paths::run(catalog.all(), catalog.view_indexes(), self.layout())
            }
            Session::LoadFailed => {
                let mut result = commands::CmdResult::default();
                result.add_message(commands::CmdMessage::error(
                    crate::render::LOAD_FAILED_MESSAGE,
                ));
                result
            }
            Session::Unloaded | Session::Loading => commands::CmdResult::default(),
        }
    }
}

/// Reads or updates the stored configuration in `dir`. Needs no loaded papers.
pub fn config(dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(dir, action)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::abc_source;
    use crate::store::memory::InMemorySource;

    fn api() -> ShelfApi<InMemorySource> {
        let mut api = ShelfApi::new(abc_source(), PdfLayout::default()).unwrap();
        api.load();
        api
    }

    fn titles(api: &ShelfApi<InMemorySource>) -> Vec<String> {
        match api.listing() {
            Listing::Rows(rows) => rows.iter().map(|p| p.title.clone()).collect(),
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn search_dispatches_query_event() {
        let mut api = api();
        assert!(api.search("2024-01"));
        assert_eq!(titles(&api), vec!["A Paper"]);
    }

    #[test]
    fn click_header_toggles() {
        let mut api = api();
        api.click_header(SortKey::Title);
        assert_eq!(titles(&api), vec!["C Paper", "B Paper", "A Paper"]);
    }

    #[test]
    fn sort_by_sets_direction_directly() {
        let mut api = api();
        assert!(api.sort_by(SortKey::Date, SortDirection::Descending));
        assert_eq!(titles(&api), vec!["B Paper", "A Paper", "C Paper"]);
    }

    #[test]
    fn paper_paths_follow_view() {
        let mut api = api();
        api.search("b paper");
        assert_eq!(api.paper_paths().paper_paths, vec!["pdfs/b-paper.pdf"]);
    }

    #[test]
    fn failed_load_reports_failure_for_paths() {
        let mut api = ShelfApi::new(InMemorySource::failing(), PdfLayout::default()).unwrap();
        api.load();
        let result = api.paper_paths();
        assert!(result.paper_paths.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!api.sort_by(SortKey::Date, SortDirection::Ascending));
    }

    #[test]
    fn paths_are_empty_before_load() {
        let api = ShelfApi::new(abc_source(), PdfLayout::default()).unwrap();
        let result = api.paper_paths();
        assert!(result.paper_paths.is_empty());
        assert!(result.messages.is_empty());
    }
}
