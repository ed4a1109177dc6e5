//! # HTML Rendering
//!
//! Projects a [`Listing`] into table markup. Every render produces the complete table
//! body; nothing is patched in place.
//!
//! Templates live in `templates/*.tmp` and are embedded at compile time. The
//! environment auto-escapes everything as HTML, so titles and names from the data file
//! can never inject markup.

use crate::catalog::HeaderState;
use crate::error::Result;
use crate::model::Paper;
use crate::paths::PdfLayout;
use crate::session::{Listing, Session};
use minijinja::{AutoEscape, Environment};
use serde::Serialize;

pub const ROWS_TEMPLATE: &str = include_str!("templates/rows.tmp");
pub const PAGE_TEMPLATE: &str = include_str!("templates/page.tmp");

pub const NO_RESULTS_MESSAGE: &str = "No papers match your search.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load papers. Check that papers.json is present.";

/// Shown in the date column for undated papers.
pub const MISSING_DATE_LABEL: &str = "-";

const PAGE_HEADING: &str = "Papers";

/// Display-ready values for one paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperRow {
    pub title: String,
    pub authors: String,
    pub presenters: String,
    pub date_label: String,
    pub pdf_path: String,
}

impl PaperRow {
    pub fn new(paper: &Paper, layout: &PdfLayout) -> Self {
        Self {
            title: paper.title.clone(),
            authors: paper.joined_authors(),
            presenters: paper.joined_presenters(),
            date_label: date_label(paper),
            pdf_path: layout.resolve(paper),
        }
    }
}

/// Human readable date such as `Jan 5, 2024`.
///
/// Undated papers get [`MISSING_DATE_LABEL`]; a date that does not parse is shown as written.
pub fn date_label(paper: &Paper) -> String {
    match (paper.parsed_date(), paper.date_str()) {
        (Some(date), _) => date.format("%b %-d, %Y").to_string(),
        (None, Some(raw)) => raw.to_string(),
        (None, None) => MISSING_DATE_LABEL.to_string(),
    }
}

/// Status text replacing the rows, if any.
pub fn status_message(listing: &Listing<'_>) -> Option<&'static str> {
    match listing {
        Listing::Pending => None,
        Listing::LoadFailed => Some(LOAD_FAILED_MESSAGE),
        Listing::Rows(rows) if rows.is_empty() => Some(NO_RESULTS_MESSAGE),
        Listing::Rows(_) => None,
    }
}

#[derive(Serialize)]
struct BodyData {
    rows: Vec<PaperRow>,
    status: Option<&'static str>,
}

#[derive(Serialize)]
struct HeaderData {
    key: String,
    label: &'static str,
    aria_sort: &'static str,
}

impl From<&HeaderState> for HeaderData {
    fn from(header: &HeaderState) -> Self {
        Self {
            key: header.key.to_string(),
            label: header.key.label(),
            aria_sort: header.aria_sort.as_str(),
        }
    }
}

#[derive(Serialize)]
struct PageData<'a> {
    heading: &'a str,
    query: &'a str,
    headers: Vec<HeaderData>,
    rows: Vec<PaperRow>,
    status: Option<&'static str>,
}

pub struct HtmlRenderer {
    env: Environment<'static>,
    layout: PdfLayout,
}

impl HtmlRenderer {
    pub fn new(layout: PdfLayout) -> Result<Self> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_: &str| AutoEscape::Html);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template("rows.html", ROWS_TEMPLATE)?;
        env.add_template("page.html", PAGE_TEMPLATE)?;
        Ok(Self { env, layout })
    }

    pub fn layout(&self) -> &PdfLayout {
        &self.layout
    }

    fn rows(&self, listing: &Listing<'_>) -> Vec<PaperRow> {
        match listing {
            Listing::Rows(papers) => papers
                .iter()
                .map(|paper| PaperRow::new(paper, &self.layout))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Renders the `<tbody>` contents for `listing`.
    pub fn render_body(&self, listing: &Listing<'_>) -> Result<String> {
        let data = BodyData {
            rows: self.rows(listing),
            status: status_message(listing),
        };
        Ok(self.env.get_template("rows.html")?.render(&data)?)
    }

    /// Renders a standalone page: search box, sortable headers and the current rows.
    pub fn render_page(&self, session: &Session) -> Result<String> {
        let listing = session.listing();
        let data = PageData {
            heading: PAGE_HEADING,
            query: session.catalog().map(|c| c.query()).unwrap_or_default(),
            headers: session.header_states().iter().map(HeaderData::from).collect(),
            rows: self.rows(&listing),
            status: status_message(&listing),
        };
        Ok(self.env.get_template("page.html")?.render(&data)?)
    }
}
