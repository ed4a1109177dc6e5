//! # Paper Sources
//!
//! The collection is fetched exactly once per session through the [`PaperSource`]
//! trait, so the loading logic never depends on where the papers come from.
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: reads a JSON array of papers from disk (`papers.json`)
//! - [`memory::InMemorySource`]: fixed papers, or a forced failure, for testing
//!
//! ## Format
//!
//! ```text
//! [
//!   { "title": "A Paper", "authors": ["Ann"], "presenters": ["Bo"],
//!     "date": "2024-01-05", "pdf": "custom/a.pdf" },
//!   ...
//! ]
//! ```
//!
//! Only `title` is required.

use crate::error::Result;
use crate::model::Paper;

pub mod fs;
pub mod memory;

/// Abstract interface for fetching the paper collection.
pub trait PaperSource {
    /// Fetch the whole collection, in the order the source lists it.
    fn fetch(&self) -> Result<Vec<Paper>>;

    /// Human readable location, used in log output.
    fn describe(&self) -> String;
}
