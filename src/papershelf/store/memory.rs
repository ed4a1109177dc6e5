use super::PaperSource;
use crate::error::{Result, ShelfError};
use crate::model::Paper;

/// In-memory source for testing and development.
/// Either yields its papers or fails every fetch.
#[derive(Default)]
pub struct InMemorySource {
    papers: Vec<Paper>,
    fail: bool,
}

impl InMemorySource {
    pub fn new(papers: Vec<Paper>) -> Self {
        Self {
            papers,
            fail: false,
        }
    }

    /// A source whose fetch always fails.
    pub fn failing() -> Self {
        Self {
            papers: Vec::new(),
            fail: true,
        }
    }
}

impl PaperSource for InMemorySource {
    fn fetch(&self) -> Result<Vec<Paper>> {
        if self.fail {
            return Err(ShelfError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "in-memory source configured to fail",
            )));
        }
        Ok(self.papers.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} papers)", self.papers.len())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// The three-paper collection used throughout the listing tests:
    /// B (Feb 2024), A (Jan 2024), C (undated), in that load order.
    pub fn abc_papers() -> Vec<Paper> {
        vec![
            Paper::new("B Paper").with_date("2024-02-01"),
            Paper::new("A Paper").with_date("2024-01-01"),
            Paper::new("C Paper"),
        ]
    }

    pub fn abc_source() -> InMemorySource {
        InMemorySource::new(abc_papers())
    }
}
