//! # File Paths
//!
//! Every paper links to a file. A record may name that file explicitly through its
//! `pdf` field; otherwise the path is derived from the title:
//!
//! ```text
//! "Attention Is All You Need?"  ->  pdfs/attention-is-all-you-need.pdf
//! ```
//!
//! Derivation never touches the filesystem and never checks the file exists.

use crate::config::{DEFAULT_PDF_DIR, DEFAULT_PDF_EXT};
use crate::model::Paper;

/// Characters that are dropped from titles because they are unsafe in file names.
const FORBIDDEN: &[char] = &[':', '\\', '/', '?', '*', '"', '<', '>', '|'];

/// Turns a title into a filesystem-safe identifier.
///
/// Lowercases and trims, drops [`FORBIDDEN`] characters, turns whitespace runs into a
/// single `-`, collapses repeated hyphens and strips them from both ends. The result
/// may be empty.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());

    for c in lowered.trim().chars() {
        if FORBIDDEN.contains(&c) {
            continue;
        }
        if c.is_whitespace() || c == '-' {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        } else {
            slug.push(c);
        }
    }

    slug.trim_matches('-').to_string()
}

/// Where derived paper files live: `<dir>/<slug>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfLayout {
    dir: String,
    ext: String,
}

impl Default for PdfLayout {
    fn default() -> Self {
        Self::new(DEFAULT_PDF_DIR, DEFAULT_PDF_EXT)
    }
}

impl PdfLayout {
    pub fn new(dir: &str, ext: &str) -> Self {
        Self {
            dir: dir.trim_end_matches('/').to_string(),
            ext: ext.trim_start_matches('.').to_string(),
        }
    }

    pub fn dir(&self) -> &str {
        &self.dir
    }

    pub fn ext(&self) -> &str {
        &self.ext
    }

    /// Path for a title that has no explicit file.
    pub fn derive(&self, title: &str) -> String {
        let slug = slugify(title);
        if self.dir.is_empty() {
            format!("{}.{}", slug, self.ext)
        } else {
            format!("{}/{}.{}", self.dir, slug, self.ext)
        }
    }

    /// The explicit `pdf` path when present, the derived one otherwise.
    pub fn resolve(&self, paper: &Paper) -> String {
        match paper.pdf_str() {
            Some(explicit) => explicit.to_string(),
            None => self.derive(&paper.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_joins_words() {
        assert_eq!(slugify("Hello: World?"), "hello-world");
    }

    #[test]
    fn collapses_surrounding_and_inner_whitespace() {
        assert_eq!(slugify("  A   B  "), "a-b");
    }

    #[test]
    fn only_hyphens_yields_empty() {
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn removes_every_forbidden_character() {
        assert_eq!(slugify(r#"a:b\c/d?e*f"g<h>i|j"#), "abcdefghij");
    }

    #[test]
    fn removal_before_whitespace_collapse() {
        assert_eq!(slugify("Deep : Learning"), "deep-learning");
        assert_eq!(slugify(": leading"), "leading");
        assert_eq!(slugify("a - b"), "a-b");
    }

    #[test]
    fn keeps_other_punctuation_and_unicode() {
        assert_eq!(slugify("Über Graphs, Part 2."), "über-graphs,-part-2.");
    }

    #[test]
    fn slug_is_idempotent() {
        for title in ["Hello: World?", "  A   B  ", "x -- y", "Ünïcode   Tïtle", "---a---"] {
            let once = slugify(title);
            assert_eq!(slugify(&once), once, "not idempotent for {:?}", title);
        }
    }

    #[test]
    fn explicit_pdf_wins() {
        let paper = Paper::new("My Paper").with_pdf("custom/x.pdf");
        assert_eq!(PdfLayout::default().resolve(&paper), "custom/x.pdf");
    }

    #[test]
    fn derives_path_from_title() {
        let paper = Paper::new("My Paper");
        assert_eq!(PdfLayout::default().resolve(&paper), "pdfs/my-paper.pdf");
    }

    #[test]
    fn empty_explicit_pdf_falls_back_to_derived() {
        let paper = Paper::new("My Paper").with_pdf("");
        assert_eq!(PdfLayout::default().resolve(&paper), "pdfs/my-paper.pdf");
    }

    #[test]
    fn custom_layout_is_normalized() {
        let layout = PdfLayout::new("papers/", ".PDF");
        assert_eq!(layout.derive("A B"), "papers/a-b.PDF");
        let flat = PdfLayout::new("", "pdf");
        assert_eq!(flat.derive("A B"), "a-b.pdf");
    }
}
