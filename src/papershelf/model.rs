use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ShelfError;

/// Separator used whenever a multi-valued field is flattened for display, search or sort.
pub const LIST_SEPARATOR: &str = ", ";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One paper record as it appears in `papers.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub authors: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub presenters: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Paper {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            authors: Vec::new(),
            presenters: Vec::new(),
            date: None,
            pdf: None,
        }
    }

    pub fn with_authors<I, T>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_presenters<I, T>(mut self, presenters: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.presenters = presenters.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_pdf(mut self, pdf: impl Into<String>) -> Self {
        self.pdf = Some(pdf.into());
        self
    }

    pub fn joined_authors(&self) -> String {
        self.authors.join(LIST_SEPARATOR)
    }

    pub fn joined_presenters(&self) -> String {
        self.presenters.join(LIST_SEPARATOR)
    }

    /// The raw date string, treating an empty string as missing.
    pub fn date_str(&self) -> Option<&str> {
        self.date.as_deref().filter(|d| !d.is_empty())
    }

    /// The explicit file path, treating an empty string as missing.
    pub fn pdf_str(&self) -> Option<&str> {
        self.pdf.as_deref().filter(|p| !p.is_empty())
    }

    /// The calendar date, if present and well formed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date_str()
            .and_then(|d| NaiveDate::parse_from_str(d, DATE_FORMAT).ok())
    }
}

/// Column a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Title,
    Authors,
    Presenters,
    Date,
}

impl SortKey {
    /// Every sortable column, in table order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Title,
        SortKey::Authors,
        SortKey::Presenters,
        SortKey::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Authors => "authors",
            SortKey::Presenters => "presenters",
            SortKey::Date => "date",
        }
    }

    /// Column heading shown to readers.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::Authors => "Authors",
            SortKey::Presenters => "Presenters",
            SortKey::Date => "Date",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SortKey::Title),
            "authors" => Ok(SortKey::Authors),
            "presenters" => Ok(SortKey::Presenters),
            "date" => Ok(SortKey::Date),
            other => Err(ShelfError::InvalidSortKey(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// The remembered ordering of the listing. Independent of the search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Title,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// State after a click on the `key` column header.
    ///
    /// Clicking the active column flips its direction; any other column starts ascending.
    pub fn after_click(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.toggled())
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_record() {
        let paper: Paper = serde_json::from_str(r#"{"title": "Only Title"}"#).unwrap();
        assert_eq!(paper.title, "Only Title");
        assert!(paper.authors.is_empty());
        assert!(paper.presenters.is_empty());
        assert_eq!(paper.date, None);
        assert_eq!(paper.pdf, None);
    }

    #[test]
    fn null_lists_become_empty() {
        let paper: Paper =
            serde_json::from_str(r#"{"title": "T", "authors": null, "presenters": null}"#)
                .unwrap();
        assert!(paper.authors.is_empty());
        assert!(paper.presenters.is_empty());
    }

    #[test]
    fn missing_title_is_rejected() {
        let result: std::result::Result<Paper, _> =
            serde_json::from_str(r#"{"authors": ["A"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_date_and_pdf_count_as_missing() {
        let paper = Paper::new("T").with_date("").with_pdf("");
        assert_eq!(paper.date_str(), None);
        assert_eq!(paper.pdf_str(), None);
        assert_eq!(paper.parsed_date(), None);
    }

    #[test]
    fn parses_iso_dates() {
        let paper = Paper::new("T").with_date("2024-01-05");
        assert_eq!(
            paper.parsed_date(),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(Paper::new("T").with_date("soon").parsed_date(), None);
    }

    #[test]
    fn joins_lists_with_comma_space() {
        let paper = Paper::new("T").with_authors(["Alice", "Bob"]);
        assert_eq!(paper.joined_authors(), "Alice, Bob");
        assert_eq!(paper.joined_presenters(), "");
    }

    #[test]
    fn sort_key_parses_case_insensitively() {
        assert_eq!("Date".parse::<SortKey>().unwrap(), SortKey::Date);
        assert_eq!(" presenters ".parse::<SortKey>().unwrap(), SortKey::Presenters);
        assert!(matches!(
            "venue".parse::<SortKey>(),
            Err(ShelfError::InvalidSortKey(_))
        ));
    }

    #[test]
    fn clicking_same_header_toggles_direction() {
        let state = SortState::default().after_click(SortKey::Title);
        assert_eq!(state, SortState::new(SortKey::Title, SortDirection::Descending));
        let state = state.after_click(SortKey::Title);
        assert_eq!(state, SortState::new(SortKey::Title, SortDirection::Ascending));
    }

    #[test]
    fn clicking_other_header_starts_ascending() {
        let state = SortState::new(SortKey::Title, SortDirection::Descending)
            .after_click(SortKey::Date);
        assert_eq!(state, SortState::new(SortKey::Date, SortDirection::Ascending));
    }
}
