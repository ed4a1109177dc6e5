//! # Terminal Rendering
//!
//! Renders the current listing as an aligned table. Layout math (column widths,
//! truncation, padding) stays in Rust because it needs Unicode-aware widths; the
//! templates only pick styles and lay out lines.

use super::styles::{names, register_style_filter, SHELF_THEME};
use super::templates::{LIST_TEMPLATE, MESSAGES_TEMPLATE, PATHS_TEMPLATE};
use minijinja::Environment;
use papershelf::api::{CmdMessage, MessageLevel};
use papershelf::catalog::{AriaSort, HeaderState};
use papershelf::paths::PdfLayout;
use papershelf::render::{status_message, PaperRow};
use papershelf::session::Listing;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COLUMN_GAP: &str = "  ";
const ASCENDING_MARKER: &str = "▲";
const DESCENDING_MARKER: &str = "▼";

/// Widest a column may grow before its cells are truncated. The file column is unbounded.
const MAX_WIDTHS: [usize; 5] = [40, 28, 20, 12, usize::MAX];

#[derive(Serialize)]
struct Cell {
    text: String,
    pad: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ListData {
    header: Vec<Cell>,
    rows: Vec<Vec<Cell>>,
    status: Option<&'static str>,
    summary: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct PathsData {
    paths: Vec<String>,
}

fn environment(use_color: bool) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    register_style_filter(&mut env, SHELF_THEME.clone(), use_color);
    env
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: bool) -> Result<String, minijinja::Error> {
    environment(use_color).render_str(template, data)
}

fn header_label(header: &HeaderState) -> String {
    match header.aria_sort {
        AriaSort::Ascending => format!("{} {}", header.key.label(), ASCENDING_MARKER),
        AriaSort::Descending => format!("{} {}", header.key.label(), DESCENDING_MARKER),
        AriaSort::None => header.key.label().to_string(),
    }
}

fn header_style(header: &HeaderState) -> &'static str {
    if header.aria_sort == AriaSort::None {
        names::HEADER
    } else {
        names::HEADER_SORTED
    }
}

/// Lays out texts into padded cells, one column width per position.
fn layout_cells(texts: Vec<(String, &'static str)>, widths: &[usize]) -> Vec<Cell> {
    let last = texts.len().saturating_sub(1);
    texts
        .into_iter()
        .enumerate()
        .map(|(i, (text, style))| {
            let text = truncate_to_width(&text, widths[i]);
            let pad = if i == last {
                String::new()
            } else {
                format!(
                    "{}{}",
                    " ".repeat(widths[i].saturating_sub(text.width())),
                    COLUMN_GAP
                )
            };
            Cell { text, pad, style }
        })
        .collect()
}

/// Renders the listing as a terminal table, with sort markers in the header.
pub fn render_listing(
    listing: &Listing<'_>,
    headers: &[HeaderState],
    layout: &PdfLayout,
    use_color: bool,
) -> String {
    let status = status_message(listing);
    let papers = match listing {
        Listing::Rows(papers) => papers.as_slice(),
        _ => &[],
    };

    let mut header_texts: Vec<(String, &'static str)> = headers
        .iter()
        .map(|h| (header_label(h), header_style(h)))
        .collect();
    header_texts.push(("File".to_string(), names::HEADER));

    let row_texts: Vec<Vec<(String, &'static str)>> = papers
        .iter()
        .map(|paper| {
            let row = PaperRow::new(paper, layout);
            vec![
                (terminal_safe(&row.title), names::TITLE),
                (terminal_safe(&row.authors), names::PEOPLE),
                (terminal_safe(&row.presenters), names::PEOPLE),
                (terminal_safe(&row.date_label), names::DATE),
                (terminal_safe(&row.pdf_path), names::PATH),
            ]
        })
        .collect();

    let widths: Vec<usize> = (0..header_texts.len())
        .map(|col| {
            let widest = row_texts
                .iter()
                .map(|r| r[col].0.width())
                .chain(std::iter::once(header_texts[col].0.width()))
                .max()
                .unwrap_or(0);
            widest.min(MAX_WIDTHS[col])
        })
        .collect();

    let sorted_by = headers
        .iter()
        .find(|h| h.aria_sort != AriaSort::None)
        .map(|h| format!(", sorted by {} {}", h.key, h.aria_sort.as_str()))
        .unwrap_or_default();

    let data = ListData {
        header: layout_cells(header_texts, &widths),
        rows: row_texts
            .into_iter()
            .map(|r| layout_cells(r, &widths))
            .collect(),
        status,
        summary: format!(
            "{} {}{}",
            papers.len(),
            if papers.len() == 1 { "paper" } else { "papers" },
            sorted_by
        ),
    };

    render_template(LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_paths(paths: &[String]) -> String {
    let data = PathsData {
        paths: paths.iter().map(|p| terminal_safe(p)).collect(),
    };
    render_template(PATHS_TEMPLATE, &data, false)
        .unwrap_or_else(|_| data.paths.iter().map(|p| format!("{}\n", p)).collect())
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage], use_color: bool) {
    let output = render_messages(messages, use_color);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Data-file text with control characters removed, so escape sequences never reach
/// the terminal. Whitespace controls (tabs, newlines) become a single space.
fn terminal_safe(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            c if !c.is_control() => Some(c),
            c if c.is_whitespace() => Some(' '),
            _ => None,
        })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use papershelf::catalog::header_states;
    use papershelf::model::{Paper, SortDirection, SortKey, SortState};

    fn papers() -> Vec<Paper> {
        vec![
            Paper::new("A Paper")
                .with_authors(["Ann", "Ben"])
                .with_date("2024-01-01"),
            Paper::new("C Paper").with_presenters(["Cy"]),
        ]
    }

    fn headers() -> Vec<HeaderState> {
        header_states(Some(SortState::new(SortKey::Date, SortDirection::Descending)))
    }

    #[test]
    fn renders_header_rows_and_summary() {
        let papers = papers();
        let listing = Listing::Rows(papers.iter().collect());
        let output = render_listing(&listing, &headers(), &PdfLayout::default(), false);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("Title"));
        assert!(lines[0].contains("Date ▼"));
        assert!(lines[0].ends_with("File"));
        assert!(lines[1].starts_with("A Paper"));
        assert!(lines[1].contains("Ann, Ben"));
        assert!(lines[1].contains("Jan 1, 2024"));
        assert!(lines[1].ends_with("pdfs/a-paper.pdf"));
        assert!(lines[2].starts_with("C Paper"));
        assert_eq!(lines[3], "2 papers, sorted by date descending");
    }

    #[test]
    fn columns_line_up() {
        let papers = papers();
        let listing = Listing::Rows(papers.iter().collect());
        let output = render_listing(&listing, &headers(), &PdfLayout::default(), false);
        let lines: Vec<&str> = output.lines().collect();
        let col = lines[0].find("Authors").unwrap();
        assert_eq!(lines[1].find("Ann, Ben").unwrap(), col);
    }

    #[test]
    fn empty_rows_show_no_results() {
        let output = render_listing(
            &Listing::Rows(vec![]),
            &headers(),
            &PdfLayout::default(),
            false,
        );
        assert_eq!(output.trim(), "No papers match your search.");
    }

    #[test]
    fn load_failure_shows_failure_status() {
        let output = render_listing(
            &Listing::LoadFailed,
            &header_states(None),
            &PdfLayout::default(),
            false,
        );
        assert_eq!(
            output.trim(),
            "Failed to load papers. Check that papers.json is present."
        );
    }

    #[test]
    fn long_titles_are_truncated() {
        let long = "x".repeat(80);
        let papers = vec![Paper::new(long.clone())];
        let listing = Listing::Rows(papers.iter().collect());
        let output = render_listing(&listing, &headers(), &PdfLayout::default(), false);
        assert!(output.contains('…'));
        assert!(!output.lines().nth(1).unwrap().starts_with(&long));
    }

    #[test]
    fn control_characters_never_reach_the_terminal() {
        let papers = vec![Paper::new("Red\u{1b}[31mAlert\u{7}")
            .with_authors(["Tab\tName"])
            .with_date("2024-01-01\u{1b}]0;x")];
        let listing = Listing::Rows(papers.iter().collect());
        let output = render_listing(&listing, &headers(), &PdfLayout::default(), false);

        assert!(!output.contains('\u{1b}'));
        assert!(!output.contains('\u{7}'));
        assert!(output.contains("Red[31mAlert"));
        assert!(output.contains("Tab Name"));
    }

    #[test]
    fn terminal_safe_keeps_printable_text() {
        assert_eq!(terminal_safe("Crème brûlée 日本"), "Crème brûlée 日本");
        assert_eq!(terminal_safe("a\nb\u{0}c"), "a bc");
    }

    #[test]
    fn truncate_respects_wide_chars() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn renders_paths_one_per_line() {
        let paths = vec!["pdfs/a.pdf".to_string(), "b.pdf".to_string()];
        assert_eq!(render_paths(&paths), "pdfs/a.pdf\nb.pdf\n");
        assert_eq!(render_paths(&["x\u{1b}[2J.pdf".to_string()]), "x[2J.pdf\n");
    }

    #[test]
    fn renders_messages() {
        let output = render_messages(
            &[CmdMessage::success("pdf-dir set to docs"), CmdMessage::error("oops")],
            false,
        );
        assert!(output.contains("pdf-dir set to docs"));
        assert!(output.contains("oops"));
        assert!(render_messages(&[], false).is_empty());
    }
}
