use clap::{Args, Parser, Subcommand};
use papershelf::error::ShelfError;
use papershelf::model::{SortDirection, SortKey};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "papershelf", version)]
#[command(about = "Searchable, sortable listing of papers from a papers.json file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Paper collection to load (overrides the configured data file)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Never color terminal output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Search and ordering shared by every command that shows papers.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Only show papers whose title, authors, presenters or date contain this text
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Column to sort by: title, authors, presenters or date
    #[arg(long, value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,
}

impl ViewArgs {
    /// The explicit ordering requested, if any.
    pub fn ordering(&self) -> Option<(SortKey, SortDirection)> {
        if self.sort.is_none() && !self.desc {
            return None;
        }
        let direction = if self.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Some((self.sort.unwrap_or(SortKey::Title), direction))
    }
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    s.parse().map_err(|e: ShelfError| e.to_string())
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show papers as a table (default)
    #[command(alias = "ls")]
    List(ViewArgs),

    /// Print the HTML table body for the papers
    Render(ViewArgs),

    /// Write a complete static HTML page
    Page {
        #[command(flatten)]
        view: ViewArgs,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Interactive listing: each stdin line is a new search, `:sort KEY` clicks a header, `:quit` exits
    Browse,

    /// Print the file path of each listed paper
    Path(ViewArgs),

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, pdf-dir, pdf-ext)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
