//! Command selection and context wiring for the CLI.
//!
//! - `run()`: parses arguments, sets up logging, dispatches
//! - `init_context()`: loads configuration and builds the API over a `FileSource`
//! - `handle_*()`: per-command handlers that call the API and print
//!
//! Handlers return the process exit code. A collection that fails to load still
//! produces its placeholder output, then exits with status 1.

use super::render::{print_messages, render_listing, render_paths};
use super::setup::{Cli, Commands, ViewArgs};
use clap::Parser;
use console::Term;
use papershelf::api::{self, ConfigAction, ShelfApi};
use papershelf::catalog::Event;
use papershelf::config::{config_dir, ShelfConfig};
use papershelf::error::{Result, ShelfError};
use papershelf::store::fs::FileSource;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const EXIT_OK: i32 = 0;
const EXIT_LOAD_FAILED: i32 = 1;

struct AppContext {
    api: ShelfApi<FileSource>,
    use_color: bool,
}

impl AppContext {
    fn exit_code(&self) -> i32 {
        if self.api.session().is_failed() {
            EXIT_LOAD_FAILED
        } else {
            EXIT_OK
        }
    }
}

pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_dir = config_dir(&cwd);
    let use_color = !cli.no_color && Term::stdout().features().colors_supported();

    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&config_dir, key.clone(), value.clone(), use_color);
    }

    let mut ctx = init_context(&cli, &config_dir, use_color)?;
    ctx.api.load();

    match cli.command {
        Some(Commands::List(view)) => handle_list(&mut ctx, &view),
        Some(Commands::Render(view)) => handle_render(&mut ctx, &view),
        Some(Commands::Page { view, output }) => handle_page(&mut ctx, &view, output),
        Some(Commands::Browse) => handle_browse(&mut ctx),
        Some(Commands::Path(view)) => handle_paths(&mut ctx, &view),
        Some(Commands::Config { .. }) => Ok(EXIT_OK),
        None => handle_list(&mut ctx, &ViewArgs::default()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("papershelf={}", level)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli, config_dir: &Path, use_color: bool) -> Result<AppContext> {
    let config = ShelfConfig::load(config_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        ShelfConfig::default()
    });
    let data_file = cli
        .data
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data_file));
    debug!(data = %data_file.display(), config = %config_dir.display(), "context ready");

    let api = ShelfApi::new(FileSource::new(data_file), config.layout())?;
    Ok(AppContext { api, use_color })
}

fn apply_view(ctx: &mut AppContext, view: &ViewArgs) {
    if let Some((key, direction)) = view.ordering() {
        ctx.api.sort_by(key, direction);
    }
    if !view.search.is_empty() {
        ctx.api.search(&view.search);
    }
}

fn print_listing(ctx: &AppContext) {
    print!(
        "{}",
        render_listing(
            &ctx.api.listing(),
            &ctx.api.header_states(),
            ctx.api.layout(),
            ctx.use_color,
        )
    );
}

fn handle_list(ctx: &mut AppContext, view: &ViewArgs) -> Result<i32> {
    apply_view(ctx, view);
    print_listing(ctx);
    Ok(ctx.exit_code())
}

fn handle_render(ctx: &mut AppContext, view: &ViewArgs) -> Result<i32> {
    apply_view(ctx, view);
    print!("{}", ctx.api.render_body()?);
    Ok(ctx.exit_code())
}

fn handle_page(ctx: &mut AppContext, view: &ViewArgs, output: Option<PathBuf>) -> Result<i32> {
    apply_view(ctx, view);
    let page = ctx.api.render_page()?;
    match output {
        Some(path) => {
            std::fs::write(&path, page).map_err(ShelfError::Io)?;
            print_messages(
                &[api::CmdMessage::success(format!(
                    "Wrote {}",
                    path.display()
                ))],
                ctx.use_color,
            );
        }
        None => print!("{}", page),
    }
    Ok(ctx.exit_code())
}

/// Parses one line of `browse` input into an event, or `None` to stop.
///
/// Only the exact lines `:q` and `:quit` stop, and `:sort KEY` clicks a header. Anything
/// else, surrounding whitespace included, is the new query.
fn parse_browse_line(line: &str) -> Option<std::result::Result<Event, ShelfError>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if matches!(line, ":q" | ":quit") {
        return None;
    }
    match line.split_once(' ') {
        Some((":sort", key)) => Some(key.parse().map(Event::HeaderClicked)),
        _ => Some(Ok(Event::QueryChanged(line.to_string()))),
    }
}

fn handle_browse(ctx: &mut AppContext) -> Result<i32> {
    print_listing(ctx);
    if ctx.api.session().is_failed() {
        return Ok(EXIT_LOAD_FAILED);
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(ShelfError::Io)?;
        match parse_browse_line(&line) {
            None => break,
            Some(Ok(event)) => {
                ctx.api.dispatch(event);
                println!();
                print_listing(ctx);
            }
            Some(Err(e)) => {
                print_messages(&[api::CmdMessage::error(e.to_string())], ctx.use_color);
            }
        }
        io::stdout().flush().map_err(ShelfError::Io)?;
    }
    Ok(EXIT_OK)
}

fn handle_paths(ctx: &mut AppContext, view: &ViewArgs) -> Result<i32> {
    apply_view(ctx, view);
    let result = ctx.api.paper_paths();
    print!("{}", render_paths(&result.paper_paths));
    print_messages(&result.messages, ctx.use_color);
    Ok(ctx.exit_code())
}

fn handle_config(
    dir: &Path,
    key: Option<String>,
    value: Option<String>,
    use_color: bool,
) -> Result<i32> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api::config(dir, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            println!("data-file = {}", config.data_file);
            println!("pdf-dir = {}", config.pdf_dir);
            println!("pdf-ext = {}", config.pdf_ext);
        }
    }
    print_messages(&result.messages, use_color);
    Ok(EXIT_OK)
}
