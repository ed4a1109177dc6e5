//! # CLI Layer
//!
//! This module is **one possible UI client** for papershelf. It is the only place
//! that knows about stdout, stderr, stdin and exit codes.
//!
//! - `setup.rs`: clap argument definitions
//! - `commands.rs`: context wiring and per-command handlers
//! - `render.rs`: terminal table and message rendering
//! - `styles.rs` / `templates.rs`: themed minijinja templates for the terminal
//!
//! Running `papershelf` with no subcommand lists every paper, like `papershelf list`.

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
