//! # Papershelf Architecture
//!
//! Papershelf renders a searchable, sortable listing of papers (title, authors,
//! presenters, date and a downloadable file) from a static `papers.json`. It is a
//! **library that happens to have a CLI client**: every listing behavior lives here,
//! and the binary only parses arguments and prints.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints tables/HTML, owns exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the source and the session, dispatches events       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session / Catalog (session.rs, catalog.rs)                 │
//! │  - Load lifecycle, the single owner of query + sort + view  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure filter / sort / derive functions over &[Paper]      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (store/)                                      │
//! │  - PaperSource trait: FileSource, InMemorySource            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The View Is Derived, Never Patched
//!
//! The visible listing is always `derive(all, query, sort)`. A query change filters the
//! full collection again and re-applies the remembered sort; a header click re-sorts
//! the filtered set. Nothing narrows the previous result, so clearing a search always
//! brings back every paper.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code returns Rust values (`Listing`, `HeaderState`, HTML
//! strings, `CmdResult`), never prints and never exits. Logging goes through `tracing`;
//! the binary decides where it ends up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`session`]: Load lifecycle (`Unloaded → Loading → Loaded | LoadFailed`)
//! - [`catalog`]: Loaded state, input events and header indicators
//! - [`commands`]: Filter, sort and view derivation
//! - [`render`]: HTML table and page rendering
//! - [`paths`]: Slugs and file path resolution
//! - [`store`]: Paper sources
//! - [`model`]: `Paper`, `SortKey`, `SortDirection`, `SortState`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod paths;
pub mod render;
pub mod session;
pub mod store;
