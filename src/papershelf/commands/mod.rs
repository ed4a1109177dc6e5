//! # Command Layer
//!
//! Pure listing logic. Functions here take the loaded papers as a slice and return
//! positions into that slice, so a view is always a reordered subset of the canonical
//! collection and never a copy of it.
//!
//! - [`search`]: which papers match a query
//! - [`sort`]: how a view is ordered
//! - [`view`]: the composite `(papers, query, sort) -> view` derivation
//! - [`paths`]: file paths for the papers matching a query
//! - [`config`]: reading and updating the stored configuration

use crate::config::ShelfConfig;

pub mod config;
pub mod paths;
pub mod search;
pub mod sort;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub paper_paths: Vec<String>,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_paper_paths(mut self, paths: Vec<String>) -> Self {
        self.paper_paths = paths;
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }
}
