//! Terminal templates, kept as stand-alone files so they are easy to edit and diff.
//!
//! Environments rendering these enable `trim_blocks`: the newline right after a block
//! tag is dropped, so every line break in output is an explicit blank line in the
//! template source.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const PATHS_TEMPLATE: &str = include_str!("templates/paths.tmp");
