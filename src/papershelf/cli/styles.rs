//! Named terminal styles and the `style` template filter that applies them.
//!
//! Templates write `{{ value | style("title") }}`. With color off the filter returns the
//! text unchanged; an unknown style name is flagged with [`MISSING_STYLE_INDICATOR`] so
//! template typos show up in output instead of silently rendering plain.

use console::Style;
use minijinja::{Environment, Value};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const HEADER: &str = "header";
    pub const HEADER_SORTED: &str = "header_sorted";
    pub const TITLE: &str = "title";
    pub const PEOPLE: &str = "people";
    pub const DATE: &str = "date";
    pub const PATH: &str = "path";
    pub const STATUS: &str = "status";
    pub const SUMMARY: &str = "summary";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static SHELF_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::HEADER, Style::new().bold())
        .add(names::HEADER_SORTED, Style::new().bold().cyan())
        .add(names::TITLE, Style::new())
        .add(names::PEOPLE, Style::new().dim())
        .add(names::DATE, Style::new().yellow())
        .add(names::PATH, Style::new().blue().underlined())
        .add(names::STATUS, Style::new().italic())
        .add(names::SUMMARY, Style::new().dim().italic())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});

/// Registers the `style` filter on a minijinja environment.
pub fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
}
