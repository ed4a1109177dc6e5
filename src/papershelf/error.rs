use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Unknown sort key: {0} (expected title, authors, presenters or date)")]
    InvalidSortKey(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
