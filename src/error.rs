use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapbookError {
    #[error("Not in a scrapbook project. Run 'scrapbook init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .scrapbook/ to reinitialize.")]
    AlreadyInitialized,

    #[error("Invalid theme: {0} (expected romantic, light or dark)")]
    InvalidTheme(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, ScrapbookError>;
