pub mod app;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod logging;
pub mod page;
pub mod storage;

pub use app::{ImportOutcome, ScrapbookApp};
pub use config::ScrapbookConfig;
pub use error::{Result, ScrapbookError};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
