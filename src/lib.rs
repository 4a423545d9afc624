use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinkerError>;

#[derive(Error, Debug)]
pub enum LinkerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("HTML error: {0}")]
    Html(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl From<config::ConfigError> for LinkerError {
    #[inline]
    fn from(error: config::ConfigError) -> Self {
        Self::Config(error.to_string())
    }
}

impl From<linker::InjectError> for LinkerError {
    #[inline]
    fn from(error: linker::InjectError) -> Self {
        Self::Html(error.to_string())
    }
}

pub mod commands;
pub mod config;
pub mod linker;

pub use linker::{
    ContentLinker, CorpusIndex, IndexEntry, Keyword, KeywordExtractor, PageRecord, inject_links,
};
