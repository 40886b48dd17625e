use thiserror::Error;

/// Custom error types for subsel
#[derive(Debug, Error)]
pub enum SubselError {
    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Search(#[from] crate::search::SearchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
