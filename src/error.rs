// src/error.rs
use std::path::PathBuf;

/// Why one marketplace request produced no prices.
///
/// Display strings end up verbatim in the result table's `error` column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// DNS, connect, timeout, or body read failure.
    #[error("Request failed: {0}")]
    Transport(String),

    /// Any status other than 200.
    #[error("Status code {0}")]
    Status(u16),

    #[error("Invalid selector: {0}")]
    Selector(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("{0}")]
    Args(String),
}

pub type Result<T> = std::result::Result<T, Error>;
