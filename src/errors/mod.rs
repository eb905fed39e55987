use thiserror::Error;

/// Failures raised by the feed fetcher. Never retried internally; the caller
/// decides whether to retry or abort.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Keyword must not be empty")]
    EmptyKeyword,

    #[error("Limit must be at least 1")]
    InvalidLimit,

    #[error("Invalid search URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parsing failed: {0}")]
    FeedParse(String),
}

/// Failures raised by the sentiment classifier for a single text. Fatal to
/// the call, not to the surrounding sequence.
#[derive(Error, Debug)]
pub enum ClassificationError {
    #[error("Sentiment scoring failed: {0}")]
    Scoring(String),
}

/// Top-level error for the orchestration layer.
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Classification failed: {0}")]
    Classification(#[from] ClassificationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MonitorResult<T> = Result<T, MonitorError>;
