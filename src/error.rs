use thiserror::Error;

/// Failure of the single HTTP GET a scrape cycle performs.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP status {0}")]
    HttpStatus(u16),
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("markup could not be parsed as a document")]
    MalformedDocument,
}

/// Per-card validation failure. Non-fatal: the builder drops the card and
/// keeps going.
#[derive(Error, Debug)]
#[error("invalid {field}: {reason}")]
pub struct BuildError {
    pub field: &'static str,
    pub reason: String,
}

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScraperError>;
