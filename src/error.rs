// src/error.rs
use thiserror::Error;

/// Everything the library can fail with.
///
/// Per-item failures (one book) are logged and skipped by the pipeline;
/// only setup failures (config, output directory, input files) reach `main`.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Config error: {0}")]
    Config(String),

    /// A required `<meta>` tag (or other anchor element) was absent from the page.
    #[error("missing {0} on page")]
    MissingMeta(&'static str),
}

impl From<toml::de::Error> for ScrapeError {
    fn from(e: toml::de::Error) -> Self {
        ScrapeError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
