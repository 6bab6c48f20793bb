use ::scraper::error::SelectorErrorKind;
use std::path::PathBuf;

/// All errors that can occur while scraping stats or building leaderboards.
#[derive(thiserror::Error, Debug)]
pub enum LeaderboardError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned something other than 200 OK.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// A scraped stat value could not be read as a number.
    #[error("failed to parse value {value:?} for stat {label:?}")]
    StatParse { label: String, value: String },

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("csv error on {}: {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },

    /// A competitive export is missing a column it cannot do without.
    #[error("{} has no {column} column", .path.display())]
    MissingColumn {
        path: PathBuf,
        column: &'static str,
    },
}

impl<'a> From<SelectorErrorKind<'a>> for LeaderboardError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        LeaderboardError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LeaderboardError>;
