//! Quotecrawl: a paginated quote harvester
//!
//! This crate crawls a paginated quote site, extracts quote records and the
//! author profiles they reference, deduplicates the author links across pages,
//! and writes both record sets out as CSV tables.

pub mod config;
pub mod crawler;
pub mod output;
pub mod records;
pub mod url;

use thiserror::Error;

/// Main error type for quotecrawl operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Missing element in {context}: expected `{selector}`")]
    MissingElement {
        context: String,
        selector: &'static str,
    },

    #[error("Unparseable birth date for {author}: {value:?}")]
    DateParse { author: String, value: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("Failed to join a fetch task: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Unsupported URL scheme: {0}")]
    InvalidScheme(String),
}

/// Result type alias for quotecrawl operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{scrape, ScrapeReport};
pub use records::{Author, AuthorRef, Quote};
