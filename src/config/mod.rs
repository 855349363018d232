//! Run configuration
//!
//! There is no configuration file: the crawl target is fixed and the CLI only
//! overrides the two output paths. Everything else uses defaults.

use crate::{ConfigError, ConfigResult};
use std::path::PathBuf;
use url::Url;

/// Base URL of the site to crawl
pub const DEFAULT_BASE_URL: &str = "https://quotes.toscrape.com/";

/// Default output path for the quotes table
pub const DEFAULT_QUOTES_PATH: &str = "quotes.csv";

/// Default output path for the authors table
pub const DEFAULT_AUTHORS_PATH: &str = "authors.csv";

/// Configuration for a single scrape run
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL listing pages and author links are resolved against
    pub base_url: Url,

    /// Where the quotes CSV is written
    pub quotes_path: PathBuf,

    /// Where the authors CSV is written
    pub authors_path: PathBuf,
}

impl Config {
    /// Creates a configuration with the default crawl target, applying the
    /// optional output-path overrides from the CLI.
    pub fn new(quotes_path: Option<PathBuf>, authors_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, quotes_path, authors_path)
    }

    /// Creates a configuration for an arbitrary base URL.
    ///
    /// The base URL must be absolute and use an http or https scheme; anything
    /// else is rejected before a single request is made.
    pub fn with_base_url(
        base_url: &str,
        quotes_path: Option<PathBuf>,
        authors_path: Option<PathBuf>,
    ) -> ConfigResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| ConfigError::InvalidUrl(format!("{base_url}: {e}")))?;

        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(ConfigError::InvalidScheme(base_url.scheme().to_string()));
        }

        Ok(Self {
            base_url,
            quotes_path: quotes_path.unwrap_or_else(|| PathBuf::from(DEFAULT_QUOTES_PATH)),
            authors_path: authors_path.unwrap_or_else(|| PathBuf::from(DEFAULT_AUTHORS_PATH)),
        })
    }
}
