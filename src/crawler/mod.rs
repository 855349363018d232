//! Crawler module for page fetching and record extraction
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching with absent-page classification
//! - HTML parsing and record extraction
//! - Pagination over the listing until a terminal page
//! - Overall scrape coordination

mod coordinator;
mod fetcher;
mod paginator;
mod parser;

pub use coordinator::{run_scrape, ScrapeReport};
pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use paginator::{crawl_listing, CrawlEnd, ListingHarvest};
pub use parser::{extract_author_refs, extract_quotes, parse_author, parse_listing, ListingPage};

use crate::config::Config;
use crate::Result;

/// Runs a complete scrape operation
///
/// This is the main entry point for a run. It will:
/// 1. Build the HTTP client
/// 2. Crawl listing pages in order until the terminal page
/// 3. Resolve every unique author reference into a profile
/// 4. Write the quotes and authors tables
pub async fn scrape(config: &Config) -> Result<ScrapeReport> {
    run_scrape(config).await
}
