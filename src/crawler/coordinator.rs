//! Scrape coordinator - main orchestration logic
//!
//! This module runs the pipeline end to end:
//! - Crawl the listing pages to the terminal page
//! - Resolve the deduplicated author references into profiles
//! - Write the quotes table, then the authors table
//!
//! There is no rollback between the two writes: if the authors phase fails
//! after the quotes file was written, the quotes file stays on disk.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchOutcome};
use crate::crawler::paginator::crawl_listing;
use crate::crawler::parser::parse_author;
use crate::output::write_table;
use crate::records::{Author, AuthorRef};
use crate::url::author_url;
use crate::Result;
use reqwest::Client;
use std::collections::HashSet;
use std::time::Instant;
use tokio::task::JoinSet;
use url::Url;

/// Counts reported by a completed run
#[derive(Debug, Clone, Copy)]
pub struct ScrapeReport {
    /// Listing pages that yielded records
    pub pages_visited: u32,

    /// Rows in the quotes table
    pub quotes_written: usize,

    /// Rows in the authors table
    pub authors_written: usize,

    /// Unique references that could not be resolved into a profile
    pub authors_skipped: usize,
}

/// Runs the full scrape pipeline
pub async fn run_scrape(config: &Config) -> Result<ScrapeReport> {
    let started = Instant::now();
    let client = build_http_client()?;

    let harvest = crawl_listing(&client, &config.base_url).await?;

    let unique_refs = harvest.author_refs.len();
    let authors = resolve_authors(&client, &config.base_url, harvest.author_refs).await?;
    let authors_skipped = unique_refs - authors.len();

    write_table(&config.quotes_path, &harvest.quotes)?;
    write_table(&config.authors_path, &authors)?;

    let report = ScrapeReport {
        pages_visited: harvest.pages_visited,
        quotes_written: harvest.quotes.len(),
        authors_written: authors.len(),
        authors_skipped,
    };

    tracing::info!(
        "Scrape completed in {:.2?}: {} quotes, {} authors, {} skipped",
        started.elapsed(),
        report.quotes_written,
        report.authors_written,
        report.authors_skipped
    );

    Ok(report)
}

/// Resolves each unique author reference into a profile
///
/// One task per reference. The input set is already deduplicated, which
/// bounds the fan-out to one fetch per author no matter how many quotes cite
/// them. A reference whose page is absent or whose profile fails to extract
/// is skipped; the run continues with the authors that resolved. Results are
/// sorted by name, since arrival order depends on task scheduling.
async fn resolve_authors(
    client: &Client,
    base: &Url,
    refs: HashSet<AuthorRef>,
) -> Result<Vec<Author>> {
    let mut tasks = JoinSet::new();
    for author_ref in refs {
        let url = author_url(base, &author_ref)?;
        tasks.spawn({
            // Client is Arc-backed so we can clone cheaply
            let client = client.clone();
            async move { resolve_author(&client, &url).await }
        });
    }

    let mut authors = Vec::new();
    while let Some(resolved) = tasks.join_next().await {
        if let Some(author) = resolved? {
            authors.push(author);
        }
    }

    authors.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(authors)
}

/// Fetches and extracts one author profile, or None if it must be skipped
async fn resolve_author(client: &Client, url: &Url) -> Option<Author> {
    let body = match fetch_page(client, url).await {
        FetchOutcome::Page(body) => body,
        FetchOutcome::Absent => {
            tracing::warn!("Author page {} is absent, skipping", url);
            return None;
        }
    };

    match parse_author(&body) {
        Ok(author) => Some(author),
        Err(e) => {
            tracing::warn!("Skipping author at {}: {}", url, e);
            None
        }
    }
}
