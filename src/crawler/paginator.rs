//! Pagination over the listing pages
//!
//! Pages are visited strictly in order, 1, 2, 3, …, each exactly once. The
//! crawl ends at the first page that yields no quotes, whether because the
//! page fetched empty or because the fetch came back absent; the fetcher
//! collapses both into the same observable effect, so they are distinct
//! terminal states here only for reporting.

use crate::crawler::fetcher::{fetch_page, FetchOutcome};
use crate::crawler::parser::{parse_listing, ListingPage};
use crate::records::{AuthorRef, Quote};
use crate::url::page_url;
use crate::Result;
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// Classification of one visited listing page
#[derive(Debug)]
enum PageOutcome {
    /// The page yielded at least one quote; pagination continues
    HasRecords(ListingPage),

    /// The page fetched fine but matched zero quote blocks
    Empty,

    /// No document came back for the page
    FetchFailed,
}

/// Why the crawl stopped, with the page index that stopped it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlEnd {
    /// Page n was fetched and contained no quotes
    EmptyPage(u32),

    /// Page n was absent
    FetchFailed(u32),
}

/// Everything gathered by a completed listing crawl
#[derive(Debug)]
pub struct ListingHarvest {
    /// All quotes, in page order and in-page order
    pub quotes: Vec<Quote>,

    /// Union of the author references of every visited page
    pub author_refs: HashSet<AuthorRef>,

    /// Number of pages that yielded records
    pub pages_visited: u32,

    /// The terminal condition that stopped the crawl
    pub end: CrawlEnd,
}

/// Crawls listing pages from page 1 until a terminal page
///
/// Quotes accumulate in visit order, which keeps the output sequence equal to
/// the concatenation of per-page extraction order. Author references merge
/// into a single set, so a later page citing an already-seen author inserts
/// nothing new. There is no bound on the page count other than the terminal
/// condition: a source that paginates forever will be crawled forever.
pub async fn crawl_listing(client: &Client, base: &Url) -> Result<ListingHarvest> {
    let mut quotes = Vec::new();
    let mut author_refs = HashSet::new();
    let mut page = 1u32;

    let end = loop {
        match visit_page(client, base, page).await? {
            PageOutcome::HasRecords(listing) => {
                tracing::debug!(
                    "Page {}: {} quotes, {} author refs",
                    page,
                    listing.quotes.len(),
                    listing.author_refs.len()
                );
                quotes.extend(listing.quotes);
                author_refs.extend(listing.author_refs);
                page += 1;
            }
            PageOutcome::Empty => break CrawlEnd::EmptyPage(page),
            PageOutcome::FetchFailed => break CrawlEnd::FetchFailed(page),
        }
    };

    let pages_visited = page - 1;
    tracing::info!(
        "Pagination finished after {} pages ({:?}): {} quotes, {} unique authors",
        pages_visited,
        end,
        quotes.len(),
        author_refs.len()
    );

    Ok(ListingHarvest {
        quotes,
        author_refs,
        pages_visited,
        end,
    })
}

/// Fetches and classifies a single listing page
///
/// Extraction faults propagate: a structurally broken page means the site's
/// markup no longer matches and continuing would corrupt the whole harvest.
async fn visit_page(client: &Client, base: &Url, page: u32) -> Result<PageOutcome> {
    let url = page_url(base, page)?;

    match fetch_page(client, &url).await {
        FetchOutcome::Absent => Ok(PageOutcome::FetchFailed),
        FetchOutcome::Page(body) => {
            let listing = parse_listing(&body)?;
            if listing.quotes.is_empty() {
                Ok(PageOutcome::Empty)
            } else {
                Ok(PageOutcome::HasRecords(listing))
            }
        }
    }
}
