//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper, including:
//! - Building the HTTP client with a proper user agent string
//! - GET requests for listing and author detail pages
//! - Collapsing failures into the Absent signal

use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Result of fetching one page
///
/// The pipeline only distinguishes "got a document" from "no document": a
/// non-success status, a timeout, and a connection failure all have the same
/// observable effect (pagination stops, or a detail lookup is skipped), so
/// they collapse into [`Absent`].
///
/// [`Absent`]: FetchOutcome::Absent
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successful response with its body
    Page(String),

    /// Non-success response or transport failure; final for this URL
    Absent,
}

impl FetchOutcome {
    /// Returns true if no document came back
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Builds the HTTP client shared by the whole run
///
/// The client carries the crate name and version as its user agent and has
/// conservative request and connect timeouts. It is Arc-backed, so cloning it
/// into fetch tasks is cheap.
pub fn build_http_client() -> reqwest::Result<Client> {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page
///
/// No retries: a failed fetch is final for that URL within one call. The
/// reason for an absence is logged but deliberately not surfaced to callers.
pub async fn fetch_page(client: &Client, url: &Url) -> FetchOutcome {
    match client.get(url.clone()).send().await {
        Ok(response) => {
            let status = response.status();
            if !status.is_success() {
                tracing::debug!("Non-success status {} for {}", status, url);
                return FetchOutcome::Absent;
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Page(body),
                Err(e) => {
                    tracing::warn!("Failed to read body from {}: {}", url, e);
                    FetchOutcome::Absent
                }
            }
        }
        Err(e) => {
            tracing::warn!("Request to {} failed: {}", url, e);
            FetchOutcome::Absent
        }
    }
}
