//! Integration tests for the scrape pipeline
//!
//! These tests use wiremock to serve a fake paginated quote site and check
//! the full crawl-extract-dedupe-write cycle end to end. Unmatched requests
//! (including listing pages past the last mocked one) get wiremock's default
//! 404, which is exactly the absent-page signal the pipeline expects.

use quotecrawl::config::Config;
use quotecrawl::crawler::scrape;
use quotecrawl::output::TableRecord;
use quotecrawl::records::Quote;
use std::path::PathBuf;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// One quote block in the shape the real site uses
fn quote_block(text: &str, author: &str, href: &str, tags: &[&str]) -> String {
    let tag_anchors: String = tags
        .iter()
        .map(|t| format!(r#"<a class="tag" href="/tag/{t}/">{t}</a>"#))
        .collect();
    format!(
        r#"<div class="quote">
            <span class="text">{text}</span>
            <span>by <small class="author">{author}</small>
            <a href="{href}">(about)</a></span>
            <div class="tags">{tag_anchors}</div>
        </div>"#
    )
}

fn listing_page(blocks: &[String]) -> String {
    format!(
        "<html><body><div class=\"col-md-8\">{}</div></body></html>",
        blocks.join("\n")
    )
}

fn author_page(name: &str, born_date: &str, born_location: &str, bio: &str) -> String {
    format!(
        r#"<html><body><div class="author-details">
            <h3 class="author-title">{name}</h3>
            <p>Born: <span class="author-born-date">{born_date}</span>
            <span class="author-born-location">{born_location}</span></p>
            <div class="author-description">{bio}</div>
        </div></body></html>"#
    )
}

async fn mount_listing(server: &MockServer, page: u32, body: String) {
    Mock::given(method("GET"))
        .and(path(format!("/page/{page}/")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mount_author(server: &MockServer, href: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(href))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Config pointing at the mock server, writing into a fresh temp dir
fn test_config(server: &MockServer, dir: &tempfile::TempDir) -> (Config, PathBuf, PathBuf) {
    let quotes_path = dir.path().join("quotes.csv");
    let authors_path = dir.path().join("authors.csv");
    let config = Config::with_base_url(
        &server.uri(),
        Some(quotes_path.clone()),
        Some(authors_path.clone()),
    )
    .expect("mock server URI should be a valid base URL");
    (config, quotes_path, authors_path)
}

fn read_rows(path: &PathBuf) -> (csv::StringRecord, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_path(path).expect("output file should exist");
    let headers = reader.headers().unwrap().clone();
    let rows = reader.records().map(|r| r.unwrap()).collect();
    (headers, rows)
}

#[tokio::test]
async fn test_scrape_end_to_end() {
    let server = MockServer::start().await;

    // Page 1: two quotes by the same author; page 2: one quote by a new
    // author; page 3 is never mocked, so it 404s and ends the crawl.
    mount_listing(
        &server,
        1,
        listing_page(&[
            quote_block(
                "“The world as we have created it.”",
                "Albert Einstein",
                "/author/Albert-Einstein",
                &["change", "world"],
            ),
            quote_block(
                "“Imagination is more important than knowledge.”",
                "Albert Einstein",
                "/author/Albert-Einstein",
                &["inspirational"],
            ),
        ]),
    )
    .await;
    mount_listing(
        &server,
        2,
        listing_page(&[quote_block(
            "“The person, be it gentleman or lady...”",
            "Jane Austen",
            "/author/Jane-Austen",
            &["books"],
        )]),
    )
    .await;

    mount_author(
        &server,
        "/author/Albert-Einstein",
        author_page(
            "Albert Einstein",
            "March 14, 1879",
            "in Ulm, Germany",
            "Theoretical physicist.",
        ),
    )
    .await;
    mount_author(
        &server,
        "/author/Jane-Austen",
        author_page(
            "Jane Austen",
            "December 16, 1775",
            "in Steventon Rectory, Hampshire, The United Kingdom",
            "English novelist.",
        ),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let (config, quotes_path, authors_path) = test_config(&server, &dir);

    let report = scrape(&config).await.expect("scrape should succeed");
    assert_eq!(report.pages_visited, 2);
    assert_eq!(report.quotes_written, 3);
    assert_eq!(report.authors_written, 2);
    assert_eq!(report.authors_skipped, 0);

    // Quotes keep page order, then in-page order
    let (headers, rows) = read_rows(&quotes_path);
    assert_eq!(headers, csv::StringRecord::from(Quote::FIELDS.to_vec()));
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "“The world as we have created it.”");
    assert_eq!(&rows[0][2], "change, world");
    assert_eq!(&rows[1][0], "“Imagination is more important than knowledge.”");
    assert_eq!(&rows[2][1], "Jane Austen");

    // Authors are sorted by name, dates serialized as ISO
    let (_, author_rows) = read_rows(&authors_path);
    assert_eq!(author_rows.len(), 2);
    assert_eq!(&author_rows[0][0], "Albert Einstein");
    assert_eq!(&author_rows[0][2], "1879-03-14");
    assert_eq!(&author_rows[1][0], "Jane Austen");
    assert_eq!(&author_rows[1][2], "1775-12-16");
}

#[tokio::test]
async fn test_pagination_stops_at_empty_page() {
    let server = MockServer::start().await;

    mount_listing(
        &server,
        1,
        listing_page(&[quote_block(
            "“Only one page.”",
            "Jane Austen",
            "/author/Jane-Austen",
            &[],
        )]),
    )
    .await;

    // Page 2 serves a valid document with zero quote blocks: the empty
    // terminal, observably identical to an absent page.
    mount_listing(
        &server,
        2,
        "<html><body><p>No more quotes</p></body></html>".to_string(),
    )
    .await;

    // Page 3 must never be requested
    Mock::given(method("GET"))
        .and(path("/page/3/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    mount_author(
        &server,
        "/author/Jane-Austen",
        author_page("Jane Austen", "December 16, 1775", "in Steventon", "Novelist."),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let (config, quotes_path, _) = test_config(&server, &dir);

    let report = scrape(&config).await.unwrap();
    assert_eq!(report.pages_visited, 1);
    assert_eq!(report.quotes_written, 1);

    let (_, rows) = read_rows(&quotes_path);
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn test_author_refs_deduplicated_across_pages() {
    let server = MockServer::start().await;

    for page in 1..=2 {
        mount_listing(
            &server,
            page,
            listing_page(&[quote_block(
                "“Same author on every page.”",
                "Albert Einstein",
                "/author/Albert-Einstein",
                &[],
            )]),
        )
        .await;
    }

    // The detail page may be fetched exactly once, however many quotes cite it
    Mock::given(method("GET"))
        .and(path("/author/Albert-Einstein"))
        .respond_with(ResponseTemplate::new(200).set_body_string(author_page(
            "Albert Einstein",
            "March 14, 1879",
            "in Ulm, Germany",
            "Theoretical physicist.",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let (config, _, authors_path) = test_config(&server, &dir);

    let report = scrape(&config).await.unwrap();
    assert_eq!(report.quotes_written, 2);
    assert_eq!(report.authors_written, 1);

    let (_, rows) = read_rows(&authors_path);
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn test_absent_author_is_skipped() {
    let server = MockServer::start().await;

    mount_listing(
        &server,
        1,
        listing_page(&[
            quote_block("“Kept.”", "Jane Austen", "/author/Jane-Austen", &[]),
            quote_block("“Lost.”", "Gone Author", "/author/Gone-Author", &[]),
        ]),
    )
    .await;

    // Only one of the two author pages exists; the other 404s
    mount_author(
        &server,
        "/author/Jane-Austen",
        author_page("Jane Austen", "December 16, 1775", "in Steventon", "Novelist."),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let (config, _, authors_path) = test_config(&server, &dir);

    let report = scrape(&config).await.unwrap();
    assert_eq!(report.quotes_written, 2);
    assert_eq!(report.authors_written, 1);
    assert_eq!(report.authors_skipped, 1);

    let (_, rows) = read_rows(&authors_path);
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "Jane Austen");
}

#[tokio::test]
async fn test_malformed_author_date_skips_that_author() {
    let server = MockServer::start().await;

    mount_listing(
        &server,
        1,
        listing_page(&[
            quote_block("“Fine.”", "Jane Austen", "/author/Jane-Austen", &[]),
            quote_block("“Odd.”", "No Date", "/author/No-Date", &[]),
        ]),
    )
    .await;

    mount_author(
        &server,
        "/author/Jane-Austen",
        author_page("Jane Austen", "December 16, 1775", "in Steventon", "Novelist."),
    )
    .await;
    mount_author(
        &server,
        "/author/No-Date",
        author_page("No Date", "sometime in the past", "nowhere", "Mystery."),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let (config, _, authors_path) = test_config(&server, &dir);

    // One unparseable birth date loses that author, not the run
    let report = scrape(&config).await.unwrap();
    assert_eq!(report.quotes_written, 2);
    assert_eq!(report.authors_written, 1);
    assert_eq!(report.authors_skipped, 1);

    let (_, rows) = read_rows(&authors_path);
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "Jane Austen");
}

#[tokio::test]
async fn test_absent_first_page_yields_empty_tables() {
    let server = MockServer::start().await;
    // No listing pages mocked at all: page 1 404s immediately

    let dir = tempfile::tempdir().unwrap();
    let (config, quotes_path, authors_path) = test_config(&server, &dir);

    let report = scrape(&config).await.unwrap();
    assert_eq!(report.pages_visited, 0);
    assert_eq!(report.quotes_written, 0);
    assert_eq!(report.authors_written, 0);

    // Both files still exist, each with just its header row
    let (headers, rows) = read_rows(&quotes_path);
    assert_eq!(headers, csv::StringRecord::from(Quote::FIELDS.to_vec()));
    assert!(rows.is_empty());
    let (_, author_rows) = read_rows(&authors_path);
    assert!(author_rows.is_empty());
}

#[tokio::test]
async fn test_unwritable_output_path_fails_the_run() {
    let server = MockServer::start().await;

    mount_listing(
        &server,
        1,
        listing_page(&[quote_block(
            "“Doomed.”",
            "Jane Austen",
            "/author/Jane-Austen",
            &[],
        )]),
    )
    .await;
    mount_author(
        &server,
        "/author/Jane-Austen",
        author_page("Jane Austen", "December 16, 1775", "in Steventon", "Novelist."),
    )
    .await;

    let config = Config::with_base_url(
        &server.uri(),
        Some(PathBuf::from("/nonexistent-dir/quotes.csv")),
        Some(PathBuf::from("/nonexistent-dir/authors.csv")),
    )
    .unwrap();

    let result = scrape(&config).await;
    assert!(result.is_err());
}
