//! HTML parsers for listing pages and author detail pages
//!
//! This module handles parsing HTML content to extract:
//! - Quote records from the repeated `div.quote` blocks of a listing page
//! - Author-reference hrefs from the anchor next to each quote's author name
//! - A single author profile from a detail page
//!
//! All functions here are pure and synchronous: they take HTML text or a
//! parsed document and never touch the network. Parsed documents are scoped
//! to one call so they are never held across an await point.

use crate::records::{Author, AuthorRef, Quote};
use crate::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

/// Extracted information from one listing page
#[derive(Debug, Clone)]
pub struct ListingPage {
    /// Quotes in document order
    pub quotes: Vec<Quote>,

    /// Author detail links found on this page, already deduplicated
    pub author_refs: HashSet<AuthorRef>,
}

/// Parses one listing page into quotes and author references
///
/// A page with zero quote blocks parses successfully into an empty listing;
/// that empty result is the pagination terminal signal, not an error.
pub fn parse_listing(html: &str) -> Result<ListingPage> {
    let document = Html::parse_document(html);

    Ok(ListingPage {
        quotes: extract_quotes(&document)?,
        author_refs: extract_author_refs(&document)?,
    })
}

/// Extracts all quotes from a parsed listing page, in document order
///
/// Each `div.quote` block must contain a text span and an author name; a
/// block missing either means the structural pattern no longer matches the
/// site, which fails the extraction rather than silently dropping records.
/// Tags are optional and collected in document order.
pub fn extract_quotes(document: &Html) -> Result<Vec<Quote>> {
    let quote_selector = selector("div.quote")?;
    let text_selector = selector("span.text")?;
    let author_selector = selector("small.author")?;
    let tag_selector = selector("a.tag")?;

    let mut quotes = Vec::new();
    for block in document.select(&quote_selector) {
        let text =
            first_text(block, &text_selector).ok_or_else(|| missing("quote block", "span.text"))?;
        let author = first_text(block, &author_selector)
            .ok_or_else(|| missing("quote block", "small.author"))?;
        let tags = block
            .select(&tag_selector)
            .map(element_text)
            .collect::<Vec<_>>();

        quotes.push(Quote { text, author, tags });
    }

    Ok(quotes)
}

/// Extracts the author detail links referenced by a listing page
///
/// Each quote block carries one `(about)` anchor next to its author span; the
/// href is taken verbatim as an opaque reference token. Returning a set makes
/// insertion idempotent, so an author cited by several quotes on the same
/// page yields a single reference.
pub fn extract_author_refs(document: &Html) -> Result<HashSet<AuthorRef>> {
    let quote_selector = selector("div.quote")?;
    let link_selector = selector("span a[href]")?;

    let mut refs = HashSet::new();
    for block in document.select(&quote_selector) {
        if let Some(anchor) = block.select(&link_selector).next() {
            if let Some(href) = anchor.value().attr("href") {
                refs.insert(AuthorRef::new(href));
            }
        }
    }

    Ok(refs)
}

/// Parses an author detail page into a profile
///
/// The page carries exactly one structural block with the author's name,
/// birth date, birth location, and biography. Every element is required, and
/// the birth date must parse; either failure is an extraction fault for this
/// author.
pub fn parse_author(html: &str) -> Result<Author> {
    let document = Html::parse_document(html);

    let name = first_text_in(&document, &selector("h3.author-title")?)
        .ok_or_else(|| missing("author page", "h3.author-title"))?;
    let born_raw = first_text_in(&document, &selector("span.author-born-date")?)
        .ok_or_else(|| missing("author page", "span.author-born-date"))?;
    let born_location = first_text_in(&document, &selector("span.author-born-location")?)
        .ok_or_else(|| missing("author page", "span.author-born-location"))?;
    let bio = first_text_in(&document, &selector("div.author-description")?)
        .ok_or_else(|| missing("author page", "div.author-description"))?;

    let born_date = Author::parse_born_date(&name, &born_raw)?;

    Ok(Author {
        name,
        bio,
        born_date,
        born_location,
    })
}

/// Compiles a CSS selector, surfacing an invalid pattern as an error
fn selector(pattern: &str) -> Result<Selector> {
    Selector::parse(pattern).map_err(|_| ScrapeError::Selector(pattern.to_string()))
}

fn missing(context: &str, sel: &'static str) -> ScrapeError {
    ScrapeError::MissingElement {
        context: context.to_string(),
        selector: sel,
    }
}

/// Collects and trims the text content of an element
fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of the first descendant matching `sel`, if any
fn first_text(scope: ElementRef, sel: &Selector) -> Option<String> {
    scope.select(sel).next().map(element_text)
}

/// Text of the first element in the document matching `sel`, if any
fn first_text_in(document: &Html, sel: &Selector) -> Option<String> {
    document.select(sel).next().map(element_text)
}
