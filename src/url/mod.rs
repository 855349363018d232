//! URL construction for listing pages and author detail pages
//!
//! Listing pages live at `{base}/page/{n}/`; author pages are reached through
//! relative hrefs lifted straight out of the listing markup. Both are built by
//! joining against the configured base URL, never by string concatenation.

use crate::records::AuthorRef;
use crate::Result;
use url::Url;

/// Builds the URL of the nth listing page (1-based).
pub fn page_url(base: &Url, page: u32) -> Result<Url> {
    Ok(base.join(&format!("/page/{page}/"))?)
}

/// Resolves an author reference against the base URL.
///
/// The href comes from markup, so it may be relative (`/author/...`) or, on a
/// misbehaving source, absolute; `Url::join` handles both.
pub fn author_url(base: &Url, author_ref: &AuthorRef) -> Result<Url> {
    Ok(base.join(author_ref.href())?)
}
