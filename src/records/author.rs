//! Author references and resolved author profiles

use crate::output::TableRecord;
use crate::{Result, ScrapeError};
use chrono::NaiveDate;

/// Date format used on author detail pages, e.g. "March 14, 1879"
const BORN_DATE_FORMAT: &str = "%B %d, %Y";

/// A relative link to an author detail page, exactly as it appears in the
/// listing markup (e.g. `/author/Albert-Einstein`)
///
/// Equality and hashing are structural, so collecting references into a set
/// deduplicates authors cited by multiple quotes across pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorRef(String);

impl AuthorRef {
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }

    /// The raw href this reference was extracted from
    pub fn href(&self) -> &str {
        &self.0
    }
}

/// An author profile resolved from a detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Author's display name
    pub name: String,

    /// Biography text from the detail page
    pub bio: String,

    /// Birth date, parsed from the page's human-readable form
    pub born_date: NaiveDate,

    /// Birth location as displayed (e.g. "in Ulm, Germany")
    pub born_location: String,
}

impl Author {
    /// Parses the human-readable birth date shown on a detail page.
    ///
    /// A date that does not match the expected format is an extraction fault
    /// for that author; the caller decides whether to skip or abort.
    pub fn parse_born_date(author: &str, value: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), BORN_DATE_FORMAT).map_err(|_| {
            ScrapeError::DateParse {
                author: author.to_string(),
                value: value.to_string(),
            }
        })
    }
}

impl TableRecord for Author {
    const FIELDS: &'static [&'static str] = &["name", "bio", "born_date", "born_location"];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.bio.clone(),
            self.born_date.format("%Y-%m-%d").to_string(),
            self.born_location.clone(),
        ]
    }
}
