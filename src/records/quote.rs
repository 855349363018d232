//! Quote records extracted from listing pages

use crate::output::TableRecord;

/// A single quote from a listing page
///
/// Quotes have no identity key: every extracted block becomes one record, and
/// output order follows extraction order (page order, then in-page order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// The quoted text as displayed, including any surrounding quotation marks
    pub text: String,

    /// Display name of the quote's author
    pub author: String,

    /// Tags attached to the quote, in document order
    pub tags: Vec<String>,
}

impl TableRecord for Quote {
    const FIELDS: &'static [&'static str] = &["text", "author", "tags"];

    fn to_row(&self) -> Vec<String> {
        vec![self.text.clone(), self.author.clone(), self.tags.join(", ")]
    }
}
