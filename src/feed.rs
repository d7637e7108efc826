//! Feed parsing into a flat list of linked entries.
//!
//! Delegates format handling to `feed-rs`, which accepts both RSS and
//! Atom documents behind one parser call.

use feed_rs::parser;
use tracing::warn;

use crate::error::{Error, Result};

/// One entry of the source feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// Absolute URL of the linked page
    pub link: String,
    /// 0-based position in the feed document
    pub ordinal: usize,
}

/// Parse a raw feed document into its linked entries.
///
/// Entries keep document order; the ordinal is the position in the
/// document, so entries skipped for lacking a link still consume their
/// ordinal. Fails with [`Error::MalformedFeed`] when the document is not
/// a parseable feed or yields no usable entries.
pub fn parse_entries(text: &str) -> Result<Vec<FeedEntry>> {
    let feed = parser::parse(text.as_bytes())
        .map_err(|e| Error::MalformedFeed(e.to_string()))?;

    let mut entries = Vec::new();
    for (ordinal, entry) in feed.entries.iter().enumerate() {
        match entry.links.first() {
            Some(link) => entries.push(FeedEntry {
                link: link.href.clone(),
                ordinal,
            }),
            None => warn!(ordinal, id = %entry.id, "feed entry has no link, skipping"),
        }
    }

    if entries.is_empty() {
        return Err(Error::MalformedFeed("no feed entries".to_string()));
    }

    Ok(entries)
}
