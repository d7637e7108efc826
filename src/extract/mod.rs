//! Per-entry article fetching and content extraction.
//!
//! For each feed entry the pipeline fetches the linked page and keeps only
//! the main article fragment, located by a [`ContentLocator`].
//!
//! ## Architecture
//!
//! - [`locator`]: the locator seam and its fixed default (`<article>` tag
//!   match over a parsed HTML document)
//! - [`process_entry`]: one entry end to end — GET the page, run the
//!   locator, produce an optional [`ArticleFragment`]
//!
//! A missing fragment is a skip condition, not an error: transport
//! failures and locator misses are logged here and reported as `Ok(None)`
//! so the run continues with the next entry.

mod locator;

pub use locator::{ContentLocator, ElementLocator};

use tracing::{error, warn};

use crate::archive::url_basename;
use crate::error::{Error, Result};
use crate::feed::FeedEntry;
use crate::io::HttpClient;

/// The extracted main content of one linked page
#[derive(Debug, Clone)]
pub struct ArticleFragment {
    /// The feed entry the fragment was extracted for
    pub entry: FeedEntry,
    /// The serialized element, including its tag and descendants
    pub html: String,
}

/// Fetch one entry's page and extract its article fragment.
///
/// Transport failures and non-success responses are logged as warnings,
/// a locator miss as an error naming the entry's basename; both yield
/// `Ok(None)`. An `Err` from this function is unexpected and is handled
/// (logged, not propagated) at the pipeline's entry boundary.
pub async fn process_entry(
    client: &HttpClient,
    locator: &dyn ContentLocator,
    entry: &FeedEntry,
) -> Result<Option<ArticleFragment>> {
    let page = match client.get_text(&entry.link).await {
        Ok(page) => page,
        Err(
            e @ (Error::Network(_) | Error::Timeout { .. } | Error::InvalidResponse { .. }),
        ) => {
            warn!("no result for '{}': {}", entry.link, e);
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    match locator.locate(&page) {
        Some(html) => Ok(Some(ArticleFragment {
            entry: entry.clone(),
            html,
        })),
        None => {
            error!(
                "no article element for '{}', skipping",
                url_basename(&entry.link)
            );
            Ok(None)
        }
    }
}
