//! The run driver: fetch feed, parse it, process entries, write the archive.
//!
//! Strictly sequential and single-threaded: the feed fetch completes
//! before parsing, and each entry is processed to completion before the
//! next begins. Any failure before the feed is parsed is fatal; per-entry
//! failures are logged and the run continues.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{error, info};
use url::Url;

use crate::archive::{archive_file_name, ArchiveWriter};
use crate::error::{Error, Result};
use crate::extract::{process_entry, ContentLocator};
use crate::feed;
use crate::io::HttpClient;

/// Run the main job and return the path of the written archive.
///
/// `limit` caps the number of entries fetched: iteration stops at the
/// first entry whose ordinal reaches the limit, so later entries are
/// never requested.
pub async fn run(
    feed_url: &str,
    output_dir: &Path,
    limit: Option<usize>,
    locator: &dyn ContentLocator,
) -> Result<PathBuf> {
    validate_feed_url(feed_url)?;
    if !output_dir.is_dir() {
        return Err(Error::NotADirectory(output_dir.to_path_buf()));
    }

    // The target name is fixed at run start; fail fast on a collision
    // before any network traffic.
    let zip_path = output_dir.join(archive_file_name(Local::now()));
    info!("output ZIP: {}", zip_path.display());
    if zip_path.exists() {
        return Err(Error::PathExists(zip_path));
    }

    let client = HttpClient::new()?;
    let raw_feed = client.get_text(feed_url).await?;
    let entries = feed::parse_entries(&raw_feed)?;

    let mut archive = ArchiveWriter::create(&zip_path)?;
    archive.write_feed_document(feed_url, &raw_feed)?;

    let total = entries.len();
    for entry in &entries {
        if let Some(limit) = limit {
            if entry.ordinal >= limit {
                info!("entry limit {limit} reached, stopping");
                break;
            }
        }
        info!("processing {}/{}: {}", entry.ordinal + 1, total, entry.link);
        match process_entry(&client, locator, entry).await {
            Ok(Some(fragment)) => {
                // archive write failures are part of the per-entry boundary
                if let Err(e) = archive.write_fragment(&fragment) {
                    error!("failed to write fragment for '{}': {}", entry.link, e);
                }
            }
            Ok(None) => {} // already logged at the entry boundary
            Err(e) => error!("processing '{}' failed: {:?}", entry.link, e),
        }
    }

    archive.finish()
}

/// Check that the feed URL is an absolute http(s) URL
fn validate_feed_url(feed_url: &str) -> Result<()> {
    let url = Url::parse(feed_url)
        .map_err(|e| Error::InvalidInput(format!("invalid URL '{feed_url}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(Error::InvalidInput(format!(
            "unsupported URL scheme '{scheme}' in '{feed_url}'"
        ))),
    }
}
