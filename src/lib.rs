//! # feedzip
//!
//! Download a feed (RSS/Atom) and all linked articles into a ZIP archive.
//!
//! This library fetches a syndication feed, follows each entry's link,
//! extracts the first `<article>` element from the linked page and stores
//! the raw feed document plus every extracted fragment into a single
//! timestamp-named ZIP file. It is built for a one-shot batch run: the
//! pipeline is strictly sequential, failures on individual entries are
//! logged and skipped, and nothing is persisted across invocations.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use feedzip::{pipeline, ElementLocator};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let locator = ElementLocator::article()?;
//!     let archive = pipeline::run(
//!         "https://example.com/feed.rss",
//!         Path::new("/var/archive"),
//!         None,
//!         &locator,
//!     )
//!     .await?;
//!     println!("wrote {}", archive.display());
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod cli;
pub mod error;
pub mod extract;
pub mod feed;
pub mod io;
pub mod logging;
pub mod pipeline;

pub use archive::ArchiveWriter;
pub use cli::Cli;
pub use error::{Error, Result};
pub use extract::{ArticleFragment, ContentLocator, ElementLocator};
pub use feed::FeedEntry;
pub use io::HttpClient;
