//! ZIP archive output.
//!
//! One archive per run, named from the local timestamp at run start
//! (e.g. `2020-05-12_125241.zip`). The raw feed document goes in as one
//! member, each extracted article fragment as another; member names are
//! derived from the URL path basename.
//!
//! ## Components
//!
//! - [`naming`]: URL basename extraction and the timestamped file name
//! - [`writer`]: the append-only [`ArchiveWriter`] over `zip::ZipWriter`

mod naming;
mod writer;

pub use naming::{archive_file_name, url_basename};
pub use writer::ArchiveWriter;
