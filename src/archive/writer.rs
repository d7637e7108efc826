use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::naming::url_basename;
use crate::error::{Error, Result};
use crate::extract::ArticleFragment;

/// Append-only writer for the run's output archive
///
/// Members are deflate-compressed. Duplicate member names within one run
/// are allowed; on extraction the last-written entry wins.
pub struct ArchiveWriter {
    writer: ZipWriter<File>,
    path: PathBuf,
}

impl std::fmt::Debug for ArchiveWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveWriter")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl ArchiveWriter {
    /// Create the archive at `path`.
    ///
    /// The target must not exist; creation uses `create_new`, so the
    /// existence check is race-free. Fails with [`Error::PathExists`]
    /// when the file is already there.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::options()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => Error::PathExists(path.to_path_buf()),
                _ => Error::Io(e),
            })?;
        Ok(Self {
            writer: ZipWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Path of the archive being written
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add the raw feed document as member `<basename-of-feed-url>.xml`
    pub fn write_feed_document(&mut self, feed_url: &str, text: &str) -> Result<()> {
        let name = format!("{}.xml", url_basename(feed_url));
        self.write_member(&name, text.as_bytes())
    }

    /// Add an article fragment as member `<basename-of-entry-link>.html`
    pub fn write_fragment(&mut self, fragment: &ArticleFragment) -> Result<()> {
        let name = format!("{}.html", url_basename(&fragment.entry.link));
        self.write_member(&name, fragment.html.as_bytes())
    }

    fn write_member(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        self.writer.start_file(name, options)?;
        self.writer.write_all(bytes)?;
        Ok(())
    }

    /// Finalize the container and return its path.
    ///
    /// Must be called exactly once at the end of a successful run. On an
    /// early error exit the `ZipWriter` is released by drop instead and
    /// the file on disk must be treated as invalid.
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.finish()?;
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedEntry;
    use std::io::Read;

    fn fragment(link: &str, ordinal: usize, html: &str) -> ArticleFragment {
        ArticleFragment {
            entry: FeedEntry {
                link: link.to_string(),
                ordinal,
            },
            html: html.to_string(),
        }
    }

    fn read_member(path: &Path, name: &str) -> String {
        let file = File::open(path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut member = archive.by_name(name).unwrap();
        let mut content = String::new();
        member.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn writes_feed_and_fragment_members() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.zip");

        let mut writer = ArchiveWriter::create(&target).unwrap();
        writer
            .write_feed_document("https://example.com/news/feed.rss", "<rss/>")
            .unwrap();
        writer
            .write_fragment(&fragment(
                "https://example.com/posts/story.html",
                0,
                "<article>hi</article>",
            ))
            .unwrap();
        let path = writer.finish().unwrap();

        assert_eq!(path, target);
        assert_eq!(read_member(&target, "feed.rss.xml"), "<rss/>");
        assert_eq!(
            read_member(&target, "story.html.html"),
            "<article>hi</article>"
        );

        let file = File::open(&target).unwrap();
        let archive = zip::ZipArchive::new(file).unwrap();
        assert_eq!(archive.len(), 2);
    }

    #[test]
    fn duplicate_member_names_do_not_fail() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.zip");

        let mut writer = ArchiveWriter::create(&target).unwrap();
        writer
            .write_fragment(&fragment("https://a/post/x.html", 0, "<article>1</article>"))
            .unwrap();
        writer
            .write_fragment(&fragment("https://b/other/x.html", 1, "<article>2</article>"))
            .unwrap();
        let path = writer.finish().unwrap();

        // last write wins on lookup by name
        assert_eq!(read_member(&path, "x.html.html"), "<article>2</article>");
    }

    #[test]
    fn existing_target_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("taken.zip");
        std::fs::write(&target, b"precious").unwrap();

        let err = ArchiveWriter::create(&target).unwrap_err();
        assert!(matches!(err, Error::PathExists(_)));
        assert_eq!(std::fs::read(&target).unwrap(), b"precious");
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let err = ArchiveWriter::create(Path::new("/no/such/dir/out.zip")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
