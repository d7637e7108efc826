use chrono::{DateTime, Local};
use url::Url;

/// Extract just the filename of a URL, e.g. `index.html`.
///
/// For an absolute URL the basename is taken from its path component;
/// any other string is treated as a plain path. The result is everything
/// after the last `/`, so repeated separators collapse and the operation
/// is idempotent. A path ending in `/` yields an empty basename.
pub fn url_basename(s: &str) -> String {
    let path = match Url::parse(s) {
        Ok(url) => url.path().to_string(),
        // not an absolute URL, treat the whole string as a path
        Err(_) => s.to_string(),
    };
    path.rsplit('/').next().unwrap_or_default().to_string()
}

/// Build the archive file name for a run started at `now`,
/// e.g. `2020-05-12_125241.zip`. Second precision, lexicographically
/// sortable, not collision-free across runs within the same second.
pub fn archive_file_name(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d_%H%M%S.zip").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn basename_of_empty_is_empty() {
        assert_eq!(url_basename(""), "");
    }

    #[test]
    fn basename_of_bare_name_is_itself() {
        assert_eq!(url_basename("foo"), "foo");
    }

    #[test]
    fn basename_of_url_is_last_path_segment() {
        assert_eq!(url_basename("https://foo/bar/xy.rss2"), "xy.rss2");
    }

    #[test]
    fn repeated_separators_collapse() {
        assert_eq!(url_basename("https://foo/bar//xy.rss2"), "xy.rss2");
    }

    #[test]
    fn trailing_separator_yields_empty() {
        assert_eq!(url_basename("https://foo/bar/"), "");
    }

    #[test]
    fn basename_ignores_query_and_fragment() {
        assert_eq!(url_basename("https://foo/bar/a.html?x=1#top"), "a.html");
    }

    #[test]
    fn basename_is_idempotent() {
        for s in ["", "foo", "https://foo/bar/xy.rss2", "a/b/c.html", "x//y"] {
            let once = url_basename(s);
            assert_eq!(url_basename(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn archive_file_name_format() {
        let now = Local.with_ymd_and_hms(2020, 5, 12, 12, 52, 41).unwrap();
        assert_eq!(archive_file_name(now), "2020-05-12_125241.zip");
    }
}
