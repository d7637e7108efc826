use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "feedzip")]
#[command(version)]
#[command(about = "Download a feed (RSS/Atom) and all linked articles into a ZIP archive", long_about = None)]
#[command(after_help = "Examples:\n  \
  feedzip https://example.com/feed.rss /var/archive      archive the whole feed\n  \
  feedzip -n 5 https://example.com/feed.rss out/         only the first 5 entries\n  \
  feedzip --logfile run.log https://example.com/atom.xml out/")]
pub struct Cli {
    /// Feed URL (RSS or Atom)
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output directory for the generated ZIP archive
    #[arg(value_name = "OUTPUT_FOLDER")]
    pub output_folder: PathBuf,

    /// Limit linked feed entries to the first N articles
    #[arg(short = 'n', long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Append log output to FILE instead of stdout
    #[arg(long = "logfile", value_name = "FILE")]
    pub logfile: Option<PathBuf>,

    /// No colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
