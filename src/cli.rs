use clap::Parser;
use std::path::PathBuf;

/// Export a browser's bookmarks to the Netscape bookmark file format
#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Show the program version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Bookmark JSON file to export (defaults to the first detected
    /// browser profile)
    #[arg(name = "SOURCE")]
    pub source: Option<PathBuf>,

    /// Prompt for the bookmark file path instead of using SOURCE or the
    /// detected default
    #[arg(short = 'p', long)]
    pub pick_source: bool,

    /// Output HTML file (defaults to a timestamped file on the desktop)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Prompt for the output file path instead of using --output or the
    /// timestamped default
    #[arg(short = 'P', long)]
    pub pick_output: bool,

    /// Preferred browser when detecting the default source
    /// (chrome, chromium, edge)
    #[arg(long)]
    pub browser: Option<String>,

    /// List detected browser profiles and exit
    #[arg(long)]
    pub list_profiles: bool,

    /// Open the exported file when done
    #[arg(long)]
    pub open: bool,

    /// Optional custom configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}
