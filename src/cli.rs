use std::path::PathBuf;

use clap::Parser;

/// Manitoba school-day calendar feed.
#[derive(Parser)]
#[command(
    name = "schooldays",
    version,
    about = "Publishes the school days of a Manitoba school year as an iCalendar feed"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// School year as YYYY-YYYY; defaults to the school year of --today.
    #[arg(short, long)]
    pub year: Option<String>,

    /// Reference date (YYYY-MM-DD) used when --year is not given.
    #[arg(short, long)]
    pub today: Option<String>,

    /// Path to the JSON configuration holding the winter breaks.
    #[arg(short, long, default_value = "json/config.json")]
    pub config: PathBuf,

    /// Directory where rendered feeds are cached.
    #[arg(long, default_value = "tmp")]
    pub cache_dir: PathBuf,

    /// Print the holidays of the school year instead of the feed.
    #[arg(long)]
    pub list_holidays: bool,

    /// With --list-holidays, print as HTML paragraphs.
    #[arg(long, requires = "list_holidays")]
    pub html: bool,
}
