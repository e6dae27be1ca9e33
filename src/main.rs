mod cli;
mod logging;

use std::process;

use chrono::Local;
use clap::Parser;
use log::info;

use schooldays::calendarerror::CalendarError;
use schooldays::configuration::Configuration;
use schooldays::feed::feedcache::{
    FeedCache,
    modified_time,
    to_naive_utc
};
use schooldays::feed::icalendar::generate_feed;
use schooldays::time::calendar::holidayset::HolidaySet;
use schooldays::time::schoolyear::SchoolYear;
use schooldays::time::utility::parse_civil_date;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error creating calendar: {}", e);
            process::exit(1);
        }
    }
}

fn select_school_year(cli: &Cli) -> Result<SchoolYear, CalendarError> {
    match (&cli.year, &cli.today) {
        (Some(label), _) => SchoolYear::parse(label),
        (None, Some(today)) => SchoolYear::from_reference_date(parse_civil_date(today)?),
        (None, None) => SchoolYear::from_reference_date(Local::now().date_naive())
    }
}

fn run(cli: &Cli) -> Result<String, CalendarError> {
    let school_year = select_school_year(cli)?;
    let configuration = Configuration::from_reader(&cli.config)?;
    info!("school year {}", school_year);

    if cli.list_holidays {
        let holidays = HolidaySet::for_school_year(school_year, configuration.winter_break(&school_year))?;
        return Ok(if cli.html { holidays.to_html() } else { holidays.to_string() });
    }

    // The configuration carries the winter breaks, so a newer file
    // invalidates every cached feed.
    let source_modified = modified_time(&cli.config)?;
    let cache = FeedCache::new(&cli.cache_dir);
    cache.load_or_generate(&school_year, source_modified, || {
        generate_feed(&configuration, school_year, to_naive_utc(source_modified))
    })
}
