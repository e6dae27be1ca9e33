use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use log::debug;
use serde::Deserialize;

use crate::calendarerror::CalendarError;
use crate::feed::icalendar::FeedSettings;
use crate::time::calendar::winterbreaktable::WinterBreakTable;
use crate::time::schoolyear::SchoolYear;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    winter_breaks: WinterBreakTable,
    #[serde(default)]
    feed: FeedSettings
}

/// Data the holiday rules cannot compute: the winter break of each school
/// year, plus how the feed is labelled.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    winter_break_table: WinterBreakTable,
    feed_settings: FeedSettings
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn with_winter_breaks(winter_break_table: WinterBreakTable) -> Configuration {
        Configuration { winter_break_table, feed_settings: FeedSettings::default() }
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, CalendarError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        debug!("loaded configuration {}", file_path.as_ref().display());
        Configuration::from_json_value(json_value)
    }

    /// Rejects unparseable school-year labels and reversed winter breaks.
    pub fn from_json_value(json_value: serde_json::Value) -> Result<Configuration, CalendarError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        json_prop.winter_breaks.validate()?;
        Ok(Configuration {
            winter_break_table: json_prop.winter_breaks,
            feed_settings: json_prop.feed
        })
    }

    pub fn winter_break_table(&self) -> &WinterBreakTable {
        &self.winter_break_table
    }

    pub fn winter_break(&self, school_year: &SchoolYear) -> Option<(NaiveDate, NaiveDate)> {
        self.winter_break_table.get(school_year)
    }

    pub fn feed_settings(&self) -> &FeedSettings {
        &self.feed_settings
    }
}
