//! iCalendar (`text/calendar`) rendering of a school schedule.
//!
//! Only what subscribers of the feed need is written: a fixed header and
//! one all-day `VEVENT` per school day. Times are civil; the timezone is
//! written as a label and never used for conversion.

use chrono::{
    NaiveDate,
    NaiveDateTime
};
use log::info;
use serde::{
    Deserialize,
    Serialize
};

use crate::calendarerror::CalendarError;
use crate::configuration::Configuration;
use crate::time::calendar::holidayset::HolidaySet;
use crate::time::schedule::schoolschedule::{
    DEFAULT_CYCLE_LENGTH,
    SchoolDay,
    SchoolSchedule
};
use crate::time::schoolyear::SchoolYear;

pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const DATE_VALUE_FORMAT: &str = "%Y%m%d";

fn default_calendar_name() -> String {
    "Manitoba School Days".to_owned()
}

fn default_timezone() -> String {
    "America/Winnipeg".to_owned()
}

fn default_product_id() -> String {
    "-//Tricksey Hobbits//NOSGML Hacksaw//EN".to_owned()
}

fn default_color() -> String {
    "#492BA1".to_owned()
}

fn default_cycle_length() -> u8 {
    DEFAULT_CYCLE_LENGTH
}

fn default_created() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2012, 10, 17)
        .and_then(|d| d.and_hms_opt(21, 50, 0))
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSettings {
    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_product_id")]
    pub product_id: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_cycle_length")]
    pub cycle_length: u8,
    /// Stamped as `CREATED` on every event.
    #[serde(default = "default_created")]
    pub created: NaiveDateTime
}

impl Default for FeedSettings {
    fn default() -> Self {
        FeedSettings {
            calendar_name: default_calendar_name(),
            timezone: default_timezone(),
            product_id: default_product_id(),
            color: default_color(),
            cycle_length: default_cycle_length(),
            created: default_created()
        }
    }
}

pub struct ICalendarFeed<'a> {
    settings: &'a FeedSettings
}

impl<'a> ICalendarFeed<'a> {
    pub fn new(settings: &'a FeedSettings) -> ICalendarFeed<'a> {
        ICalendarFeed { settings }
    }

    pub fn header(&self, school_year: &SchoolYear) -> String {
        format!(
            "BEGIN:VCALENDAR\n\
             PRODID:{}\n\
             X-WR-TIMEZONE:{}\n\
             X-WR-CALDESC:\n\
             VERSION:2.0\n\
             X-APPLE-CALENDAR-COLOR:{}\n\
             X-WR-CALNAME:{} ({})\n\
             METHOD:PUBLISH\n\
             CALSCALE:GREGORIAN\n\
             CLASS:PUBLIC\n\
             \n",
            self.settings.product_id,
            self.settings.timezone,
            self.settings.color,
            self.settings.calendar_name,
            school_year.label()
        )
    }

    pub fn event(&self, school_day: &SchoolDay, modified: NaiveDateTime) -> String {
        let date = school_day.date().format(DATE_VALUE_FORMAT);
        format!(
            "BEGIN:VEVENT\n\
             UID:{date}T1200Z\n\
             TRANSP:TRANSPARENT\n\
             CREATED:{}\n\
             DSTAMP:{}\n\
             SUMMARY:{}\n\
             DTSTART;VALUE=DATE:{date}\n\
             STATUS:CONFIRMED\n\
             END:VEVENT\n\
             \n",
            self.settings.created.format(TIMESTAMP_FORMAT),
            modified.format(TIMESTAMP_FORMAT),
            school_day.summary()
        )
    }

    /// `modified` is the time the underlying data last changed.
    pub fn render(&self, schedule: &SchoolSchedule, modified: NaiveDateTime) -> String {
        let mut calendar = self.header(&schedule.school_year());
        for school_day in schedule.school_days() {
            calendar.push_str(&self.event(school_day, modified));
        }
        calendar.push_str("END:VCALENDAR");
        calendar
    }
}

/// Builds the feed text for one school year from configuration.
///
/// Fails with [`CalendarError::MissingWinterBreakData`] when the year has no
/// winter break configured: the feed would otherwise list the break as
/// school days.
pub fn generate_feed(
    configuration: &Configuration,
    school_year: SchoolYear,
    modified: NaiveDateTime
) -> Result<String, CalendarError> {
    let winter_break = configuration.winter_break_table().require(&school_year)?;
    let holidays = HolidaySet::for_school_year(school_year, Some(winter_break))?;
    let settings = configuration.feed_settings();
    let schedule = SchoolSchedule::generate(school_year, &holidays, settings.cycle_length)?;
    info!("{}: {} school days, {} holidays", school_year, schedule.len(), holidays.skip_days().len());
    Ok(ICalendarFeed::new(settings).render(&schedule, modified))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::calendar::holidaycalendar::HolidayCalendar;

    struct NoHolidays;

    impl HolidayCalendar for NoHolidays {
        fn is_holiday(&self, _d: NaiveDate) -> bool {
            false
        }
    }

    fn modified() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2018, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap()
    }

    #[test]
    fn header_names_the_school_year() {
        let settings = FeedSettings::default();
        let header = ICalendarFeed::new(&settings).header(&SchoolYear::new(2017).unwrap());
        assert!(header.starts_with("BEGIN:VCALENDAR\nPRODID:-//Tricksey Hobbits//NOSGML Hacksaw//EN\n"));
        assert!(header.contains("X-WR-TIMEZONE:America/Winnipeg\n"));
        assert!(header.contains("X-WR-CALNAME:Manitoba School Days (2017-2018)\n"));
        assert!(header.ends_with("CLASS:PUBLIC\n\n"));
    }

    #[test]
    fn event_lines() {
        let settings = FeedSettings::default();
        let school_year = SchoolYear::new(2017).unwrap();
        let schedule = SchoolSchedule::generate(school_year, &NoHolidays, 6).unwrap();
        let event = ICalendarFeed::new(&settings).event(&schedule.school_days()[0], modified());
        assert_eq!(
            event,
            "BEGIN:VEVENT\n\
             UID:20170905T1200Z\n\
             TRANSP:TRANSPARENT\n\
             CREATED:20121017T215000Z\n\
             DSTAMP:20180102T030405Z\n\
             SUMMARY:School Day 1\n\
             DTSTART;VALUE=DATE:20170905\n\
             STATUS:CONFIRMED\n\
             END:VEVENT\n\
             \n"
        );
    }

    #[test]
    fn render_wraps_every_school_day() {
        let settings = FeedSettings::default();
        let schedule = SchoolSchedule::generate(SchoolYear::new(2017).unwrap(), &NoHolidays, 6).unwrap();
        let calendar = ICalendarFeed::new(&settings).render(&schedule, modified());
        assert_eq!(calendar.matches("BEGIN:VEVENT").count(), schedule.len());
        assert!(calendar.ends_with("END:VEVENT\n\nEND:VCALENDAR"));
    }

    #[test]
    fn settings_fill_in_defaults() {
        let settings: FeedSettings = serde_json::from_str(r#"{"calendar_name": "Test Division"}"#).unwrap();
        assert_eq!(settings.calendar_name, "Test Division");
        assert_eq!(settings.cycle_length, 6);
        assert_eq!(settings.created, default_created());
    }

    #[test]
    fn feed_requires_winter_break() {
        let configuration = Configuration::new();
        let err = generate_feed(&configuration, SchoolYear::new(2017).unwrap(), modified()).unwrap_err();
        assert!(matches!(err, CalendarError::MissingWinterBreakData(ref label) if label == "2017-2018"));
    }
}
