use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use crate::calendarerror::CalendarError;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::schoolholiday::holidayentry::HolidayEntry;
use crate::time::schoolholiday::schoolholiday::SchoolHoliday;
use crate::time::schoolyear::SchoolYear;
use crate::time::weekdayrule::{
    next_weekday,
    previous_weekday
};

/// Monday-to-Friday break anchored on a date of the spring year
/// (March 31 for Manitoba).
///
/// - anchor is a Monday: the break is that week.
/// - otherwise: the break starts the Monday before the anchor and ends on
///   the Friday after that Monday.
///
/// The second branch can land on a week that is not "the last week of
/// March" when the anchor falls late in the week; the branch rule is kept
/// as stated.
#[derive(Clone)]
pub struct SpringBreakHoliday {
    name: String,
    month: u32,
    day: u32
}

impl SpringBreakHoliday {
    pub fn new(name: &str, month: u32, day: u32) -> Option<SpringBreakHoliday> {
        NaiveDate::from_ymd_opt(2001, month, day)?;
        Some(SpringBreakHoliday { name: name.to_owned(), month, day })
    }

    /// `[Monday, Friday]` for the given anchor date.
    pub fn break_for_anchor(anchor: NaiveDate) -> Result<RangeOfDates, CalendarError> {
        let monday = if anchor.weekday() == Weekday::Mon {
            anchor
        } else {
            previous_weekday(anchor, Weekday::Mon)
        };
        RangeOfDates::new(monday, next_weekday(monday, Weekday::Fri))
    }
}

impl SchoolHoliday for SpringBreakHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_holiday(&self, school_year: &SchoolYear) -> Result<HolidayEntry, CalendarError> {
        let anchor = NaiveDate::from_ymd_opt(school_year.second_year(), self.month, self.day)
            .ok_or_else(|| self.not_found(school_year))?;
        SpringBreakHoliday::break_for_anchor(anchor).map(HolidayEntry::Range)
    }
}
