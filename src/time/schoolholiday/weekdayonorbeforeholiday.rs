use chrono::{
    NaiveDate,
    Weekday
};

use crate::calendarerror::CalendarError;
use crate::time::schoolholiday::holidayentry::HolidayEntry;
use crate::time::schoolholiday::schoolholiday::{
    SchoolHoliday,
    SchoolYearPart
};
use crate::time::schoolyear::SchoolYear;
use crate::time::weekdayrule::weekday_on_or_before;

/// The `weekday` falling on or before a fixed date. Victoria Day is the
/// Monday on or before May 25.
#[derive(Clone)]
pub struct WeekdayOnOrBeforeHoliday {
    name: String,
    part: SchoolYearPart,
    month: u32,
    day: u32,
    weekday: Weekday
}

impl WeekdayOnOrBeforeHoliday {
    pub fn new(name: &str, part: SchoolYearPart, month: u32, day: u32, weekday: Weekday) -> Option<WeekdayOnOrBeforeHoliday> {
        NaiveDate::from_ymd_opt(2001, month, day)?;
        Some(WeekdayOnOrBeforeHoliday { name: name.to_owned(), part, month, day, weekday })
    }
}

impl SchoolHoliday for WeekdayOnOrBeforeHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_holiday(&self, school_year: &SchoolYear) -> Result<HolidayEntry, CalendarError> {
        NaiveDate::from_ymd_opt(self.part.year(school_year), self.month, self.day)
            .map(|anchor| HolidayEntry::Single(weekday_on_or_before(anchor, self.weekday)))
            .ok_or_else(|| self.not_found(school_year))
    }
}
