use chrono::Weekday;

use crate::calendarerror::CalendarError;
use crate::time::schoolholiday::holidayentry::HolidayEntry;
use crate::time::schoolholiday::schoolholiday::{
    SchoolHoliday,
    SchoolYearPart
};
use crate::time::schoolyear::SchoolYear;
use crate::time::weekdayrule::nth_weekday_of_month;

/// "The n-th weekday of a month", e.g. the second Monday of October.
#[derive(Clone)]
pub struct NthWeekdayHoliday {
    name: String,
    part: SchoolYearPart,
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub fn new(name: &str, part: SchoolYearPart, month: u32, n: u8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            None
        } else {
            Some(NthWeekdayHoliday { name: name.to_owned(), part, month, n, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl SchoolHoliday for NthWeekdayHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    /// A fifth occurrence that the month does not have is an error, never
    /// a silent roll into the next month.
    fn get_holiday(&self, school_year: &SchoolYear) -> Result<HolidayEntry, CalendarError> {
        nth_weekday_of_month(self.part.year(school_year), self.month, self.n, self.weekday)
            .map(HolidayEntry::Single)
            .ok_or_else(|| self.not_found(school_year))
    }
}
