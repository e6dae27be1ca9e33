use chrono::NaiveDate;

use crate::calendarerror::CalendarError;
use crate::time::schoolholiday::holidayentry::HolidayEntry;
use crate::time::schoolholiday::schoolholiday::{
    SchoolHoliday,
    SchoolYearPart
};
use crate::time::schoolyear::SchoolYear;

#[derive(Clone)]
pub struct FixedDateHoliday {
    name: String,
    part: SchoolYearPart,
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    pub fn new(name: &str, part: SchoolYearPart, month: u32, day: u32) -> Option<FixedDateHoliday> {
        // Feb 29 would vanish in three years out of four.
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(2001, month, day).is_none() {
            None
        } else {
            Some(FixedDateHoliday { name: name.to_owned(), part, month, day })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl SchoolHoliday for FixedDateHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_holiday(&self, school_year: &SchoolYear) -> Result<HolidayEntry, CalendarError> {
        NaiveDate::from_ymd_opt(self.part.year(school_year), self.month, self.day)
            .map(HolidayEntry::Single)
            .ok_or_else(|| self.not_found(school_year))
    }
}
