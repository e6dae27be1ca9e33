use chrono::Weekday;

use crate::calendarerror::CalendarError;
use crate::time::easter::easter_sunday;
use crate::time::schoolholiday::holidayentry::HolidayEntry;
use crate::time::schoolholiday::schoolholiday::SchoolHoliday;
use crate::time::schoolyear::SchoolYear;
use crate::time::weekdayrule::previous_weekday;

/// The last `weekday` before Easter Sunday of the spring year.
/// Good Friday is `EasterRelatedHoliday::new("Good Friday", Weekday::Fri)`.
#[derive(Clone)]
pub struct EasterRelatedHoliday {
    name: String,
    weekday: Weekday
}

impl EasterRelatedHoliday {
    pub fn new(name: &str, weekday: Weekday) -> EasterRelatedHoliday {
        EasterRelatedHoliday { name: name.to_owned(), weekday }
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl SchoolHoliday for EasterRelatedHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_holiday(&self, school_year: &SchoolYear) -> Result<HolidayEntry, CalendarError> {
        easter_sunday(school_year.second_year())
            .map(|easter| HolidayEntry::Single(previous_weekday(easter, self.weekday)))
            .ok_or_else(|| self.not_found(school_year))
    }
}
