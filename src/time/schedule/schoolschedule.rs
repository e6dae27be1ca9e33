use chrono::{
    Days,
    NaiveDate
};

use crate::calendarerror::CalendarError;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::schoolyear::SchoolYear;

/// Manitoba schools rotate through a six-day timetable.
pub const DEFAULT_CYCLE_LENGTH: u8 = 6;

const ONE_DAY: Days = Days::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchoolDay {
    date: NaiveDate,
    cycle_day: u8
}

impl SchoolDay {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Position in the timetable rotation, starting at 1.
    pub fn cycle_day(&self) -> u8 {
        self.cycle_day
    }

    pub fn summary(&self) -> String {
        format!("School Day {}", self.cycle_day)
    }
}

/// Every school day of one school year, first day of classes to last.
pub struct SchoolSchedule {
    school_year: SchoolYear,
    school_days: Vec<SchoolDay>
}

impl SchoolSchedule {
    /// Walks from the first to the last day of classes, keeping weekdays
    /// that are not holidays. Only kept days advance the cycle.
    pub fn generate(
        school_year: SchoolYear,
        calendar: &dyn HolidayCalendar,
        cycle_length: u8
    ) -> Result<SchoolSchedule, CalendarError> {
        if cycle_length == 0 {
            return Err(CalendarError::invalid_date(cycle_length, "cycle length must be at least 1"));
        }

        let last_day = school_year.last_school_day();
        let mut school_days = Vec::with_capacity(200);
        let mut cycle_day = 1;
        let mut d = school_year.first_school_day();
        while d <= last_day {
            if calendar.is_school_day(d) {
                school_days.push(SchoolDay { date: d, cycle_day });
                cycle_day = if cycle_day == cycle_length { 1 } else { cycle_day + 1 };
            }
            d = d + ONE_DAY;
        }

        Ok(SchoolSchedule { school_year, school_days })
    }

    pub fn school_year(&self) -> SchoolYear {
        self.school_year
    }

    pub fn school_days(&self) -> &[SchoolDay] {
        &self.school_days
    }

    pub fn len(&self) -> usize {
        self.school_days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.school_days.is_empty()
    }

    pub fn find(&self, d: NaiveDate) -> Option<&SchoolDay> {
        self.school_days
            .binary_search_by_key(&d, |school_day| school_day.date)
            .ok()
            .map(|index| &self.school_days[index])
    }
}
