use crate::calendarerror::CalendarError;
use crate::time::schoolholiday::holidayentry::HolidayEntry;
use crate::time::schoolyear::SchoolYear;

/// Which calendar year of the school year a rule is evaluated in.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SchoolYearPart {
    /// September through December: the first year.
    Fall,
    /// January through June: the second year.
    Spring
}

impl SchoolYearPart {
    pub fn year(&self, school_year: &SchoolYear) -> i32 {
        match self {
            SchoolYearPart::Fall => school_year.first_year(),
            SchoolYearPart::Spring => school_year.second_year()
        }
    }
}

/// A named rule placing one holiday (or break) inside a school year.
pub trait SchoolHoliday: Send + Sync {
    fn name(&self) -> &str;

    fn get_holiday(&self, school_year: &SchoolYear) -> Result<HolidayEntry, CalendarError>;

    fn not_found(&self, school_year: &SchoolYear) -> CalendarError {
        CalendarError::HolidayNotFound {
            name: self.name().to_owned(),
            school_year: school_year.label()
        }
    }
}
