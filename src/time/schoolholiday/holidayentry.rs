use std::fmt;

use chrono::NaiveDate;

use crate::time::rangeofdates::RangeOfDates;

/// A holiday is either one day or an inclusive run of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayEntry {
    Single(NaiveDate),
    Range(RangeOfDates)
}

impl HolidayEntry {
    pub fn first_date(&self) -> NaiveDate {
        match self {
            HolidayEntry::Single(d) => *d,
            HolidayEntry::Range(range) => range.start_date()
        }
    }

    pub fn last_date(&self) -> NaiveDate {
        match self {
            HolidayEntry::Single(d) => *d,
            HolidayEntry::Range(range) => range.end_date()
        }
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        match self {
            HolidayEntry::Single(holiday) => *holiday == d,
            HolidayEntry::Range(range) => range.contain(d)
        }
    }

    /// Every day the entry covers, in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        match self {
            HolidayEntry::Single(d) => vec![*d],
            HolidayEntry::Range(range) => range.to_vec()
        }
    }
}

impl fmt::Display for HolidayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolidayEntry::Single(d) => write!(f, "{}", d),
            HolidayEntry::Range(range) => write!(f, "({}) to ({})", range.start_date(), range.end_date())
        }
    }
}

/// A holiday entry together with the name it is listed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedHoliday {
    name: String,
    entry: HolidayEntry
}

impl NamedHoliday {
    pub fn new(name: impl Into<String>, entry: HolidayEntry) -> NamedHoliday {
        NamedHoliday { name: name.into(), entry }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entry(&self) -> &HolidayEntry {
        &self.entry
    }
}

impl fmt::Display for NamedHoliday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.name, self.entry)
    }
}
