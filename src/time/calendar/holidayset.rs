use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use chrono::{
    NaiveDate,
    Weekday
};
use log::debug;

use crate::calendarerror::CalendarError;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::schoolholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::schoolholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::schoolholiday::holidayentry::{
    HolidayEntry,
    NamedHoliday
};
use crate::time::schoolholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::schoolholiday::schoolholiday::{
    SchoolHoliday,
    SchoolYearPart
};
use crate::time::schoolholiday::springbreakholiday::SpringBreakHoliday;
use crate::time::schoolholiday::weekdayonorbeforeholiday::WeekdayOnOrBeforeHoliday;
use crate::time::schoolyear::SchoolYear;

pub const THANKSGIVING: &str = "Thanksgiving";
pub const REMEMBRANCE_DAY: &str = "Remembrance Day";
pub const LOUIS_RIEL_DAY: &str = "Louis Riel Day";
pub const GOOD_FRIDAY: &str = "Good Friday";
pub const VICTORIA_DAY: &str = "Victoria Day";
pub const SPRING_BREAK: &str = "Spring Break";
pub const WINTER_BREAK: &str = "Winter Break";

/// The six computed Manitoba school holidays, in listing order.
pub fn standard_holidays() -> Vec<Arc<dyn SchoolHoliday>> {
    let rules: [Option<Arc<dyn SchoolHoliday>>; 6] = [
        NthWeekdayHoliday::new(THANKSGIVING, SchoolYearPart::Fall, 10, 2, Weekday::Mon)
            .map(|h| Arc::new(h) as Arc<dyn SchoolHoliday>),
        FixedDateHoliday::new(REMEMBRANCE_DAY, SchoolYearPart::Fall, 11, 11)
            .map(|h| Arc::new(h) as Arc<dyn SchoolHoliday>),
        NthWeekdayHoliday::new(LOUIS_RIEL_DAY, SchoolYearPart::Spring, 2, 3, Weekday::Mon)
            .map(|h| Arc::new(h) as Arc<dyn SchoolHoliday>),
        Some(Arc::new(EasterRelatedHoliday::new(GOOD_FRIDAY, Weekday::Fri)) as Arc<dyn SchoolHoliday>),
        WeekdayOnOrBeforeHoliday::new(VICTORIA_DAY, SchoolYearPart::Spring, 5, 25, Weekday::Mon)
            .map(|h| Arc::new(h) as Arc<dyn SchoolHoliday>),
        SpringBreakHoliday::new(SPRING_BREAK, 3, 31)
            .map(|h| Arc::new(h) as Arc<dyn SchoolHoliday>),
    ];
    rules.into_iter().flatten().collect()
}

/// All days without classes in one school year.
///
/// Built once, immutable afterwards. Holds the named entries in listing
/// order and the flattened, de-duplicated set of every day they cover.
/// Weekends are not part of the set; see [`HolidayCalendar::is_school_day`].
#[derive(Debug, Clone)]
pub struct HolidaySet {
    school_year: SchoolYear,
    holidays: Vec<NamedHoliday>,
    skip_days: BTreeSet<NaiveDate>
}

impl HolidaySet {
    /// Builds the set for the school year `reference_date` falls in.
    ///
    /// `winter_break` is used verbatim as the "Winter Break" entry; without
    /// it the entry is simply absent. A reversed range is rejected with
    /// [`CalendarError::MalformedRange`] and nothing is built.
    pub fn build(reference_date: NaiveDate, winter_break: Option<(NaiveDate, NaiveDate)>) -> Result<HolidaySet, CalendarError> {
        let school_year = SchoolYear::from_reference_date(reference_date)?;
        HolidaySet::for_school_year(school_year, winter_break)
    }

    pub fn for_school_year(school_year: SchoolYear, winter_break: Option<(NaiveDate, NaiveDate)>) -> Result<HolidaySet, CalendarError> {
        HolidaySet::from_rules(school_year, &standard_holidays(), winter_break)
    }

    fn from_rules(
        school_year: SchoolYear,
        rules: &[Arc<dyn SchoolHoliday>],
        winter_break: Option<(NaiveDate, NaiveDate)>
    ) -> Result<HolidaySet, CalendarError> {
        let winter_break = winter_break
            .map(|(start, end)| RangeOfDates::new(start, end))
            .transpose()?;

        let mut holidays = Vec::with_capacity(rules.len() + 1);
        for rule in rules.iter() {
            let entry = rule.get_holiday(&school_year)?;
            debug!("{}: {} => {}", school_year, rule.name(), entry);
            holidays.push(NamedHoliday::new(rule.name(), entry));
        }

        match winter_break {
            Some(range) => {
                let entry = HolidayEntry::Range(range);
                debug!("{}: {} => {}", school_year, WINTER_BREAK, entry);
                holidays.push(NamedHoliday::new(WINTER_BREAK, entry));
            },
            None => debug!("{}: no winter break supplied", school_year)
        }

        let skip_days: BTreeSet<NaiveDate> = holidays.iter()
            .flat_map(|holiday| holiday.entry().dates())
            .collect();
        debug!("{}: {} skip days", school_year, skip_days.len());

        Ok(HolidaySet { school_year, holidays, skip_days })
    }

    pub fn school_year(&self) -> SchoolYear {
        self.school_year
    }

    /// True when `d` is covered by any entry. Any date is accepted; dates
    /// outside the school year are never holidays.
    #[inline]
    pub fn is_holiday(&self, d: NaiveDate) -> bool {
        self.skip_days.contains(&d)
    }

    pub fn entries(&self) -> &[NamedHoliday] {
        &self.holidays
    }

    pub fn entry(&self, name: &str) -> Option<&HolidayEntry> {
        self.holidays.iter()
            .find(|holiday| holiday.name() == name)
            .map(|holiday| holiday.entry())
    }

    pub fn has_winter_break(&self) -> bool {
        self.entry(WINTER_BREAK).is_some()
    }

    pub fn skip_days(&self) -> &BTreeSet<NaiveDate> {
        &self.skip_days
    }

    pub fn to_vec(&self) -> Vec<NaiveDate> {
        self.skip_days.iter().copied().collect()
    }

    /// The holiday listing with each line wrapped in a paragraph.
    pub fn to_html(&self) -> String {
        self.holidays.iter()
            .map(|holiday| format!("<p>{}</p>\n", holiday))
            .collect()
    }
}

impl HolidayCalendar for HolidaySet {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        HolidaySet::is_holiday(self, d)
    }
}

impl fmt::Display for HolidaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for holiday in self.holidays.iter() {
            writeln!(f, "{}", holiday)?;
        }
        Ok(())
    }
}
