use std::fmt;
use std::str::FromStr;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use crate::calendarerror::CalendarError;
use crate::time::easter::{
    FIRST_EASTER_YEAR,
    LAST_EASTER_YEAR
};
use crate::time::weekdayrule::{
    next_weekday,
    previous_weekday
};

/// Month from which a reference date belongs to the school year starting
/// in its own calendar year.
const CHANGEOVER_MONTH: u32 = 8;

/// The pair of consecutive calendar years spanned by one school year,
/// September of the first through June of the second.
///
/// Only the first year is stored, so the second is always `first + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchoolYear {
    first_year: i32
}

impl SchoolYear {
    /// Fails when the spring half of the school year falls outside the
    /// years the Easter computation supports.
    pub fn new(first_year: i32) -> Result<SchoolYear, CalendarError> {
        let second_year = first_year.checked_add(1);
        match second_year {
            Some(y1) if first_year >= FIRST_EASTER_YEAR && y1 <= LAST_EASTER_YEAR => {
                Ok(SchoolYear { first_year })
            },
            _ => Err(CalendarError::invalid_date(
                first_year,
                format!("school year must start between {} and {}", FIRST_EASTER_YEAR, LAST_EASTER_YEAR - 1)
            ))
        }
    }

    /// August onward belongs to the school year starting that calendar year,
    /// January through July to the one that started the year before.
    pub fn from_reference_date(reference_date: NaiveDate) -> Result<SchoolYear, CalendarError> {
        let year = reference_date.year();
        let first_year = if reference_date.month() >= CHANGEOVER_MONTH {
            year
        } else {
            year - 1
        };
        SchoolYear::new(first_year).map_err(|_| {
            CalendarError::invalid_date(reference_date, "date outside the supported school years")
        })
    }

    /// Parses a `YYYY-YYYY` label such as `2017-2018`.
    pub fn parse(label: &str) -> Result<SchoolYear, CalendarError> {
        let invalid = || CalendarError::InvalidSchoolYear(label.to_owned());
        let (first, second) = label.trim().split_once('-').ok_or_else(invalid)?;
        let is_year = |s: &str| s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit());
        if !is_year(first) || !is_year(second) {
            return Err(invalid());
        }
        let first_year: i32 = first.parse().map_err(|_| invalid())?;
        let second_year: i32 = second.parse().map_err(|_| invalid())?;
        if second_year != first_year + 1 {
            return Err(invalid());
        }
        SchoolYear::new(first_year).map_err(|_| invalid())
    }

    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    pub fn second_year(&self) -> i32 {
        self.first_year + 1
    }

    pub fn label(&self) -> String {
        format!("{}-{}", self.first_year, self.second_year())
    }

    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.first_year, CHANGEOVER_MONTH, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn end_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.second_year(), CHANGEOVER_MONTH - 1, 31)
            .unwrap_or(NaiveDate::MAX)
    }

    /// True for every date whose reference would select this school year.
    pub fn contains(&self, d: NaiveDate) -> bool {
        d >= self.start_date() && d <= self.end_date()
    }

    /// The Tuesday after Labour Day (first Monday of September).
    pub fn first_school_day(&self) -> NaiveDate {
        let labour_day = next_weekday(self.date_in_first_year(8, 31), Weekday::Mon);
        next_weekday(labour_day, Weekday::Tue)
    }

    /// June 30, pulled back to the Friday before when it is a weekend.
    pub fn last_school_day(&self) -> NaiveDate {
        let june_30 = self.date_in_second_year(6, 30);
        match june_30.weekday() {
            Weekday::Sat | Weekday::Sun => previous_weekday(june_30, Weekday::Fri),
            _ => june_30
        }
    }

    /// `month`/`day` of the first calendar year. Only called with fixed,
    /// always-valid month/day pairs.
    pub(crate) fn date_in_first_year(&self, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.first_year, month, day).unwrap_or(NaiveDate::MIN)
    }

    pub(crate) fn date_in_second_year(&self, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.second_year(), month, day).unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for SchoolYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first_year, self.second_year())
    }
}

impl FromStr for SchoolYear {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchoolYear::parse(s)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reference_date_selects_year_pair() {
        let fall = SchoolYear::from_reference_date(ymd(2017, 9, 1)).unwrap();
        assert_eq!((fall.first_year(), fall.second_year()), (2017, 2018));

        let spring = SchoolYear::from_reference_date(ymd(2018, 3, 15)).unwrap();
        assert_eq!(spring, fall);

        let july = SchoolYear::from_reference_date(ymd(2018, 7, 31)).unwrap();
        assert_eq!(july, fall);

        let august = SchoolYear::from_reference_date(ymd(2018, 8, 1)).unwrap();
        assert_eq!((august.first_year(), august.second_year()), (2018, 2019));
    }

    #[test]
    fn pair_is_stable_across_its_span() {
        let school_year = SchoolYear::new(2024).unwrap();
        let mut d = ymd(2024, 8, 1);
        while d <= ymd(2025, 7, 31) {
            let selected = SchoolYear::from_reference_date(d).unwrap();
            assert_eq!(selected, school_year, "{d}");
            assert_eq!(selected.second_year(), selected.first_year() + 1);
            assert!(school_year.contains(d));
            d = d.succ_opt().unwrap();
        }
        assert!(!school_year.contains(ymd(2024, 7, 31)));
        assert!(!school_year.contains(ymd(2025, 8, 1)));
    }

    #[test]
    fn parses_labels() {
        let school_year: SchoolYear = "2017-2018".parse().unwrap();
        assert_eq!(school_year.first_year(), 2017);
        assert_eq!(school_year.label(), "2017-2018");
        assert_eq!(school_year.to_string(), "2017-2018");
    }

    #[test]
    fn rejects_bad_labels() {
        for bad in ["2017-2019", "2018-2017", "2017", "17-18", "2017/2018", "abcd-efgh", "2017-2018-2019", ""] {
            assert!(
                matches!(SchoolYear::parse(bad), Err(CalendarError::InvalidSchoolYear(ref l)) if l == bad),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn out_of_range_years_are_invalid_dates() {
        assert!(matches!(SchoolYear::new(1500), Err(CalendarError::InvalidDateInput { .. })));
        assert!(matches!(SchoolYear::new(9999), Err(CalendarError::InvalidDateInput { .. })));
        assert!(SchoolYear::new(9998).is_ok());
    }

    #[test]
    fn first_and_last_school_days() {
        // Labour Day 2017 is Sep 4; June 30 2018 is a Saturday.
        let school_year = SchoolYear::new(2017).unwrap();
        assert_eq!(school_year.first_school_day(), ymd(2017, 9, 5));
        assert_eq!(school_year.last_school_day(), ymd(2018, 6, 29));

        // Sep 1 2025 is Labour Day itself; June 30 2026 is a Tuesday.
        let school_year = SchoolYear::new(2025).unwrap();
        assert_eq!(school_year.first_school_day(), ymd(2025, 9, 2));
        assert_eq!(school_year.last_school_day(), ymd(2026, 6, 30));
    }
}
