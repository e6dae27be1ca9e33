//! Weekday arithmetic shared by every holiday rule.
//!
//! All four functions are pure: they take a date (or year and month) and
//! return a new date without touching any shared cursor.

use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

#[inline]
fn days_back(from: Weekday, to: Weekday) -> u64 {
    ((from.num_days_from_monday() + 7 - to.num_days_from_monday()) % 7) as u64
}

#[inline]
fn days_forward(from: Weekday, to: Weekday) -> u64 {
    ((to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7) as u64
}

/// The `n`-th `weekday` of `month` in `year`, counting from the 1st.
///
/// Returns `None` for `n == 0`, an invalid month, or when the month has
/// fewer than `n` occurrences of `weekday`.
pub fn nth_weekday_of_month(year: i32, month: u32, n: u8, weekday: Weekday) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
        return None;
    }
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
}

/// Largest date strictly before `d` falling on `weekday`.
pub fn previous_weekday(d: NaiveDate, weekday: Weekday) -> NaiveDate {
    let back = match days_back(d.weekday(), weekday) {
        0 => 7,
        n => n
    };
    d - Days::new(back)
}

/// Smallest date strictly after `d` falling on `weekday`.
pub fn next_weekday(d: NaiveDate, weekday: Weekday) -> NaiveDate {
    let forward = match days_forward(d.weekday(), weekday) {
        0 => 7,
        n => n
    };
    d + Days::new(forward)
}

/// Largest date on or before `d` falling on `weekday`.
pub fn weekday_on_or_before(d: NaiveDate, weekday: Weekday) -> NaiveDate {
    d - Days::new(days_back(d.weekday(), weekday))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const ALL_WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
        Weekday::Fri, Weekday::Sat, Weekday::Sun
    ];

    #[test]
    fn second_monday_of_october() {
        // Oct 1 2017 is a Sunday, Oct 1 2024 a Tuesday.
        assert_eq!(nth_weekday_of_month(2017, 10, 2, Weekday::Mon), Some(ymd(2017, 10, 9)));
        assert_eq!(nth_weekday_of_month(2024, 10, 2, Weekday::Mon), Some(ymd(2024, 10, 14)));
    }

    #[test]
    fn first_weekday_on_the_first() {
        // Jan 1 2018 is a Monday.
        assert_eq!(nth_weekday_of_month(2018, 1, 1, Weekday::Mon), Some(ymd(2018, 1, 1)));
        assert_eq!(nth_weekday_of_month(2018, 1, 3, Weekday::Mon), Some(ymd(2018, 1, 15)));
    }

    #[test]
    fn missing_occurrence_is_none() {
        // February 2015 has exactly four of every weekday.
        for weekday in ALL_WEEKDAYS {
            assert!(nth_weekday_of_month(2015, 2, 4, weekday).is_some());
            assert_eq!(nth_weekday_of_month(2015, 2, 5, weekday), None);
        }
        assert_eq!(nth_weekday_of_month(2015, 3, 0, Weekday::Mon), None);
        assert_eq!(nth_weekday_of_month(2015, 13, 1, Weekday::Mon), None);
        assert_eq!(nth_weekday_of_month(2015, 3, 6, Weekday::Mon), None);
    }

    #[test]
    fn previous_is_strict() {
        let monday = ymd(2025, 3, 31);
        assert_eq!(previous_weekday(monday, Weekday::Mon), ymd(2025, 3, 24));
        assert_eq!(previous_weekday(monday, Weekday::Fri), ymd(2025, 3, 28));
        assert_eq!(previous_weekday(ymd(2024, 3, 31), Weekday::Mon), ymd(2024, 3, 25));
    }

    #[test]
    fn next_is_strict() {
        let friday = ymd(2023, 3, 31);
        assert_eq!(next_weekday(friday, Weekday::Fri), ymd(2023, 4, 7));
        assert_eq!(next_weekday(friday, Weekday::Sat), ymd(2023, 4, 1));
        assert_eq!(next_weekday(ymd(2025, 3, 31), Weekday::Fri), ymd(2025, 4, 4));
    }

    #[test]
    fn on_or_before_is_inclusive() {
        let monday = ymd(2026, 5, 25);
        assert_eq!(weekday_on_or_before(monday, Weekday::Mon), monday);
        assert_eq!(weekday_on_or_before(ymd(2018, 5, 25), Weekday::Mon), ymd(2018, 5, 21));
    }

    #[test]
    fn rules_land_on_target_weekday_within_a_week() {
        let mut d = ymd(2023, 12, 20);
        for _ in 0..21 {
            for weekday in ALL_WEEKDAYS {
                let prev = previous_weekday(d, weekday);
                let next = next_weekday(d, weekday);
                let on_or_before = weekday_on_or_before(d, weekday);
                assert_eq!(prev.weekday(), weekday);
                assert_eq!(next.weekday(), weekday);
                assert_eq!(on_or_before.weekday(), weekday);
                assert!((1..=7).contains(&(d - prev).num_days()));
                assert!((1..=7).contains(&(next - d).num_days()));
                assert!((0..=6).contains(&(d - on_or_before).num_days()));
            }
            d = d.succ_opt().unwrap();
        }
    }
}
