use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

/// Something that can tell school days from days without classes.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, d: NaiveDate) -> bool;

    fn is_weekend(&self, d: NaiveDate) -> bool {
        matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn is_school_day(&self, d: NaiveDate) -> bool {
        !self.is_weekend(d) && !self.is_holiday(d)
    }
}
