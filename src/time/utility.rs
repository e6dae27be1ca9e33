use chrono::NaiveDate;

use crate::calendarerror::CalendarError;

/// Date format used for every civil date the crate reads or prints.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` string into a civil date.
///
/// The holiday core only ever sees `NaiveDate`; any string input goes
/// through here first so that a bad date fails before computation starts.
pub fn parse_civil_date(input: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE_FORMAT)
        .map_err(|error| CalendarError::invalid_date(input, error))
}
