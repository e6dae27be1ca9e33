use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("invalid date '{input}': {reason}")]
    InvalidDateInput {
        input: String,
        reason: String
    },

    #[error("no winter break configured for school year {0}")]
    MissingWinterBreakData(String),

    #[error("malformed range: start {start} is after end {end}")]
    MalformedRange {
        start: NaiveDate,
        end: NaiveDate
    },

    #[error("invalid school year '{0}', expected YYYY-YYYY with consecutive years")]
    InvalidSchoolYear(String),

    #[error("holiday '{name}' cannot be placed in school year {school_year}")]
    HolidayNotFound {
        name: String,
        school_year: String
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error)
}

impl CalendarError {
    pub fn invalid_date(input: impl ToString, reason: impl ToString) -> CalendarError {
        CalendarError::InvalidDateInput {
            input: input.to_string(),
            reason: reason.to_string()
        }
    }
}
