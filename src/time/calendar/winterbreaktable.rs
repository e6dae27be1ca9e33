use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize
};

use crate::calendarerror::CalendarError;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::schoolyear::SchoolYear;

/// Winter break per school year, keyed by the `YYYY-YYYY` label.
///
/// The dates are negotiated every year and cannot be computed, so they
/// come in as configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WinterBreakTable {
    breaks: BTreeMap<String, (NaiveDate, NaiveDate)>
}

impl WinterBreakTable {
    pub fn new() -> WinterBreakTable {
        WinterBreakTable { breaks: BTreeMap::new() }
    }

    pub fn insert(&mut self, school_year: SchoolYear, start: NaiveDate, end: NaiveDate) -> Result<(), CalendarError> {
        RangeOfDates::new(start, end)?;
        self.breaks.insert(school_year.label(), (start, end));
        Ok(())
    }

    pub fn get(&self, school_year: &SchoolYear) -> Option<(NaiveDate, NaiveDate)> {
        self.breaks.get(&school_year.label()).copied()
    }

    /// Like [`get`](Self::get), but a missing year is an error. Feed
    /// generation uses this: without the break, every day of it would be
    /// published as a school day.
    pub fn require(&self, school_year: &SchoolYear) -> Result<(NaiveDate, NaiveDate), CalendarError> {
        self.get(school_year)
            .ok_or_else(|| CalendarError::MissingWinterBreakData(school_year.label()))
    }

    /// Checks every label and every range; used after deserializing.
    pub fn validate(&self) -> Result<(), CalendarError> {
        for (label, (start, end)) in self.breaks.iter() {
            SchoolYear::parse(label)?;
            RangeOfDates::new(*start, *end)?;
        }
        Ok(())
    }

    pub fn school_years(&self) -> Vec<SchoolYear> {
        self.breaks.keys()
            .filter_map(|label| SchoolYear::parse(label).ok())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.breaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breaks.is_empty()
    }
}
