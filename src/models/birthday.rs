use std::fmt;

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DATE_FORMAT: &str = "%d.%m.%Y";

/// A birth date entered as `DD.MM.YYYY`. Future dates are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(raw: &str) -> Result<Self> {
        Self::new_on(raw, Local::now().date_naive())
    }

    /// Validate against an explicit "today" so tests can pin the clock.
    pub fn new_on(raw: &str, today: NaiveDate) -> Result<Self> {
        let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
            Error::validation("birthday", format!("'{}' is not a DD.MM.YYYY date", raw))
        })?;
        if date > today {
            return Err(Error::validation(
                "birthday",
                format!("'{}' is in the future", raw),
            ));
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's occurrence in the given year. Feb 29 is taken as
    /// Mar 1 outside leap years.
    pub fn occurrence_in(&self, year: i32) -> NaiveDate {
        match self.0.with_year(year) {
            Some(date) => date,
            None => NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or(self.0),
        }
    }

    /// When to congratulate: weekend occurrences shift to the following
    /// Monday.
    pub fn congratulation_for(date: NaiveDate) -> NaiveDate {
        match date.weekday() {
            Weekday::Sat => date + Duration::days(2),
            Weekday::Sun => date + Duration::days(1),
            _ => date,
        }
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
