use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

const YEAR_MIN: i32 = 1;
const YEAR_MAX: i32 = 9999;

/// Parses an ISO `YYYY-MM-DD` date from form input.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ValidationError::new(String::from("Date cannot be empty")));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        ValidationError::new(format!("Invalid date, expected YYYY-MM-DD: {e}"))
    })
}

/// A calendar month, held as the date of its first day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(ValidationError::new(format!(
                "Year must be between {YEAR_MIN} and {YEAR_MAX}"
            )));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(|| ValidationError::new(format!("Invalid month: {month}")))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date - Days::new(u64::from(date.day0())))
    }

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let invalid =
            || ValidationError::new(format!("Invalid month, expected YYYY-MM: {s}"));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - Days::new(1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }

    pub fn next(&self) -> Self {
        // 31 days past the 1st always lands inside the following month
        Self::from_date(self.0 + Days::new(31))
    }

    pub fn previous(&self) -> Self {
        Self::from_date(self.0 - Days::new(1))
    }

    /// Moves `months` forward (positive) or backward (negative). `None` when
    /// the target falls outside the supported years.
    pub fn offset(&self, months: i32) -> Option<Self> {
        let step = Months::new(months.unsigned_abs());
        let target = if months >= 0 {
            self.0.checked_add_months(step)
        } else {
            self.0.checked_sub_months(step)
        }?;
        (YEAR_MIN..=YEAR_MAX)
            .contains(&target.year())
            .then_some(Self(target))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<YearMonth> for String {
    fn from(month: YearMonth) -> Self {
        month.to_string()
    }
}
