use chrono::{Days, NaiveDate, NaiveDateTime};

use super::{Role, ValidationError, YearMonth};

pub const DEFAULT_DEADLINE_DAY: u32 = 26;

/// Decides whether shift requests for a month are still open.
///
/// Requests for a month close on a fixed day of the preceding month.
/// Administrators are never locked out.
///
/// The comparison is by calendar date, so the deadline day itself stays open
/// until midnight. The earlier web client locked at the start of that day;
/// this gate deliberately accepts requests made during it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineGate {
    day_of_month: u32,
}

impl DeadlineGate {
    pub fn new(day_of_month: u32) -> Result<Self, ValidationError> {
        match day_of_month {
            1..=28 => Ok(Self { day_of_month }),
            _ => Err(ValidationError::new(format!(
                "Deadline day must be between 1 and 28: {day_of_month}"
            ))),
        }
    }

    pub fn day_of_month(&self) -> u32 {
        self.day_of_month
    }

    pub fn deadline(&self, target: YearMonth) -> NaiveDate {
        target.previous().first_day()
            + Days::new(u64::from(self.day_of_month - 1))
    }

    pub fn is_deadline_passed(
        &self,
        now: NaiveDateTime,
        target: YearMonth,
    ) -> bool {
        now.date() > self.deadline(target)
    }

    pub fn can_submit(
        &self,
        role: Role,
        now: NaiveDateTime,
        target: YearMonth,
    ) -> bool {
        role.is_admin() || !self.is_deadline_passed(now, target)
    }
}

impl Default for DeadlineGate {
    fn default() -> Self {
        Self {
            day_of_month: DEFAULT_DEADLINE_DAY,
        }
    }
}
