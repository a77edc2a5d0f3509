use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;
use std::iter::FusedIterator;

use super::{HolidayRegistry, YearMonth};

pub const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DayKind {
    Holiday { name: String },
    Sunday,
    Saturday,
    Weekday,
}

impl DayKind {
    /// Holidays win over the day of the week.
    pub fn classify(date: NaiveDate, holidays: &HolidayRegistry) -> Self {
        if let Some(name) = holidays.holiday_name(date) {
            return DayKind::Holiday {
                name: name.to_owned(),
            };
        }
        match date.weekday() {
            Weekday::Sun => DayKind::Sunday,
            Weekday::Sat => DayKind::Saturday,
            _ => DayKind::Weekday,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    #[serde(rename = "isCurrentMonth")]
    pub is_current_month: bool,
    #[serde(flatten)]
    pub kind: DayKind,
}

/// Seven-column month grid starting on a Sunday.
#[derive(Debug, Clone, Copy)]
pub struct CalendarGrid<'a> {
    month: YearMonth,
    holidays: &'a HolidayRegistry,
}

impl<'a> CalendarGrid<'a> {
    pub fn new(month: YearMonth, holidays: &'a HolidayRegistry) -> Self {
        Self { month, holidays }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// First cell of the grid: the Sunday on or before the 1st.
    pub fn start(&self) -> NaiveDate {
        let first = self.month.first_day();
        first
            - Days::new(u64::from(first.weekday().num_days_from_sunday()))
    }

    /// Cells from [`Self::start`] through the last day of the month. Only
    /// leading days from the previous month are included.
    pub fn days(&self) -> CalendarDays<'a> {
        CalendarDays {
            next: Some(self.start()),
            last: self.month.last_day(),
            month: self.month,
            holidays: self.holidays,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CalendarDays<'a> {
    next: Option<NaiveDate>,
    last: NaiveDate,
    month: YearMonth,
    holidays: &'a HolidayRegistry,
}

impl Iterator for CalendarDays<'_> {
    type Item = DayCell;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.next.filter(|date| *date <= self.last)?;
        self.next = date.succ_opt();
        Some(DayCell {
            date,
            is_current_month: self.month.contains(date),
            kind: DayKind::classify(date, self.holidays),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map(|date| (self.last - date).num_days() + 1)
            .unwrap_or(0)
            .max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CalendarDays<'_> {}

impl FusedIterator for CalendarDays<'_> {}
