use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{parse_date, ValidationError, YearMonth};

/// Japanese national holidays.
const BUILTIN_HOLIDAYS: &[(i32, u32, u32, &str)] = &[
    (2025, 1, 1, "元日"),
    (2025, 1, 13, "成人の日"),
    (2025, 2, 11, "建国記念の日"),
    (2025, 2, 23, "天皇誕生日"),
    (2025, 2, 24, "振替休日"),
    (2025, 3, 20, "春分の日"),
    (2025, 4, 29, "昭和の日"),
    (2025, 5, 3, "憲法記念日"),
    (2025, 5, 4, "みどりの日"),
    (2025, 5, 5, "こどもの日"),
    (2025, 5, 6, "振替休日"),
    (2025, 7, 21, "海の日"),
    (2025, 8, 11, "山の日"),
    (2025, 9, 15, "敬老の日"),
    (2025, 9, 23, "秋分の日"),
    (2025, 10, 13, "スポーツの日"),
    (2025, 11, 3, "文化の日"),
    (2025, 11, 23, "勤労感謝の日"),
    (2025, 11, 24, "振替休日"),
    (2026, 1, 1, "元日"),
    (2026, 1, 12, "成人の日"),
    (2026, 2, 11, "建国記念の日"),
    (2026, 2, 23, "天皇誕生日"),
    (2026, 3, 20, "春分の日"),
    (2026, 4, 29, "昭和の日"),
    (2026, 5, 3, "憲法記念日"),
    (2026, 5, 4, "みどりの日"),
    (2026, 5, 5, "こどもの日"),
    (2026, 5, 6, "振替休日"),
    (2026, 7, 20, "海の日"),
    (2026, 8, 11, "山の日"),
    (2026, 9, 21, "敬老の日"),
    (2026, 9, 22, "国民の休日"),
    (2026, 9, 23, "秋分の日"),
    (2026, 10, 12, "スポーツの日"),
    (2026, 11, 3, "文化の日"),
    (2026, 11, 23, "勤労感謝の日"),
];

pub fn builtin_holiday_name(date: NaiveDate) -> Option<&'static str> {
    BUILTIN_HOLIDAYS
        .iter()
        .find(|(y, m, d, _)| NaiveDate::from_ymd_opt(*y, *m, *d) == Some(date))
        .map(|(_, _, _, name)| *name)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HolidayName(String);

impl HolidayName {
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        match name.trim().chars().count() {
            x if x < 1 => Err(ValidationError::new(String::from(
                "Holiday name cannot be empty",
            ))),
            x if x > 255 => Err(ValidationError::new(String::from(
                "Max holiday name length is 255 characters",
            ))),
            _ => Ok(Self(name.trim().to_owned())),
        }
    }
}

impl AsRef<str> for HolidayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HolidayName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HolidayName> for String {
    fn from(name: HolidayName) -> Self {
        name.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidaySource {
    Builtin,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: HolidayName,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: HolidayName) -> Self {
        Self { date, name }
    }

    /// Builds a custom holiday from raw form input; both fields are required.
    pub fn parse(date: &str, name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            date: parse_date(date)?,
            name: HolidayName::parse(name)?,
        })
    }
}

/// Built-in holiday table overlaid with user-added holidays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidayRegistry {
    custom: BTreeMap<NaiveDate, HolidayName>,
}

impl HolidayRegistry {
    pub fn new(custom: impl IntoIterator<Item = Holiday>) -> Self {
        Self {
            custom: custom.into_iter().map(|h| (h.date, h.name)).collect(),
        }
    }

    /// Custom names shadow built-in ones for the same date.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.custom
            .get(&date)
            .map(|name| name.as_ref())
            .or_else(|| builtin_holiday_name(date))
    }

    pub fn source(&self, date: NaiveDate) -> Option<HolidaySource> {
        if self.custom.contains_key(&date) {
            Some(HolidaySource::Custom)
        } else {
            builtin_holiday_name(date).map(|_| HolidaySource::Builtin)
        }
    }

    /// Returns the entry the new holiday replaced, if any.
    pub fn add_custom(&mut self, holiday: Holiday) -> Option<Holiday> {
        self.custom
            .insert(holiday.date, holiday.name)
            .map(|name| Holiday::new(holiday.date, name))
    }

    pub fn remove_custom(&mut self, date: NaiveDate) -> Option<Holiday> {
        self.custom
            .remove(&date)
            .map(|name| Holiday::new(date, name))
    }

    pub fn custom_holidays(&self) -> Vec<Holiday> {
        self.custom
            .iter()
            .map(|(date, name)| Holiday::new(*date, name.clone()))
            .collect()
    }

    /// Every holiday falling in `month`, ordered by date.
    pub fn holidays_in(&self, month: YearMonth) -> Vec<(Holiday, HolidaySource)> {
        month
            .first_day()
            .iter_days()
            .take_while(|date| *date <= month.last_day())
            .filter_map(|date| {
                let name = self.holiday_name(date)?;
                let source = self.source(date)?;
                Some((Holiday::new(date, HolidayName::parse(name).ok()?), source))
            })
            .collect()
    }
}
