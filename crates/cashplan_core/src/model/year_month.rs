//! Calendar month key used to index projections.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date_math;

/// A calendar month, serialized as `YYYY-MM`.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i16,
    /// 1-based month (January = 1)
    pub month: i8,
}

impl YearMonth {
    /// Create a month key. Returns `None` for a month outside `1..=12` or a
    /// year jiff cannot represent.
    pub fn new(year: i16, month: i8) -> Option<Self> {
        let year_ok = (Date::MIN.year()..=Date::MAX.year()).contains(&year);
        (year_ok && (1..=12).contains(&month)).then_some(Self { year, month })
    }

    pub fn from_date(d: Date) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
        }
    }

    pub fn first_day(self) -> Date {
        jiff::civil::date(self.year, self.month, 1)
    }

    pub fn last_day(self) -> Date {
        self.first_day().last_of_month()
    }

    /// The following month, or `None` past the last representable month.
    pub fn next(self) -> Option<Self> {
        date_math::next_month_start(self.first_day()).map(Self::from_date)
    }

    /// `true` when `d` falls inside this month.
    pub fn contains(self, d: Date) -> bool {
        d.year() == self.year && d.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error returned when a `YYYY-MM` key cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseYearMonthError(String);

impl fmt::Display for ParseYearMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid year-month {:?}, expected YYYY-MM", self.0)
    }
}

impl std::error::Error for ParseYearMonthError {}

impl FromStr for YearMonth {
    type Err = ParseYearMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseYearMonthError(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(err)?;
        let year = year.parse::<i16>().map_err(|_| err())?;
        let month = month.parse::<i8>().map_err(|_| err())?;
        YearMonth::new(year, month).ok_or_else(err)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
