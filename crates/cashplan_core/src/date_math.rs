//! Whole-month arithmetic on `jiff::civil::Date`.
//!
//! Month differences work on the year/month fields so the day of month is
//! ignored; first and last day of a month come straight from jiff.

use jiff::civil::Date;

/// Absolute month number (`year * 12 + month0`), used for month differences.
#[inline]
pub fn month_index(d: Date) -> i32 {
    i32::from(d.year()) * 12 + (i32::from(d.month()) - 1)
}

/// Whole calendar months from `from` to `to`, ignoring the day of month.
///
/// Negative when `to` is in an earlier month than `from`.
#[inline]
pub fn months_between(from: Date, to: Date) -> i32 {
    month_index(to) - month_index(from)
}

/// First day of the month after the one containing `d`.
///
/// Returns `None` past the last representable month.
#[inline]
pub fn next_month_start(d: Date) -> Option<Date> {
    if d.month() == 12 {
        Date::new(d.year().checked_add(1)?, 1, 1).ok()
    } else {
        Date::new(d.year(), d.month() + 1, 1).ok()
    }
}
