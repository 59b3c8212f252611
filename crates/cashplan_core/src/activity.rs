//! Month-granularity activity windows for recurring items
//!
//! An item is active in every month its inclusive `[start_date, end_date]`
//! interval touches, boundary months included. Missing bounds are open.

use jiff::civil::Date;

use crate::model::{RecurringExpense, RecurringIncome};

/// `true` when the window overlaps the month containing `month_date`.
pub fn is_active(start: Option<Date>, end: Option<Date>, month_date: Date) -> bool {
    if start.is_none() && end.is_none() {
        return true;
    }

    if let Some(start) = start
        && month_date.last_of_month() < start
    {
        return false;
    }

    if let Some(end) = end
        && month_date.first_of_month() > end
    {
        return false;
    }

    true
}

/// A recurring item bounded by optional start and end dates
pub trait ActivityWindow {
    fn start_date(&self) -> Option<Date>;
    fn end_date(&self) -> Option<Date>;

    fn is_active_in(&self, month_date: Date) -> bool {
        is_active(self.start_date(), self.end_date(), month_date)
    }
}

impl ActivityWindow for RecurringIncome {
    fn start_date(&self) -> Option<Date> {
        self.start_date
    }

    fn end_date(&self) -> Option<Date> {
        self.end_date
    }
}

impl ActivityWindow for RecurringExpense {
    fn start_date(&self) -> Option<Date> {
        self.start_date
    }

    fn end_date(&self) -> Option<Date> {
        self.end_date
    }
}

/// Items of `items` active in the month containing `month_date`, in input order.
pub fn active_in<T: ActivityWindow>(items: &[T], month_date: Date) -> impl Iterator<Item = &T> {
    items.iter().filter(move |item| item.is_active_in(month_date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_unbounded_is_always_active() {
        assert!(is_active(None, None, date(1999, 1, 1)));
        assert!(is_active(None, None, date(2099, 12, 31)));
    }

    #[test]
    fn test_start_mid_month_includes_that_month() {
        let start = Some(date(2024, 3, 15));
        assert!(!is_active(start, None, date(2024, 2, 1)));
        assert!(!is_active(start, None, date(2024, 2, 29)));
        assert!(is_active(start, None, date(2024, 3, 1)));
        assert!(is_active(start, None, date(2024, 4, 1)));
        assert!(is_active(start, None, date(2030, 1, 1)));
    }

    #[test]
    fn test_end_mid_month_includes_that_month() {
        let end = Some(date(2024, 3, 10));
        assert!(is_active(None, end, date(2020, 1, 1)));
        assert!(is_active(None, end, date(2024, 3, 31)));
        assert!(!is_active(None, end, date(2024, 4, 1)));
    }

    #[test]
    fn test_single_day_window() {
        let d = Some(date(2025, 6, 30));
        assert!(is_active(d, d, date(2025, 6, 1)));
        assert!(!is_active(d, d, date(2025, 5, 1)));
        assert!(!is_active(d, d, date(2025, 7, 1)));
    }
}
