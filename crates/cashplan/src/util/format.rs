//! Spanish-locale number formatting for reports
//!
//! Amounts use `.` for thousands, `,` for decimals and a trailing euro sign:
//! `1.234,56 €`.

/// Group an integer's digits in threes with `.`
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

fn sign(value: f64, magnitude_is_zero: bool) -> &'static str {
    if value < 0.0 && !magnitude_is_zero { "-" } else { "" }
}

/// Format an amount in euros with cents, e.g. `-1.234,56 €`
pub fn format_euro(value: f64) -> String {
    let total_cents = (value.abs() * 100.0).round() as u64;
    let (euros, cents) = (total_cents / 100, total_cents % 100);
    format!(
        "{}{},{:02} €",
        sign(value, total_cents == 0),
        group_thousands(euros),
        cents
    )
}

/// Format an amount in whole euros for tight columns, e.g. `12.345 €`
pub fn format_euro_short(value: f64) -> String {
    let euros = value.abs().round() as u64;
    format!("{}{} €", sign(value, euros == 0), group_thousands(euros))
}

/// Format a percentage given in percent units, e.g. `21.0` -> `21 %`
pub fn format_percent(percent: f64) -> String {
    let rounded = (percent * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0} %")
    } else {
        format!("{rounded:.2} %").replace('.', ",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_euro() {
        assert_eq!(format_euro(0.0), "0,00 €");
        assert_eq!(format_euro(5.5), "5,50 €");
        assert_eq!(format_euro(1_234.56), "1.234,56 €");
        assert_eq!(format_euro(1_234_567.891), "1.234.567,89 €");
        assert_eq!(format_euro(-980.0), "-980,00 €");
    }

    #[test]
    fn test_format_euro_carries_rounded_cents() {
        assert_eq!(format_euro(999.999), "1.000,00 €");
        assert_eq!(format_euro(-0.001), "0,00 €");
    }

    #[test]
    fn test_format_euro_short() {
        assert_eq!(format_euro_short(172_377.0), "172.377 €");
        assert_eq!(format_euro_short(-1_499.6), "-1.500 €");
        assert_eq!(format_euro_short(999.4), "999 €");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(21.0), "21 %");
        assert_eq!(format_percent(3.25), "3,25 %");
        assert_eq!(format_percent(0.0), "0 %");
    }
}
