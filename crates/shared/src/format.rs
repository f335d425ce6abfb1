//! Display formatting for metric values.
//!
//! Renderers receive raw numeric values from the view model; these helpers
//! produce the human-readable strings shown on metric cards.

use rust_decimal::Decimal;

/// Formats an integer count with thousands separators, e.g. `12345` -> `"12,345"`.
#[must_use]
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group_thousands(&digits);
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats a currency amount in USD with two decimal places,
/// e.g. `12450` -> `"$12,450.00"`.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = format!("{:.2}", rounded.abs());
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let grouped = group_thousands(whole);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}.{frac}")
    } else {
        format!("${grouped}.{frac}")
    }
}

/// Formats a percentage value, e.g. `4.2` -> `"4.2%"`.
///
/// Trailing zeros are trimmed so stored values like `4.20` render as `4.2%`.
#[must_use]
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", value.normalize())
}

/// Inserts a comma between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 3 == offset % 3 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(0, "0")]
    #[case(78, "78")]
    #[case(999, "999")]
    #[case(1_000, "1,000")]
    #[case(12_345, "12,345")]
    #[case(5_678, "5,678")]
    #[case(1_234_567, "1,234,567")]
    #[case(-12_345, "-12,345")]
    fn test_format_number(#[case] value: i64, #[case] expected: &str) {
        assert_eq!(format_number(value), expected);
    }

    #[rstest]
    #[case(dec!(12450), "$12,450.00")]
    #[case(dec!(0), "$0.00")]
    #[case(dec!(19.999), "$20.00")]
    #[case(dec!(1234567.89), "$1,234,567.89")]
    #[case(dec!(-42.50), "-$42.50")]
    fn test_format_currency(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_currency(amount), expected);
    }

    #[rstest]
    #[case(dec!(4.2), "4.2%")]
    #[case(dec!(4.20), "4.2%")]
    #[case(dec!(0), "0%")]
    #[case(dec!(100), "100%")]
    #[case(dec!(-2.1), "-2.1%")]
    fn test_format_percent(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_percent(value), expected);
    }
}
