//! Common utility functions for price calculations.
//!
//! This module provides shared functionality used by the estimator and the
//! form layer, including rounding, numeric parsing and display formatting.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Rounds a decimal value to a whole number, sending exact halves toward
/// positive infinity.
///
/// This matches the rounding the price form has always shown: `2.5` becomes
/// `3` and `-2.5` becomes `-2`.
///
/// # Arguments
///
/// * `value` - The decimal value to round
///
/// # Returns
///
/// The value rounded to zero decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use price_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.4)), dec!(123));
/// assert_eq!(round_half_up(dec!(123.5)), dec!(124));
/// assert_eq!(round_half_up(dec!(-123.5)), dec!(-123)); // Toward +infinity
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    (value + dec!(0.5)).floor()
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Returns `None` for empty input or when the text is not a number.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use price_core::calculations::common::parse_decimal;
///
/// assert_eq!(parse_decimal(" 8,000 "), Some(dec!(8000)));
/// assert_eq!(parse_decimal("2.5"), Some(dec!(2.5)));
/// assert_eq!(parse_decimal("three"), None);
/// ```
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().ok()
}

/// Reads the integer at the start of `s` and ignores whatever follows it.
///
/// Leading whitespace is skipped, an optional sign is accepted and a `0x`
/// prefix switches to hexadecimal. Returns `None` when no digit follows, or
/// when the digits do not fit in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use price_core::calculations::common::parse_leading_int;
///
/// assert_eq!(parse_leading_int("3.7"), Some(dec!(3)));
/// assert_eq!(parse_leading_int("8,000"), Some(dec!(8)));
/// assert_eq!(parse_leading_int("  -12 ft"), Some(dec!(-12)));
/// assert_eq!(parse_leading_int("two"), None);
/// ```
pub fn parse_leading_int(s: &str) -> Option<Decimal> {
    let s = s.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, s) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = s.find(|c: char| !c.is_digit(radix)).unwrap_or(s.len());
    if end == 0 {
        return None;
    }

    let magnitude = s[..end].chars().try_fold(Decimal::ZERO, |acc, c| {
        let digit = Decimal::from(c.to_digit(radix)?);
        acc.checked_mul(Decimal::from(radix))?.checked_add(digit)
    })?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Formats a whole number with comma thousands separators.
///
/// # Examples
///
/// ```
/// use price_core::calculations::common::format_thousands;
///
/// assert_eq!(format_thousands(536500), "536,500");
/// assert_eq!(format_thousands(-1200), "-1,200");
/// assert_eq!(format_thousands(999), "999");
/// ```
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
