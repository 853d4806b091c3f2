//! Lenient parsing of the pt-BR formatted strings produced by the input forms.
//!
//! Parsing never fails: empty, malformed, negative or out-of-range input becomes
//! zero so a simulation always runs and garbage shows up as an implausible result.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

const PERCENT_DIVISOR: Decimal = dec!(100);

/// Parses a monetary amount such as `"1.234,56"` (dot grouping, comma decimal mark).
pub fn parse_currency(raw: &str) -> Decimal {
    let without_grouping: String = raw.trim().chars().filter(|c| *c != '.').collect();
    parse_non_negative(&without_grouping.replacen(',', ".", 1))
}

/// Parses a percentage such as `"12,5"` into a fraction (`0.125`).
pub fn parse_percent(raw: &str) -> Decimal {
    parse_non_negative(&raw.trim().replacen(',', ".", 1)) / PERCENT_DIVISOR
}

fn parse_non_negative(normalized: &str) -> Decimal {
    if normalized.is_empty() {
        return Decimal::ZERO;
    }

    match Decimal::from_str(normalized) {
        Ok(value) if value.is_sign_negative() => Decimal::ZERO,
        Ok(value) => value.normalize(),
        Err(_) => Decimal::ZERO,
    }
}
