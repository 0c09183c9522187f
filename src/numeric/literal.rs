// ============================================================================
// Decimal Literals
// Strict parsing of user-entered decimal strings
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Maximum number of significant digits `Decimal` holds without rounding.
pub const MAX_SIGNIFICANT_DIGITS: usize = 28;

/// Returns true if `input` is a plain decimal literal: an optional leading
/// minus, one or more digits, an optional dot, then zero or more digits.
///
/// `"12"`, `"-0.5"` and `"7."` are accepted. `".5"`, `"1e3"`, `"1,000"`,
/// `"1_000"`, `"+1"` and anything with whitespace are not.
pub fn is_decimal_literal(input: &str) -> bool {
    let body = input.strip_prefix('-').unwrap_or(input);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (body, ""),
    };

    !int_part.is_empty()
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a plain decimal literal into an exact `Decimal`.
///
/// Literals carrying more significant digits (or fractional digits) than
/// `Decimal` can hold are reported as `OutOfRange` instead of being rounded.
///
/// # Errors
/// - `InvalidLiteral` if the string fails [`is_decimal_literal`]
/// - `OutOfRange` if the value cannot be represented exactly
pub fn parse_decimal(input: &str) -> NumericResult<Decimal> {
    if !is_decimal_literal(input) {
        return Err(NumericError::InvalidLiteral(input.to_string()));
    }

    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    // Trailing fractional zeros and leading integer zeros carry no digits
    let int_part = match int_part.trim_start_matches('0') {
        "" => "0",
        digits => digits,
    };
    let exact_frac = frac_part.trim_end_matches('0');

    let scale = exact_frac.len();
    let significant = int_part
        .bytes()
        .chain(exact_frac.bytes())
        .skip_while(|b| *b == b'0')
        .count();

    if scale > MAX_SIGNIFICANT_DIGITS || significant > MAX_SIGNIFICANT_DIGITS {
        return Err(NumericError::OutOfRange(input.to_string()));
    }

    // Keep as many of the written zeros as fit, so "0.50" keeps scale 2
    let padding = (frac_part.len() - scale).min(MAX_SIGNIFICANT_DIGITS - scale.max(significant));
    let frac_part = &frac_part[..scale + padding];

    let mut literal = String::with_capacity(int_part.len() + frac_part.len() + 2);
    if negative {
        literal.push('-');
    }
    literal.push_str(int_part);
    if !frac_part.is_empty() {
        literal.push('.');
        literal.push_str(frac_part);
    }

    Decimal::from_str(&literal).map_err(|_| NumericError::OutOfRange(input.to_string()))
}

/// Exact `price × amount`.
///
/// # Errors
/// Returns `Overflow` if the product does not fit in a `Decimal`.
pub fn checked_total(price: Decimal, amount: Decimal) -> NumericResult<Decimal> {
    price.checked_mul(amount).ok_or(NumericError::Overflow)
}

/// Exact `numerator / denominator`.
///
/// # Errors
/// Returns `DivisionByZero` for a zero denominator and `Overflow` if the
/// quotient is out of range.
pub fn checked_ratio(numerator: Decimal, denominator: Decimal) -> NumericResult<Decimal> {
    if denominator.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    numerator
        .checked_div(denominator)
        .ok_or(NumericError::Overflow)
}
