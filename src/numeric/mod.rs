// ============================================================================
// Numeric Module
// Exact decimal handling for user-entered prices and amounts
// ============================================================================
//
// This module provides:
// - Strict decimal literal recognition and parsing
// - Checked price × amount and ratio arithmetic on rust_decimal
// - NumericError: Error types for parsing and arithmetic
//
// No floating-point values ever reach a comparison.

mod errors;
mod literal;

pub use errors::{NumericError, NumericResult};
pub use literal::{
    checked_ratio, checked_total, is_decimal_literal, parse_decimal, MAX_SIGNIFICANT_DIGITS,
};
