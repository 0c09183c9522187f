// ============================================================================
// Numeric Errors
// Error types for decimal parsing and arithmetic
// ============================================================================

use thiserror::Error;

/// Errors that can occur while parsing or combining decimal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Input does not match the plain decimal literal pattern
    #[error("invalid decimal literal: {0:?}")]
    InvalidLiteral(String),
    /// Literal is well formed but does not fit in 28 significant digits
    #[error("decimal literal out of range: {0:?}")]
    OutOfRange(String),
    /// Result exceeded the representable range
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,
    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
