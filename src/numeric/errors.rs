// ============================================================================
// Numeric Errors
// Error types for fixed-point limb arithmetic
// ============================================================================

use std::fmt;

/// Errors reported by the checked fixed-point operations.
///
/// The unchecked operator forms never report these; they keep wrapping
/// semantics and treat a violated precondition as undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Attempted division by zero
    DivisionByZero,
    /// Divisor has no useful fractional reciprocal (x < 2)
    InvalidDivisor,
    /// Derived divisor (e.g. x * x) does not fit in a single limb
    DivisorOverflow,
    /// Subtraction would produce a negative value
    Underflow,
    /// Operands have different limb counts
    PrecisionMismatch,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidDivisor => {
                write!(f, "invalid divisor: reciprocal has no fractional part")
            },
            NumericError::DivisorOverflow => {
                write!(f, "divisor overflow: value does not fit in a single limb")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: subtrahend exceeds minuend")
            },
            NumericError::PrecisionMismatch => {
                write!(f, "precision mismatch: operands have different limb counts")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
