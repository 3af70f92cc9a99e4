// ============================================================================
// Numeric Errors
// Error types for 16.16 fixed-point arithmetic
// ============================================================================

use std::fmt;

/// Faults raised by fixed-point arithmetic.
///
/// Multiplication never faults. Division only faults when the widened
/// quotient does not fit back into 32 bits after the saturation guard
/// has already let the operands through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticFault {
    /// Widened quotient fell outside the i32 range
    QuotientOutOfRange {
        /// The 64-bit quotient that could not be narrowed
        quotient: i64,
    },
}

impl fmt::Display for ArithmeticFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticFault::QuotientOutOfRange { quotient } => write!(
                f,
                "fixed-point division overflow: quotient {} outside 32-bit range",
                quotient
            ),
        }
    }
}

impl std::error::Error for ArithmeticFault {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, ArithmeticFault>;
