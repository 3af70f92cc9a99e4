// ============================================================================
// Diagnostic Errors
// ============================================================================

use crate::numeric::ArithmeticFault;
use std::fmt;

/// Errors raised while configuring or running the timing diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticError {
    /// Iteration count must be positive
    ZeroIterations,
    /// Worker thread count must be positive
    ZeroThreads,
    /// Operands must be finite floats
    NonFiniteOperand(f32),
    /// Native integer kernel was given a zero divisor
    DivisionByZero,
    /// The fixed-point core reported a fault
    Arithmetic(ArithmeticFault),
    /// A parallel worker panicked
    WorkerPanicked,
}

impl fmt::Display for DiagnosticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticError::ZeroIterations => write!(f, "iteration count must be positive"),
            DiagnosticError::ZeroThreads => write!(f, "thread count must be positive"),
            DiagnosticError::NonFiniteOperand(value) => {
                write!(f, "operand {} is not a finite number", value)
            },
            DiagnosticError::DivisionByZero => write!(f, "native fixed-point division by zero"),
            DiagnosticError::Arithmetic(fault) => write!(f, "arithmetic fault: {}", fault),
            DiagnosticError::WorkerPanicked => write!(f, "diagnostic worker thread panicked"),
        }
    }
}

impl std::error::Error for DiagnosticError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DiagnosticError::Arithmetic(fault) => Some(fault),
            _ => None,
        }
    }
}

impl From<ArithmeticFault> for DiagnosticError {
    fn from(fault: ArithmeticFault) -> Self {
        DiagnosticError::Arithmetic(fault)
    }
}
