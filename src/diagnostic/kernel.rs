// ============================================================================
// Arithmetic Kernels
// One multiply + one divide per evaluation, for each arithmetic strategy
// ============================================================================

use super::errors::DiagnosticError;
use crate::numeric::{Fixed16, FRAC_BITS};

/// Product and quotient of one evaluation, converted for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub product: f64,
    pub quotient: f64,
}

/// A strategy for multiplying and dividing a fixed operand pair.
///
/// `evaluate` is the timed hot path and returns results in the kernel's own
/// representation; `sample` converts one result outside the timed region.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so the parallel runner can share a
/// single kernel across worker threads.
pub trait ArithmeticKernel: Send + Sync {
    /// Native (product, quotient) pair
    type Output: Copy;

    /// Perform one multiplication and one division.
    fn evaluate(&self) -> Result<Self::Output, DiagnosticError>;

    /// Convert an evaluation result to floats.
    fn sample(&self, output: Self::Output) -> Sample;

    /// Name used in logs and reports.
    fn name(&self) -> &'static str;
}

// ============================================================================
// Native Float
// ============================================================================

/// Plain `f32` multiply and divide.
#[derive(Debug, Clone, Copy)]
pub struct FloatKernel {
    x: f32,
    y: f32,
}

impl FloatKernel {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl ArithmeticKernel for FloatKernel {
    type Output = (f32, f32);

    #[inline]
    fn evaluate(&self) -> Result<Self::Output, DiagnosticError> {
        Ok((self.x * self.y, self.x / self.y))
    }

    fn sample(&self, (product, quotient): Self::Output) -> Sample {
        Sample {
            product: product as f64,
            quotient: quotient as f64,
        }
    }

    fn name(&self) -> &'static str {
        "floating-point"
    }
}

// ============================================================================
// Native Fixed (inline integer math)
// ============================================================================

/// 16.16 arithmetic written inline on raw `i32`s, without the saturation
/// guard. Narrowing wraps in both directions.
#[derive(Debug, Clone, Copy)]
pub struct NativeFixedKernel {
    x: i32,
    y: i32,
}

impl NativeFixedKernel {
    /// Build from float operands, truncating like `Fixed16::from_f32`.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: Fixed16::from_f32(x).raw_value(),
            y: Fixed16::from_f32(y).raw_value(),
        }
    }
}

impl ArithmeticKernel for NativeFixedKernel {
    type Output = (i32, i32);

    #[inline]
    fn evaluate(&self) -> Result<Self::Output, DiagnosticError> {
        let product = ((self.x as i64 * self.y as i64) >> FRAC_BITS) as i32;
        let quotient = ((self.x as i64) << FRAC_BITS)
            .checked_div(self.y as i64)
            .ok_or(DiagnosticError::DivisionByZero)? as i32;
        Ok((product, quotient))
    }

    fn sample(&self, (product, quotient): Self::Output) -> Sample {
        Sample {
            product: Fixed16::from_raw(product).to_f64(),
            quotient: Fixed16::from_raw(quotient).to_f64(),
        }
    }

    fn name(&self) -> &'static str {
        "fixed-point (native)"
    }
}

// ============================================================================
// Fixed16 (guarded core)
// ============================================================================

/// The `Fixed16` multiply and saturating divide.
#[derive(Debug, Clone, Copy)]
pub struct Fixed16Kernel {
    x: Fixed16,
    y: Fixed16,
}

impl Fixed16Kernel {
    pub fn new(x: f32, y: f32) -> Self {
        Self::from_fixed(Fixed16::from_f32(x), Fixed16::from_f32(y))
    }

    pub fn from_fixed(x: Fixed16, y: Fixed16) -> Self {
        Self { x, y }
    }
}

impl ArithmeticKernel for Fixed16Kernel {
    type Output = (Fixed16, Fixed16);

    #[inline]
    fn evaluate(&self) -> Result<Self::Output, DiagnosticError> {
        Ok((self.x.fixed_mul(self.y), self.x.fixed_div(self.y)?))
    }

    fn sample(&self, (product, quotient): Self::Output) -> Sample {
        Sample {
            product: product.to_f64(),
            quotient: quotient.to_f64(),
        }
    }

    fn name(&self) -> &'static str {
        "fixed-point (Fixed16)"
    }
}
