// ============================================================================
// Fixed Diagnostic Library
// 16.16 fixed-point arithmetic with classic overflow semantics
// ============================================================================

//! # Fixed Diagnostic
//!
//! A 16.16 fixed-point number type whose multiply and divide reproduce the
//! integer behaviour of the fixed-point routines used by early real-time
//! renderers, plus a small harness that times them against native arithmetic.
//!
//! ## Features
//!
//! - **Bit-exact multiply**: `(a × b) >> 16` on an i64 intermediate, wrapping
//!   silently on overflow
//! - **Saturating divide**: a pre-flight guard clamps unrepresentable
//!   quotients (including division by zero) to the i32 bounds
//! - **Timing diagnostic** for float, inline fixed and `Fixed16` kernels,
//!   serial or across scoped worker threads
//!
//! ## Example
//!
//! ```rust
//! use fixed_diagnostic::prelude::*;
//!
//! let a = Fixed16::from_f64(75.75);
//! let b = Fixed16::from_f64(100.1);
//!
//! assert!((a.fixed_mul(b).to_f64() - 7582.575).abs() < 0.01);
//! assert!((a.fixed_div(b).unwrap().to_f64() - 0.7567).abs() < 0.001);
//!
//! // Division by zero saturates instead of trapping
//! assert_eq!(a.fixed_div(Fixed16::ZERO).unwrap(), Fixed16::MAX);
//!
//! let runner = DiagnosticRunner::new(DiagnosticConfig::quick()).unwrap();
//! let report = runner.run_all().unwrap();
//! println!("{}", report);
//! ```

pub mod diagnostic;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::diagnostic::{
        ArithmeticKernel, DiagnosticConfig, DiagnosticError, DiagnosticReport, DiagnosticRunner,
        Fixed16Kernel, FloatKernel, KernelTiming, NativeFixedKernel, ParallelTiming, Sample,
    };
    pub use crate::numeric::{ArithmeticFault, Fixed16, NumericResult, FRAC_BITS, FRAC_UNIT};
}
