// ============================================================================
// Diagnostic Module
// Timing harness comparing float, inline fixed and Fixed16 arithmetic
// ============================================================================
//
// Each kernel performs one multiplication and one division per iteration on
// a fixed operand pair. The runner times a loop of those evaluations on one
// thread or on a set of scoped worker threads, and captures one result as a
// sample for display.

mod config;
mod errors;
mod kernel;
mod runner;

pub use config::{DiagnosticConfig, DEFAULT_ITERATIONS};
pub use errors::DiagnosticError;
pub use kernel::{ArithmeticKernel, Fixed16Kernel, FloatKernel, NativeFixedKernel, Sample};
pub use runner::{DiagnosticReport, DiagnosticRunner, KernelTiming, ParallelTiming};
