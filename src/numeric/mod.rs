// ============================================================================
// Numeric Module
// 16.16 fixed-point arithmetic with classic overflow semantics
// ============================================================================
//
// This module provides:
// - Fixed16: signed 16.16 fixed-point value (i32 storage)
// - ArithmeticFault: the single division fault
//
// Design principles:
// - Wide intermediates in i64, narrowed before storage
// - Multiply wraps silently, divide saturates
// - Pure, allocation-free, safe to call from any thread

mod errors;
mod fixed16;

pub use errors::{ArithmeticFault, NumericResult};
pub use fixed16::{Fixed16, FRAC_BITS, FRAC_UNIT};
