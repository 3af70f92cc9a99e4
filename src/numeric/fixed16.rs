// ============================================================================
// 16.16 Fixed-Point
// Classic fixed-point multiply/divide with bit-exact overflow behaviour
// ============================================================================

use super::errors::{ArithmeticFault, NumericResult};
use std::fmt;
use std::ops::{Div, Mul, Neg};

/// Number of fractional bits.
pub const FRAC_BITS: u32 = 16;

/// Raw value of 1.0 (2^16).
pub const FRAC_UNIT: i32 = 1 << FRAC_BITS;

/// Dividend shift used by the division overflow guard.
///
/// `|a| >> GUARD_SHIFT >= |b|` means `a / b` cannot be represented.
const GUARD_SHIFT: u32 = 14;

/// 5^16, so that `raw / 2^16 == raw * 5^16 / 10^16`.
const DECIMAL_FACTOR: i128 = 152_587_890_625;

/// Signed 16.16 fixed-point number.
///
/// Internally stores `value × 65536` as an i32: the high 16 bits carry the
/// integer part and sign, the low 16 bits the fraction.
///
/// # Overflow policy
/// - [`fixed_mul`](Self::fixed_mul) wraps silently when the product does not
///   fit in 32 bits.
/// - [`fixed_div`](Self::fixed_div) saturates to [`MIN`](Self::MIN) or
///   [`MAX`](Self::MAX) when the quotient would not fit, including when the
///   divisor is zero.
///
/// # Example
/// ```
/// use fixed_diagnostic::numeric::Fixed16;
///
/// let a = Fixed16::from_f64(75.75);
/// let b = Fixed16::from_f64(100.1);
/// let product = a.fixed_mul(b);
/// let quotient = a.fixed_div(b).unwrap();
///
/// assert!((product.to_f64() - 7582.575).abs() < 0.01);
/// assert!((quotient.to_f64() - 0.7567).abs() < 0.001);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Fixed16(i32);

impl Fixed16 {
    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(FRAC_UNIT);

    /// Smallest positive step (1/65536)
    pub const EPSILON: Self = Self(1);

    /// Maximum representable value (just under 32768.0)
    pub const MAX: Self = Self(i32::MAX);

    /// Minimum representable value (-32768.0)
    pub const MIN: Self = Self(i32::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Create from a whole number. Every i16 is exactly representable.
    #[inline]
    pub const fn from_int(value: i16) -> Self {
        Self((value as i32) << FRAC_BITS)
    }

    /// Create from a float, scaling by 65536 and truncating toward zero.
    ///
    /// Values beyond the i32 range clamp to `MIN`/`MAX`; NaN becomes zero.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self((value * FRAC_UNIT as f64) as i32)
    }

    /// Create from a single-precision float, with the same truncation rule.
    ///
    /// The scaling happens in f32, so `from_f32(100.1)` and `from_f64(100.1)`
    /// can differ in the lowest bits.
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self((value * FRAC_UNIT as f32) as i32)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled by 65536).
    #[inline]
    pub const fn raw_value(self) -> i32 {
        self.0
    }

    /// Integer part, rounded toward negative infinity.
    #[inline]
    pub const fn integer_part(self) -> i32 {
        self.0 >> FRAC_BITS
    }

    /// Low 16 bits, in units of 1/65536.
    #[inline]
    pub const fn fractional_part(self) -> u16 {
        (self.0 & (FRAC_UNIT - 1)) as u16
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Convert to f64. Exact: every i32 / 2^16 fits in an f64 mantissa.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / FRAC_UNIT as f64
    }

    /// Exact decimal value of this number.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::from_i128_with_scale(self.0 as i128 * DECIMAL_FACTOR, 16)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Fixed-point multiplication.
    ///
    /// Computes `(a × b) >> 16` on an i64 intermediate and narrows the result
    /// to 32 bits. The shift is arithmetic, so negative products round toward
    /// negative infinity. Out-of-range products wrap without any signal.
    #[inline]
    pub const fn fixed_mul(self, rhs: Self) -> Self {
        Self((((self.0 as i64) * (rhs.0 as i64)) >> FRAC_BITS) as i32)
    }

    /// Fixed-point division with saturation.
    ///
    /// When `|a| >> 14 >= |b|` the quotient cannot fit in 16.16, and the
    /// result saturates: `MIN` if the operand signs differ, `MAX` otherwise.
    /// A zero divisor always takes this path, so it never traps.
    /// Otherwise the dividend is pre-scaled by 2^16 and divided with
    /// truncation toward zero.
    ///
    /// # Errors
    /// Returns `QuotientOutOfRange` if the widened quotient does not fit in
    /// i32. The guard rules this out for every input pair; the check stays so
    /// that a broken guard fails loudly instead of wrapping.
    #[inline]
    pub fn fixed_div(self, rhs: Self) -> NumericResult<Self> {
        if (self.0.unsigned_abs() >> GUARD_SHIFT) >= rhs.0.unsigned_abs() {
            return Ok(if (self.0 ^ rhs.0) < 0 {
                Self::MIN
            } else {
                Self::MAX
            });
        }
        scaled_div(self, rhs)
    }
}

/// Unguarded `(a << 16) / b` with a range check on the narrowing step.
///
/// `rhs` must be non-zero.
#[inline]
fn scaled_div(lhs: Fixed16, rhs: Fixed16) -> NumericResult<Fixed16> {
    let quotient = ((lhs.0 as i64) << FRAC_BITS) / (rhs.0 as i64);

    i32::try_from(quotient).map(Fixed16).map_err(|_| {
        tracing::error!(
            dividend = lhs.0,
            divisor = rhs.0,
            quotient,
            "fixed-point quotient escaped the saturation guard"
        );
        ArithmeticFault::QuotientOutOfRange { quotient }
    })
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Mul for Fixed16 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.fixed_mul(rhs)
    }
}

// Infallible Div for ergonomics (panics on the unreachable range fault - use fixed_div to handle it)
impl Div for Fixed16 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.fixed_div(rhs).expect("Fixed16 quotient out of range")
    }
}

impl Neg for Fixed16 {
    type Output = Self;

    /// Wraps on `MIN`, like the multiply path.
    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.wrapping_neg())
    }
}

impl From<i16> for Fixed16 {
    #[inline]
    fn from(value: i16) -> Self {
        Self::from_int(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Fixed16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed16({}, raw={:#010x})", self, self.0)
    }
}

impl fmt::Display for Fixed16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal().normalize())
    }
}

// ============================================================================
// Tests
// ============================================================================
