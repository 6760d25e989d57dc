//! Floating-point component abstraction.
//!
//! Provides a trait over f32, f64 and FloatExp components, enabling a single
//! generic classifier and divider with identical behaviour at every width.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::ComponentKind;

/// One real or imaginary part of a complex value.
///
/// Implementations must follow IEEE-754 semantics for zeros, infinities and
/// NaN in their arithmetic operators.
pub trait FloatComponent:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Positive zero.
    const ZERO: Self;
    /// One.
    const ONE: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// A quiet NaN.
    const NAN: Self;

    fn is_nan(self) -> bool;

    fn is_infinite(self) -> bool;

    fn is_sign_negative(self) -> bool;

    /// Magnitude of `self` with the sign of `sign`.
    fn copysign(self, sign: Self) -> Self;

    /// Unbiased binary exponent, floor(log2(|x|)).
    ///
    /// Only meaningful for finite non-zero values.
    fn exponent(self) -> i64;

    /// Multiply by 2^n without rounding (unless the result leaves the range).
    fn scale_by(self, n: i64) -> Self;

    /// Construct from an f64 value (rounding to the target width).
    fn from_f64(val: f64) -> Self;

    /// Convert to f64 for output and comparisons.
    fn to_f64(self) -> f64;

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    #[inline]
    fn is_finite(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Special-value category of this component.
    #[inline]
    fn kind(self) -> ComponentKind {
        if self.is_nan() {
            ComponentKind::NaN
        } else if self.is_infinite() {
            ComponentKind::Infinite
        } else if self.is_zero() {
            ComponentKind::Zero
        } else {
            ComponentKind::Finite
        }
    }
}

/// Clamp an exponent shift into the range accepted by libm's scalbn.
#[inline]
fn clamp_shift(n: i64) -> i32 {
    n.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl FloatComponent for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const INFINITY: Self = f64::INFINITY;
    const NAN: Self = f64::NAN;

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    #[inline]
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }

    #[inline]
    fn is_sign_negative(self) -> bool {
        f64::is_sign_negative(self)
    }

    #[inline]
    fn copysign(self, sign: Self) -> Self {
        libm::copysign(self, sign)
    }

    #[inline]
    fn exponent(self) -> i64 {
        libm::ilogb(self) as i64
    }

    #[inline]
    fn scale_by(self, n: i64) -> Self {
        libm::scalbn(self, clamp_shift(n))
    }

    #[inline]
    fn from_f64(val: f64) -> Self {
        val
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

impl FloatComponent for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const INFINITY: Self = f32::INFINITY;
    const NAN: Self = f32::NAN;

    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    #[inline]
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }

    #[inline]
    fn is_sign_negative(self) -> bool {
        f32::is_sign_negative(self)
    }

    #[inline]
    fn copysign(self, sign: Self) -> Self {
        libm::copysignf(self, sign)
    }

    #[inline]
    fn exponent(self) -> i64 {
        libm::ilogbf(self) as i64
    }

    #[inline]
    fn scale_by(self, n: i64) -> Self {
        libm::scalbnf(self, clamp_shift(n))
    }

    #[inline]
    fn from_f64(val: f64) -> Self {
        val as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}
