//! Extended-range floating point.
//!
//! FloatExp = f64 mantissa + i64 exponent, providing unlimited range
//! with 53-bit precision. Zeros, infinities and NaN live in the mantissa
//! so IEEE-754 special-value rules carry over unchanged.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::FloatComponent;

/// Extended-range floating point: f64 mantissa + i64 exponent.
/// Value = mantissa × 2^exp.
/// Mantissa normalized to [0.5, 1.0) for finite non-zero values; for zero,
/// infinity and NaN the mantissa holds the special value and exp is 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FloatExp {
    mantissa: f64,
    exp: i64,
}

impl FloatExp {
    /// Positive zero.
    pub const ZERO: Self = Self {
        mantissa: 0.0,
        exp: 0,
    };

    /// One (0.5 × 2^1).
    pub const ONE: Self = Self {
        mantissa: 0.5,
        exp: 1,
    };

    pub const INFINITY: Self = Self {
        mantissa: f64::INFINITY,
        exp: 0,
    };

    pub const NEG_INFINITY: Self = Self {
        mantissa: f64::NEG_INFINITY,
        exp: 0,
    };

    pub const NAN: Self = Self {
        mantissa: f64::NAN,
        exp: 0,
    };

    /// Build from an arbitrary mantissa and exponent, renormalizing.
    pub fn new(mantissa: f64, exp: i64) -> Self {
        if mantissa == 0.0 || !mantissa.is_finite() {
            return Self { mantissa, exp: 0 };
        }
        // frexp returns (mantissa, exponent) where mantissa is in [0.5, 1.0)
        let (m, e) = libm::frexp(mantissa);
        Self {
            mantissa: m,
            exp: exp.saturating_add(e as i64),
        }
    }

    /// Create from f64 (normalizes automatically).
    pub fn from_f64(val: f64) -> Self {
        Self::new(val, 0)
    }

    /// Convert to f64, saturating to a signed infinity or signed zero when the
    /// exponent is outside the f64 range.
    pub fn to_f64(&self) -> f64 {
        if !self.is_finite_non_zero() {
            return self.mantissa;
        }
        if self.exp > 1024 {
            return libm::copysign(f64::INFINITY, self.mantissa);
        }
        if self.exp < -1075 {
            return libm::copysign(0.0, self.mantissa);
        }
        libm::ldexp(self.mantissa, self.exp as i32)
    }

    /// Normalized mantissa (or the special value it carries).
    pub fn mantissa(&self) -> f64 {
        self.mantissa
    }

    /// Binary exponent of the normalized mantissa.
    pub fn exp(&self) -> i64 {
        self.exp
    }

    /// Check if zero (either sign).
    pub fn is_zero(&self) -> bool {
        self.mantissa == 0.0
    }

    pub fn is_nan(&self) -> bool {
        self.mantissa.is_nan()
    }

    pub fn is_infinite(&self) -> bool {
        self.mantissa.is_infinite()
    }

    #[inline]
    fn is_finite_non_zero(&self) -> bool {
        self.mantissa != 0.0 && self.mantissa.is_finite()
    }
}

impl Neg for FloatExp {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            mantissa: -self.mantissa,
            exp: self.exp,
        }
    }
}

impl Add for FloatExp {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match (self.is_finite_non_zero(), other.is_finite_non_zero()) {
            (true, true) => {
                let (hi, lo) = if self.exp >= other.exp {
                    (self, other)
                } else {
                    (other, self)
                };
                let shift = lo.exp - hi.exp;
                // lo is far below half an ulp of hi
                if shift < -1100 {
                    return hi;
                }
                Self::new(hi.mantissa + libm::ldexp(lo.mantissa, shift as i32), hi.exp)
            }
            // x + (±0) == x
            (true, false) if other.is_zero() => self,
            (false, true) if self.is_zero() => other,
            // Zeros, infinities and NaN only: exponents are irrelevant.
            _ => Self::new(self.mantissa + other.mantissa, 0),
        }
    }
}

impl Sub for FloatExp {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl Mul for FloatExp {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        if self.is_finite_non_zero() && other.is_finite_non_zero() {
            Self::new(
                self.mantissa * other.mantissa,
                self.exp.saturating_add(other.exp),
            )
        } else {
            // Result is zero, infinite or NaN; the f64 product has the right sign.
            Self::new(self.mantissa * other.mantissa, 0)
        }
    }
}

impl Div for FloatExp {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        if self.is_finite_non_zero() && other.is_finite_non_zero() {
            Self::new(
                self.mantissa / other.mantissa,
                self.exp.saturating_sub(other.exp),
            )
        } else {
            Self::new(self.mantissa / other.mantissa, 0)
        }
    }
}

impl From<f64> for FloatExp {
    fn from(val: f64) -> Self {
        Self::from_f64(val)
    }
}

impl fmt::Display for FloatExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finite_non_zero() {
            write!(f, "{}p{}", self.mantissa, self.exp)
        } else {
            write!(f, "{}", self.mantissa)
        }
    }
}

impl FloatComponent for FloatExp {
    const ZERO: Self = FloatExp::ZERO;
    const ONE: Self = FloatExp::ONE;
    const INFINITY: Self = FloatExp::INFINITY;
    const NAN: Self = FloatExp::NAN;

    #[inline]
    fn is_nan(self) -> bool {
        FloatExp::is_nan(&self)
    }

    #[inline]
    fn is_infinite(self) -> bool {
        FloatExp::is_infinite(&self)
    }

    #[inline]
    fn is_sign_negative(self) -> bool {
        self.mantissa.is_sign_negative()
    }

    #[inline]
    fn copysign(self, sign: Self) -> Self {
        Self {
            mantissa: libm::copysign(self.mantissa, sign.mantissa),
            exp: self.exp,
        }
    }

    #[inline]
    fn exponent(self) -> i64 {
        // mantissa in [0.5, 1.0) => floor(log2(|x|)) = exp - 1
        self.exp - 1
    }

    #[inline]
    fn scale_by(self, n: i64) -> Self {
        if self.is_finite_non_zero() {
            Self {
                mantissa: self.mantissa,
                exp: self.exp.saturating_add(n),
            }
        } else {
            self
        }
    }

    #[inline]
    fn from_f64(val: f64) -> Self {
        FloatExp::from_f64(val)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        FloatExp::to_f64(&self)
    }

    #[inline]
    fn is_zero(self) -> bool {
        FloatExp::is_zero(&self)
    }
}
