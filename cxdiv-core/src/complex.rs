//! Complex value type, generic over the component width.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{classify, Classification, FloatComponent, FloatExp};

/// Complex number `re + im·i`.
///
/// Equality is component-wise IEEE-754 equality: a value with a NaN part is
/// never equal to anything, and `+0 == -0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplexValue<T> {
    pub re: T,
    pub im: T,
}

/// Narrow (single precision) complex number.
pub type F32Complex = ComplexValue<f32>;

/// Standard (double precision) complex number.
pub type F64Complex = ComplexValue<f64>;

/// Extended-range complex number.
pub type FloatExpComplex = ComplexValue<FloatExp>;

impl<T: FloatComponent> ComplexValue<T> {
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Positive zero in both parts.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::ZERO, T::ZERO)
    }

    /// NaN in both parts.
    #[inline]
    pub fn nan() -> Self {
        Self::new(T::NAN, T::NAN)
    }

    /// Construct from f64 real/imaginary components.
    #[inline]
    pub fn from_f64_pair(re: f64, im: f64) -> Self {
        Self::new(T::from_f64(re), T::from_f64(im))
    }

    /// Extract as f64 pair for output and comparisons.
    #[inline]
    pub fn to_f64_pair(&self) -> (f64, f64) {
        (self.re.to_f64(), self.im.to_f64())
    }

    #[inline]
    pub fn classify(&self) -> Classification {
        classify(self)
    }

    /// Replace NaN parts with positive zero.
    #[inline]
    pub(crate) fn without_nan(self) -> Self {
        let drop_nan = |x: T| if x.is_nan() { T::ZERO } else { x };
        Self::new(drop_nan(self.re), drop_nan(self.im))
    }
}

impl<T: FloatComponent> From<(f64, f64)> for ComplexValue<T> {
    fn from((re, im): (f64, f64)) -> Self {
        Self::from_f64_pair(re, im)
    }
}

impl<T: fmt::Display> fmt::Display for ComplexValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.re, self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_component_wise_ieee() {
        assert_eq!(F64Complex::new(0.0, -0.0), F64Complex::new(-0.0, 0.0));
        assert_eq!(F64Complex::new(1.5, 2.5), F64Complex::from_f64_pair(1.5, 2.5));
        assert_ne!(F64Complex::nan(), F64Complex::nan());
        assert_ne!(F64Complex::new(1.0, f64::NAN), F64Complex::new(1.0, f64::NAN));
        assert_ne!(F32Complex::new(1.0, 2.0), F32Complex::new(2.0, 1.0));
    }

    #[test]
    fn f64_pair_conversion_per_width() {
        let z = F32Complex::from_f64_pair(-4.0, 7.5);
        assert_eq!(z.to_f64_pair(), (-4.0, 7.5));
        let z = FloatExpComplex::from((1e-6, -1e6));
        assert_eq!(z.to_f64_pair(), (1e-6, -1e6));
    }

    #[test]
    fn without_nan_keeps_other_parts() {
        let z = F64Complex::new(f64::NAN, f64::NEG_INFINITY).without_nan();
        assert_eq!(z, F64Complex::new(0.0, f64::NEG_INFINITY));
        let z = F64Complex::new(-0.0, 3.0).without_nan();
        assert!(z.re.is_sign_negative());
    }

    #[test]
    fn display_formats_both_parts() {
        assert_eq!(F64Complex::new(1.5, -2.0).to_string(), "(1.5, -2)");
        assert_eq!(FloatExpComplex::from_f64_pair(1.0, 0.0).to_string(), "(0.5p1, 0)");
    }

    #[test]
    fn serde_round_trip_finite() {
        let z = F64Complex::new(1.5, -2.5);
        let json = serde_json::to_string(&z).unwrap();
        assert_eq!(json, r#"{"re":1.5,"im":-2.5}"#);
        let back: F64Complex = serde_json::from_str(&json).unwrap();
        assert_eq!(back, z);
    }
}
