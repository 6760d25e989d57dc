//! Complex division with Annex G style special-value handling.
//!
//! Plain IEEE-754 arithmetic on the textbook formula gets most special cases
//! right on its own, but `0 · ∞` terms turn infinite or zero quotients into
//! NaN. The divider therefore dispatches on the classes of both operands and
//! only runs the scaled formula when every input is finite.

use std::ops::{Div, DivAssign};

use crate::{classify, Classification as C, ComplexValue, FloatComponent};

/// Divide `lhs` by `rhs`.
///
/// Total over every combination of zero, finite, infinite and NaN parts; the
/// class of the quotient is fixed by the classes of the operands:
///
/// | lhs \ rhs      | zero | non_zero | inf  | NaN | non_zero_nan |
/// |----------------|------|----------|------|-----|--------------|
/// | zero           | NaN  | zero     | zero | NaN | NaN          |
/// | non_zero       | inf  | non_zero | zero | NaN | NaN          |
/// | inf            | inf  | inf      | NaN  | NaN | NaN          |
/// | NaN            | NaN  | NaN      | NaN  | NaN | NaN          |
/// | non_zero_nan   | inf  | NaN      | NaN  | NaN | NaN          |
pub fn divide<T: FloatComponent>(lhs: ComplexValue<T>, rhs: ComplexValue<T>) -> ComplexValue<T> {
    match (classify(&lhs), classify(&rhs)) {
        (C::NaN, _) | (_, C::NaN) | (_, C::NonZeroNaN) => ComplexValue::nan(),
        (C::Zero, C::Zero) | (C::Inf, C::Inf) => ComplexValue::nan(),
        (C::NonZeroNaN, C::Zero) => over_zero(lhs.without_nan(), rhs),
        (C::NonZeroNaN, _) => ComplexValue::nan(),
        (C::NonZero | C::Inf, C::Zero) => over_zero(lhs, rhs),
        (C::Inf, C::NonZero) => infinite_over_finite(lhs, rhs),
        (C::Zero | C::NonZero, C::Inf) => finite_over_infinite(lhs, rhs),
        (C::Zero | C::NonZero, C::NonZero) => scaled_quotient(lhs, rhs),
    }
}

/// Quotient of two finite values with a non-zero denominator.
///
/// The denominator is scaled by the power of two of its larger part so that
/// `c² + d²` can neither overflow nor underflow; scaling is exact and undone
/// on the way out. If the numerator products overflow, the numerator is scaled
/// the same way and the quotient recomputed, so only quotients whose true
/// value leaves the range become infinite.
fn scaled_quotient<T: FloatComponent>(
    lhs: ComplexValue<T>,
    rhs: ComplexValue<T>,
) -> ComplexValue<T> {
    let k = max_exponent(rhs);
    let c = rhs.re.scale_by(-k);
    let d = rhs.im.scale_by(-k);
    let denom = c * c + d * d;
    let quotient = |a: T, b: T| ((a * c + b * d) / denom, (b * c - a * d) / denom);

    let (re, im) = quotient(lhs.re, lhs.im);
    if re.is_finite() && im.is_finite() {
        return ComplexValue::new(re.scale_by(-k), im.scale_by(-k));
    }

    // |a|, |b| < 2 after this, so nothing below can overflow.
    let m = max_exponent(lhs);
    let (re, im) = quotient(lhs.re.scale_by(-m), lhs.im.scale_by(-m));
    ComplexValue::new(re.scale_by(m - k), im.scale_by(m - k))
}

/// Exponent of the larger part of a finite, non-zero value.
#[inline]
fn max_exponent<T: FloatComponent>(z: ComplexValue<T>) -> i64 {
    if z.re.is_zero() {
        z.im.exponent()
    } else if z.im.is_zero() {
        z.re.exponent()
    } else {
        z.re.exponent().max(z.im.exponent())
    }
}

/// Non-zero numerator over a signed zero denominator.
///
/// Non-zero parts become infinities signed by the part and the denominator's
/// real zero; zero parts stay (signed) zeros.
fn over_zero<T: FloatComponent>(lhs: ComplexValue<T>, rhs: ComplexValue<T>) -> ComplexValue<T> {
    let sign = rhs.re;
    let inf = T::INFINITY.copysign(sign);
    let part = |x: T| if x.is_zero() { x * sign } else { inf * x };
    ComplexValue::new(part(lhs.re), part(lhs.im))
}

/// Infinite numerator over a finite non-zero denominator.
fn infinite_over_finite<T: FloatComponent>(
    lhs: ComplexValue<T>,
    rhs: ComplexValue<T>,
) -> ComplexValue<T> {
    let a = boxed(lhs.re);
    let b = boxed(lhs.im);
    let (c, d) = (rhs.re, rhs.im);
    let infinite = |x: T| if x.is_zero() { x } else { T::INFINITY.copysign(x) };
    ComplexValue::new(infinite(a * c + b * d), infinite(b * c - a * d))
}

/// Finite numerator over an infinite denominator.
fn finite_over_infinite<T: FloatComponent>(
    lhs: ComplexValue<T>,
    rhs: ComplexValue<T>,
) -> ComplexValue<T> {
    let (a, b) = (lhs.re, lhs.im);
    let c = boxed(rhs.re);
    let d = boxed(rhs.im);
    // Terms are finite or overflow to ±inf; never NaN.
    let zero = |x: T| T::ZERO.copysign(x);
    ComplexValue::new(zero(a * c + b * d), zero(b * c - a * d))
}

/// ±1 for infinite parts, ±0 otherwise.
#[inline]
fn boxed<T: FloatComponent>(x: T) -> T {
    if x.is_infinite() {
        T::ONE.copysign(x)
    } else {
        T::ZERO.copysign(x)
    }
}

impl<T: FloatComponent> Div for ComplexValue<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        divide(self, rhs)
    }
}

impl<T: FloatComponent> Div<&ComplexValue<T>> for &ComplexValue<T> {
    type Output = ComplexValue<T>;

    #[inline]
    fn div(self, rhs: &ComplexValue<T>) -> ComplexValue<T> {
        divide(*self, *rhs)
    }
}

impl<T: FloatComponent> DivAssign for ComplexValue<T> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = divide(*self, rhs);
    }
}
