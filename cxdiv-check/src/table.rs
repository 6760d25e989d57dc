//! Expected classification of a quotient, by classification of its operands.

use cxdiv_core::Classification;

const Z: Classification = Classification::Zero;
const NZ: Classification = Classification::NonZero;
const INF: Classification = Classification::Inf;
const NAN: Classification = Classification::NaN;

/// Rows are the numerator class, columns the denominator class, both in
/// [`Classification::ALL`] order.
pub const EXPECTED_QUOTIENT_CLASSES: [[Classification; 5]; 5] = [
    //  zero  non_zero  inf   NaN  non_zero_nan
    [NAN, Z, Z, NAN, NAN],        // zero
    [INF, NZ, Z, NAN, NAN],       // non_zero
    [INF, INF, NAN, NAN, NAN],    // inf
    [NAN, NAN, NAN, NAN, NAN],    // NaN
    [INF, NAN, NAN, NAN, NAN],    // non_zero_nan
];

/// Class that `lhs / rhs` must have.
#[inline]
pub const fn expected(lhs: Classification, rhs: Classification) -> Classification {
    EXPECTED_QUOTIENT_CLASSES[lhs.index()][rhs.index()]
}
