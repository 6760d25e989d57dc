//! Representative complex values for the division sweep.
//!
//! Sixteen finite values with widely separated magnitudes, followed by the
//! full grid over special and small components. Every classification appears
//! several times, with both signs of zero and infinity.

use cxdiv_core::{ComplexValue, FloatComponent};

const INF: f64 = f64::INFINITY;
const NAN: f64 = f64::NAN;

/// Finite pairs mixing tiny and large magnitudes in every quadrant.
pub const MAGNITUDE_CASES: [(f64, f64); 16] = [
    (1e-6, 1e-6),
    (-1e-6, 1e-6),
    (-1e-6, -1e-6),
    (1e-6, -1e-6),
    (1e6, 1e-6),
    (-1e6, 1e-6),
    (-1e6, -1e-6),
    (1e6, -1e-6),
    (1e-6, 1e6),
    (-1e-6, 1e6),
    (-1e-6, -1e6),
    (1e-6, -1e6),
    (1e6, 1e6),
    (-1e6, 1e6),
    (-1e6, -1e6),
    (1e6, -1e6),
];

/// Component values combined pairwise into the special-value grid.
pub const GRID_COMPONENTS: [f64; 11] = [
    NAN, -INF, -2.0, -1.0, -0.5, -0.0, 0.0, 0.5, 1.0, 2.0, INF,
];

/// Number of representative testcases.
pub const TESTCASE_COUNT: usize =
    MAGNITUDE_CASES.len() + GRID_COMPONENTS.len() * GRID_COMPONENTS.len();

/// The testcases as f64 pairs, in sweep order.
pub fn representative_pairs() -> impl Iterator<Item = (f64, f64)> {
    let grid = GRID_COMPONENTS
        .into_iter()
        .flat_map(|re| GRID_COMPONENTS.into_iter().map(move |im| (re, im)));
    MAGNITUDE_CASES.into_iter().chain(grid)
}

/// The testcases at component width `T`.
pub fn testcases<T: FloatComponent>() -> Vec<ComplexValue<T>> {
    representative_pairs()
        .map(|(re, im)| ComplexValue::from_f64_pair(re, im))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cxdiv_core::{classify, Classification, FloatExp};

    #[test]
    fn count_matches_constant() {
        assert_eq!(representative_pairs().count(), TESTCASE_COUNT);
        assert_eq!(TESTCASE_COUNT, 137);
        assert_eq!(testcases::<f32>().len(), TESTCASE_COUNT);
    }

    #[test]
    fn every_class_is_represented() {
        let cases = testcases::<f64>();
        for class in Classification::ALL {
            let count = cases.iter().filter(|z| classify(*z) == class).count();
            assert!(count >= 4, "only {} testcases classify as {}", count, class);
        }
    }

    #[test]
    fn classes_agree_across_widths() {
        let narrow = testcases::<f32>();
        let standard = testcases::<f64>();
        let extended = testcases::<FloatExp>();
        for i in 0..TESTCASE_COUNT {
            let class = classify(&standard[i]);
            assert_eq!(classify(&narrow[i]), class, "testcase {}", i);
            assert_eq!(classify(&extended[i]), class, "testcase {}", i);
        }
    }

    #[test]
    fn grid_contains_both_signed_zeros() {
        let zeros: Vec<_> = representative_pairs()
            .filter(|&(re, im)| re == 0.0 && im == 0.0)
            .collect();
        assert_eq!(zeros.len(), 4);
        assert!(zeros
            .iter()
            .any(|(re, im)| re.is_sign_negative() && im.is_sign_negative()));
    }
}
