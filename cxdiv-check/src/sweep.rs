//! Pairwise division sweep over the representative testcases.

use std::fmt;

use cxdiv_core::{classify, divide, Classification, ComplexValue, FloatComponent};
use serde::Serialize;

use crate::table::expected;

/// One quotient whose class disagrees with the expectation table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Mismatch {
    pub lhs_index: usize,
    pub rhs_index: usize,
    pub lhs: (f64, f64),
    pub rhs: (f64, f64),
    pub quotient: (f64, f64),
    pub lhs_class: Classification,
    pub rhs_class: Classification,
    pub expected: Classification,
    pub actual: Classification,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "testcases[{}] / testcases[{}]: {:?} / {:?} = {:?} is {}, expected {} ({} / {})",
            self.lhs_index,
            self.rhs_index,
            self.lhs,
            self.rhs,
            self.quotient,
            self.actual,
            self.expected,
            self.lhs_class,
            self.rhs_class
        )
    }
}

/// Outcome of dividing every ordered pair of testcases.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SweepReport {
    pub pairs_checked: usize,
    /// Number of pairs exercised per (numerator class, denominator class).
    pub coverage: [[usize; 5]; 5],
    pub mismatches: Vec<Mismatch>,
}

impl SweepReport {
    pub fn is_success(&self) -> bool {
        self.mismatches.is_empty() && self.uncovered_cells().is_empty()
    }

    /// Table cells that no testcase pair reached.
    pub fn uncovered_cells(&self) -> Vec<(Classification, Classification)> {
        let mut cells = Vec::new();
        for lhs in Classification::ALL {
            for rhs in Classification::ALL {
                if self.coverage[lhs.index()][rhs.index()] == 0 {
                    cells.push((lhs, rhs));
                }
            }
        }
        cells
    }
}

/// Divide every ordered pair of `cases` and compare each quotient's class with
/// the expectation table.
pub fn run_sweep<T: FloatComponent>(cases: &[ComplexValue<T>]) -> SweepReport {
    run_sweep_with(cases, divide)
}

/// [`run_sweep`] with a caller-supplied division routine.
pub fn run_sweep_with<T, F>(cases: &[ComplexValue<T>], div: F) -> SweepReport
where
    T: FloatComponent,
    F: Fn(ComplexValue<T>, ComplexValue<T>) -> ComplexValue<T>,
{
    let classes: Vec<Classification> = cases.iter().map(classify).collect();
    let mut report = SweepReport::default();

    for (i, lhs) in cases.iter().enumerate() {
        for (j, rhs) in cases.iter().enumerate() {
            let (lhs_class, rhs_class) = (classes[i], classes[j]);
            let quotient = div(*lhs, *rhs);
            let actual = classify(&quotient);
            let want = expected(lhs_class, rhs_class);

            report.pairs_checked += 1;
            report.coverage[lhs_class.index()][rhs_class.index()] += 1;

            if actual != want {
                let mismatch = Mismatch {
                    lhs_index: i,
                    rhs_index: j,
                    lhs: lhs.to_f64_pair(),
                    rhs: rhs.to_f64_pair(),
                    quotient: quotient.to_f64_pair(),
                    lhs_class,
                    rhs_class,
                    expected: want,
                    actual,
                };
                log::debug!("mismatch: {}", mismatch);
                report.mismatches.push(mismatch);
            }
        }
    }

    report
}

/// The literal regression example: (-4 + 7.5i) / (1.5 + 2.5i) == 1.5 + 2.5i.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ExactQuotient {
    pub expected: (f64, f64),
    pub actual: (f64, f64),
    pub exact: bool,
}

pub fn check_exact_quotient<T: FloatComponent>() -> ExactQuotient {
    let lhs = ComplexValue::<T>::from_f64_pair(-4.0, 7.5);
    let rhs = ComplexValue::<T>::from_f64_pair(1.5, 2.5);
    let want = ComplexValue::<T>::from_f64_pair(1.5, 2.5);
    let quotient = lhs / rhs;
    ExactQuotient {
        expected: want.to_f64_pair(),
        actual: quotient.to_f64_pair(),
        exact: quotient == want,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testcases::{testcases, TESTCASE_COUNT};
    use cxdiv_core::{F64Complex, FloatExp};

    #[test]
    fn sweep_covers_every_cell_without_mismatches() {
        let report = run_sweep(&testcases::<f64>());
        assert_eq!(report.pairs_checked, TESTCASE_COUNT * TESTCASE_COUNT);
        assert!(report.uncovered_cells().is_empty());
        assert!(
            report.mismatches.is_empty(),
            "first mismatch: {}",
            report.mismatches[0]
        );
        assert!(report.is_success());
    }

    #[test]
    fn coverage_sums_to_pairs_checked() {
        let report = run_sweep(&testcases::<f32>());
        let total: usize = report.coverage.iter().flatten().sum();
        assert_eq!(total, report.pairs_checked);
    }

    #[test]
    fn textbook_formula_is_caught() {
        let textbook = |l: F64Complex, r: F64Complex| {
            let denom = r.re * r.re + r.im * r.im;
            F64Complex::new(
                (l.re * r.re + l.im * r.im) / denom,
                (l.im * r.re - l.re * r.im) / denom,
            )
        };
        let report = run_sweep_with(&testcases::<f64>(), textbook);
        assert!(!report.mismatches.is_empty());
        assert!(report
            .mismatches
            .iter()
            .any(|m| m.lhs_class == Classification::NonZero
                && m.rhs_class == Classification::Zero));
    }

    #[test]
    fn small_sweep_reports_uncovered_cells() {
        let cases = [F64Complex::new(1.0, 2.0), F64Complex::new(0.0, 0.0)];
        let report = run_sweep(&cases);
        assert_eq!(report.pairs_checked, 4);
        assert!(report.mismatches.is_empty());
        assert_eq!(report.uncovered_cells().len(), 21);
        assert!(!report.is_success());
    }

    #[test]
    fn exact_quotient_holds_for_every_width() {
        assert!(check_exact_quotient::<f32>().exact);
        assert!(check_exact_quotient::<f64>().exact);
        let ext = check_exact_quotient::<FloatExp>();
        assert!(ext.exact);
        assert_eq!(ext.actual, (1.5, 2.5));
    }

    #[test]
    fn mismatch_display_names_both_operands() {
        let mismatch = Mismatch {
            lhs_index: 3,
            rhs_index: 7,
            lhs: (1.0, 0.0),
            rhs: (0.0, 0.0),
            quotient: (f64::INFINITY, f64::NAN),
            lhs_class: Classification::NonZero,
            rhs_class: Classification::Zero,
            expected: Classification::Inf,
            actual: Classification::NonZeroNaN,
        };
        let text = mismatch.to_string();
        assert!(text.starts_with("testcases[3] / testcases[7]"));
        assert!(text.contains("is non_zero_nan, expected inf"));
    }
}
