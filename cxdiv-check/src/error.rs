//! Verification error types.

use cxdiv_core::Classification;
use thiserror::Error;

use crate::sweep::Mismatch;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Unknown precision: {0}")]
    UnknownPrecision(String),

    #[error("[{precision}] {count} quotient(s) disagree with the expectation table, first: {first}")]
    TableMismatch {
        precision: &'static str,
        count: usize,
        first: Box<Mismatch>,
    },

    #[error("[{precision}] table cells never exercised: {cells:?}")]
    UncoveredCells {
        precision: &'static str,
        cells: Vec<(Classification, Classification)>,
    },

    #[error("[{precision}] (-4 + 7.5i) / (1.5 + 2.5i) = {actual:?}, expected {expected:?}")]
    InexactQuotient {
        precision: &'static str,
        expected: (f64, f64),
        actual: (f64, f64),
    },
}
