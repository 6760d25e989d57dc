//! Verification harness for `cxdiv-core` division.
//!
//! Builds the representative testcases at each supported width, divides every
//! ordered pair and checks the quotient's class against the expectation table.

pub mod error;
pub mod precision_config;
pub mod sweep;
pub mod table;
pub mod testcases;

pub use error::CheckError;
pub use precision_config::{
    get_precision_config, require_precision_config, verify_precision, PrecisionConfig,
    PrecisionOutcome, PRECISION_CONFIGS,
};
pub use sweep::{
    check_exact_quotient, run_sweep, run_sweep_with, ExactQuotient, Mismatch, SweepReport,
};
pub use table::{expected, EXPECTED_QUOTIENT_CLASSES};
pub use testcases::{representative_pairs, testcases, TESTCASE_COUNT};

// Re-export core types for convenience
pub use cxdiv_core::*;
