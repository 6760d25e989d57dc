//! Supported component widths and how to verify each of them.
//!
//! [`PRECISION_CONFIGS`] is the canonical list of widths the harness sweeps.

use cxdiv_core::{FloatComponent, FloatExp};
use serde::Serialize;

use crate::error::CheckError;
use crate::sweep::{check_exact_quotient, run_sweep, ExactQuotient, SweepReport};
use crate::testcases::testcases;

/// Configuration for one component width.
#[derive(Debug)]
pub struct PrecisionConfig {
    /// Unique identifier, as accepted on the command line
    pub id: &'static str,
    /// Human-readable name for reports
    pub display_name: &'static str,
    /// Significand bits, including the implicit bit
    pub mantissa_bits: u32,
    /// Exponent field width in bits
    pub exponent_bits: u32,
    /// Runs the sweep and the exact-quotient check at this width
    pub verify: fn(&'static PrecisionConfig) -> PrecisionOutcome,
}

pub static PRECISION_CONFIGS: &[PrecisionConfig] = &[
    PrecisionConfig {
        id: "f32",
        display_name: "Single precision (f32)",
        mantissa_bits: 24,
        exponent_bits: 8,
        verify: verify_width::<f32>,
    },
    PrecisionConfig {
        id: "f64",
        display_name: "Double precision (f64)",
        mantissa_bits: 53,
        exponent_bits: 11,
        verify: verify_width::<f64>,
    },
    PrecisionConfig {
        id: "floatexp",
        display_name: "Extended range (FloatExp)",
        mantissa_bits: 53,
        exponent_bits: 64,
        verify: verify_width::<FloatExp>,
    },
];

/// Look up a precision configuration by ID.
pub fn get_precision_config(id: &str) -> Option<&'static PrecisionConfig> {
    PRECISION_CONFIGS.iter().find(|c| c.id == id)
}

/// Like [`get_precision_config`], failing with [`CheckError::UnknownPrecision`].
pub fn require_precision_config(id: &str) -> Result<&'static PrecisionConfig, CheckError> {
    get_precision_config(id).ok_or_else(|| CheckError::UnknownPrecision(id.to_string()))
}

/// Everything checked at one width.
#[derive(Clone, Debug, Serialize)]
pub struct PrecisionOutcome {
    pub precision: &'static str,
    pub testcases: usize,
    pub sweep: SweepReport,
    pub exact_quotient: ExactQuotient,
}

impl PrecisionOutcome {
    pub fn is_success(&self) -> bool {
        self.sweep.is_success() && self.exact_quotient.exact
    }

    /// First failed assertion, if any.
    pub fn check(&self) -> Result<(), CheckError> {
        if let Some(first) = self.sweep.mismatches.first() {
            return Err(CheckError::TableMismatch {
                precision: self.precision,
                count: self.sweep.mismatches.len(),
                first: Box::new(first.clone()),
            });
        }
        let cells = self.sweep.uncovered_cells();
        if !cells.is_empty() {
            return Err(CheckError::UncoveredCells {
                precision: self.precision,
                cells,
            });
        }
        if !self.exact_quotient.exact {
            return Err(CheckError::InexactQuotient {
                precision: self.precision,
                expected: self.exact_quotient.expected,
                actual: self.exact_quotient.actual,
            });
        }
        Ok(())
    }
}

/// Run every check for one configured width.
pub fn verify_precision(config: &'static PrecisionConfig) -> PrecisionOutcome {
    (config.verify)(config)
}

fn verify_width<T: FloatComponent>(config: &'static PrecisionConfig) -> PrecisionOutcome {
    let cases = testcases::<T>();
    log::debug!(
        "sweeping {} testcases ({} pairs) at {}",
        cases.len(),
        cases.len() * cases.len(),
        config.display_name
    );

    let sweep = run_sweep(&cases);
    let exact_quotient = check_exact_quotient::<T>();

    log::info!(
        "{}: {} pairs, {} mismatches, exact quotient {}",
        config.id,
        sweep.pairs_checked,
        sweep.mismatches.len(),
        if exact_quotient.exact { "ok" } else { "FAILED" }
    );

    PrecisionOutcome {
        precision: config.id,
        testcases: cases.len(),
        sweep,
        exact_quotient,
    }
}
