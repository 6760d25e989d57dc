use anyhow::bail;
use clap::Parser;
use cxdiv_check::{require_precision_config, verify_precision, PrecisionConfig, PRECISION_CONFIGS};

/// Check complex division against the special-value class table.
#[derive(Parser, Debug)]
#[command(name = "cxdiv-check", version)]
struct Cli {
    /// Width to verify (f32, f64, floatexp). Repeatable; defaults to all.
    #[arg(long = "precision", value_name = "ID")]
    precisions: Vec<String>,

    /// Print the full report as JSON instead of a summary.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let configs: Vec<&'static PrecisionConfig> = if cli.precisions.is_empty() {
        PRECISION_CONFIGS.iter().collect()
    } else {
        cli.precisions
            .iter()
            .map(|id| require_precision_config(id))
            .collect::<Result<_, _>>()?
    };

    let outcomes: Vec<_> = configs.into_iter().map(verify_precision).collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for outcome in &outcomes {
            println!(
                "{:<10} {:>6} pairs  {:>4} mismatches  exact quotient: {}",
                outcome.precision,
                outcome.sweep.pairs_checked,
                outcome.sweep.mismatches.len(),
                if outcome.exact_quotient.exact { "ok" } else { "FAILED" }
            );
        }
    }

    let mut failures = 0;
    for outcome in &outcomes {
        if let Err(err) = outcome.check() {
            log::warn!("{}", err);
            failures += 1;
        }
    }
    if failures > 0 {
        bail!("{} of {} precision(s) failed verification", failures, outcomes.len());
    }
    Ok(())
}
