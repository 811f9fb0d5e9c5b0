//! Simulation harness entry point
//!
//! Usage: `simulation [config.json] [report.json]`
//!
//! Runs every scenario against a fresh ledger, logs per-scenario
//! outcomes, optionally writes a JSON report, and exits non-zero if any
//! scenario failed.

use simulation::config::SimConfig;
use simulation::report;
use simulation::scenarios;

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            SimConfig::from_file(&path)?
        }
        None => SimConfig::default(),
    };
    let report_path = args.next();

    tracing::info!(
        "Starting ZARS ledger simulation (seed {}, {} holders, {} soak operations)",
        config.seed,
        config.holders,
        config.operations
    );

    let results = scenarios::run_all(&config)?;
    for result in &results {
        if result.passed {
            tracing::info!(
                "{}: passed ({} operations, {} accepted, {} rejected)",
                result.name,
                result.operations,
                result.accepted,
                result.rejected
            );
        } else {
            tracing::error!("{}: FAILED ({})", result.name, result.details);
        }
    }

    let run_report = report::build_report(config.seed, results);
    if let Some(path) = report_path {
        report::write_to_file(&run_report, &path)?;
        tracing::info!("Report written to {}", path);
    }

    if !run_report.passed {
        anyhow::bail!("one or more scenarios failed");
    }
    tracing::info!("All scenarios passed");
    Ok(())
}
