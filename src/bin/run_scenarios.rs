//! Run a batch of projection scenarios from CSV
//!
//! Reads data/scenarios.csv (or the path given as the first argument),
//! projects every scenario in parallel and prints a comparison table.
//! Pass --json for machine-readable output.

use std::env;
use std::time::Instant;

use anyhow::{Context, Result};
use roi_projection::{
    params::{load_scenarios, DEFAULT_SCENARIOS_PATH},
    report::format_currency,
    ScenarioRunner,
};

fn main() -> Result<()> {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let path = env::args()
        .skip(1)
        .find(|arg| !arg.starts_with("--"))
        .unwrap_or_else(|| DEFAULT_SCENARIOS_PATH.to_string());

    let start = Instant::now();
    let requests = load_scenarios(&path).with_context(|| format!("failed to load scenarios from {}", path))?;
    log::info!("loaded {} scenarios from {} in {:?}", requests.len(), path, start.elapsed());

    let runner = ScenarioRunner::new();
    let mut outcomes = runner.run_requests(&requests);

    if json_output {
        println!("{}", serde_json::to_string(&outcomes)?);
        return Ok(());
    }

    // Best after-tax outcome first; failures last
    outcomes.sort_by(|a, b| {
        let key = |o: &roi_projection::scenario::ScenarioOutcome| {
            o.summary
                .as_ref()
                .map(|s| s.final_balance_after_tax)
                .unwrap_or(f64::NEG_INFINITY)
        };
        key(b).total_cmp(&key(a))
    });

    println!(
        "{:<20} {:>7} {:>16} {:>16} {:>16} {:>16}",
        "Scenario", "Months", "Invested", "Balance", "Tax", "After Tax"
    );
    println!("{}", "-".repeat(96));

    for outcome in &outcomes {
        match (&outcome.summary, &outcome.error) {
            (Some(s), _) => println!(
                "{:<20} {:>7} {:>16} {:>16} {:>16} {:>16}",
                outcome.name,
                s.periods,
                format_currency(s.total_invested),
                format_currency(s.final_balance),
                format_currency(s.final_tax),
                format_currency(s.final_balance_after_tax),
            ),
            (None, Some(err)) => println!("{:<20} error: {}", outcome.name, err),
            (None, None) => println!("{:<20} no result", outcome.name),
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
