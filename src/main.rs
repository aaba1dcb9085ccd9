//! ROI Projection CLI
//!
//! Command-line interface for projecting investment growth before and after tax.
//! Unspecified inputs fall back to `ROI_*` environment variables, then to
//! built-in defaults.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::Parser;
use roi_projection::{
    calendar::{monthly_date_range, tax_bands},
    config::ProjectionDefaults,
    projection::{ProjectionConfig, ProjectionEngine},
    rates::monthly_to_annual,
    report::{final_value_text, format_currency, write_csv_file},
    ProjectionRequest, RateBasis,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "roi-projection",
    about = "Project compound investment growth with tiered capital gains tax"
)]
struct Args {
    /// Initial investment
    #[arg(long)]
    initial: Option<f64>,

    /// Return rate in percent
    #[arg(long)]
    rate: Option<f64>,

    /// Basis the rate is quoted on (monthly or annual)
    #[arg(long)]
    basis: Option<RateBasis>,

    /// Contribution added each month
    #[arg(long)]
    contribution: Option<f64>,

    /// Investment duration in months
    #[arg(long)]
    months: Option<i64>,

    /// Start date (YYYY-MM-DD); defaults to now
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Skip tax and report pre-tax balances only
    #[arg(long)]
    no_tax: bool,

    /// Write every period to this CSV file
    #[arg(long)]
    csv: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonOutput {
    dates: Vec<String>,
    balance: Vec<f64>,
    balance_after_tax: Vec<f64>,
    final_value: String,
    summary: roi_projection::projection::ProjectionSummary,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let defaults = ProjectionDefaults::from_env();
    let request = defaults.fill(&ProjectionRequest {
        name: None,
        initial: args.initial,
        rate_percent: args.rate,
        rate_basis: args.basis.unwrap_or(defaults.rate_basis),
        contribution: args.contribution,
        months: args.months,
    });
    let params = request.to_params().context("invalid projection inputs")?;

    let start: NaiveDateTime = match args.start {
        Some(date) => date.and_time(chrono::NaiveTime::default()),
        None => Local::now().naive_local(),
    };

    let config = ProjectionConfig {
        apply_tax: !args.no_tax,
        ..Default::default()
    };
    let engine = ProjectionEngine::new(config);
    let result = engine.project(&params)?;
    let dates = monthly_date_range(start, params.period_count)?;

    let final_row = result.final_row().context("projection produced no rows")?;
    let final_date = *dates.last().context("no dates for projection")?;
    let final_text = final_value_text(final_date, final_row.balance_after_tax);

    if let Some(path) = &args.csv {
        write_csv_file(path, &result, &dates)
            .with_context(|| format!("unable to write CSV to {}", path))?;
    }

    if args.json {
        let output = JsonOutput {
            dates: dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect(),
            balance: result.balances(),
            balance_after_tax: result.balances_after_tax(),
            final_value: final_text,
            summary: result.summary(),
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("ROI Projection v0.1.0");
    println!("=====================\n");

    let monthly_pct = params.periodic_rate * 100.0;
    println!("Initial:      {}", format_currency(params.initial));
    println!(
        "Rate:         {:.4}% monthly ({:.4}% annual)",
        monthly_pct,
        monthly_to_annual(monthly_pct)
    );
    println!("Contribution: {} / month", format_currency(params.contribution));
    println!("Duration:     {} months\n", params.period_count);

    println!(
        "{:>6} {:>10} {:>14} {:>14} {:>8} {:>12} {:>14}",
        "Period", "Date", "Balance", "Invested", "TaxRt", "Tax", "After Tax"
    );
    println!("{}", "-".repeat(84));
    for (row, date) in result.rows.iter().zip(&dates) {
        println!(
            "{:>6} {:>10} {:>14.2} {:>14.2} {:>7.1}% {:>12.2} {:>14.2}",
            row.period,
            date.format("%Y-%m"),
            row.balance,
            row.invested,
            row.tax_rate * 100.0,
            row.tax,
            row.balance_after_tax,
        );
    }

    if !args.no_tax {
        println!("\nTax tiers:");
        for band in tax_bands(start, params.period_count, &engine.config().tax_schedule)? {
            println!(
                "  {:>5.1}%  {} to {}  (months {}-{})",
                band.rate * 100.0,
                band.start.format("%Y-%m-%d"),
                band.end.format("%Y-%m-%d"),
                band.start_period,
                band.end_period,
            );
        }
    }

    if let Some(path) = &args.csv {
        println!("\nFull results written to: {}", path);
    }

    println!("\n{}", final_text);
    Ok(())
}
