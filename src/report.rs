//! Formatting and export of projection results

use std::io::Write;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{ProjectionError, Result};
use crate::projection::ProjectionResult;

/// Format an amount as dollars with thousands separators: `$1,234.56`
///
/// Non-finite amounts render as `n/a`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

/// "Month, Year: $amount" line shown for the final period
pub fn final_value_text(date: NaiveDateTime, amount: f64) -> String {
    format!("{}: {}", date.format("%B, %Y"), format_currency(amount))
}

#[derive(Debug, Serialize)]
struct CsvOutputRow {
    #[serde(rename = "Period")]
    period: u32,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Balance")]
    balance: f64,
    #[serde(rename = "Invested")]
    invested: f64,
    #[serde(rename = "Gain")]
    gain: f64,
    #[serde(rename = "TaxRate")]
    tax_rate: f64,
    #[serde(rename = "Tax")]
    tax: f64,
    #[serde(rename = "BalanceAfterTax")]
    balance_after_tax: f64,
}

/// Write every row of a projection with its calendar date as CSV
pub fn write_csv<W: Write>(writer: W, result: &ProjectionResult, dates: &[NaiveDateTime]) -> Result<()> {
    if dates.len() != result.rows.len() {
        return Err(ProjectionError::InvalidInput(format!(
            "expected {} dates, got {}",
            result.rows.len(),
            dates.len()
        )));
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    for (row, date) in result.rows.iter().zip(dates) {
        csv_writer.serialize(CsvOutputRow {
            period: row.period,
            date: date.format("%Y-%m-%d").to_string(),
            balance: row.balance,
            invested: row.invested,
            gain: row.gain,
            tax_rate: row.tax_rate,
            tax: row.tax,
            balance_after_tax: row.balance_after_tax,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// [`write_csv`] to a file path
pub fn write_csv_file<P: AsRef<Path>>(path: P, result: &ProjectionResult, dates: &[NaiveDateTime]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(file, result, dates)
}
