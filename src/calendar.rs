//! Calendar dates for projection periods
//!
//! A period is one calendar month. Adding months clamps to the end of the
//! month, so Jan 31 + 1 period is Feb 28 (or 29).

use chrono::{Months, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};
use crate::projection::TaxSchedule;

/// `start` plus `period` calendar months
pub fn period_to_date(start: NaiveDateTime, period: u32) -> Result<NaiveDateTime> {
    start
        .checked_add_months(Months::new(period))
        .ok_or(ProjectionError::DateOutOfRange { period })
}

/// One date per period index, `period_count + 1` in total
pub fn monthly_date_range(start: NaiveDateTime, period_count: u32) -> Result<Vec<NaiveDateTime>> {
    (0..=period_count)
        .map(|period| period_to_date(start, period))
        .collect()
}

/// Span of the projection during which one tax tier applies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBand {
    pub rate: f64,
    pub start_period: u32,
    pub end_period: u32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Date spans covered by each tax tier up to the final period.
///
/// The first tier is always present. Later tiers appear only if they begin
/// strictly before `period_count`, and the last band is cut at the final date.
pub fn tax_bands(
    start: NaiveDateTime,
    period_count: u32,
    schedule: &TaxSchedule,
) -> Result<Vec<TaxBand>> {
    let tiers = schedule.tiers();
    let mut bands = Vec::with_capacity(tiers.len());

    for (i, tier) in tiers.iter().enumerate() {
        if i > 0 && tier.min_periods >= period_count {
            break;
        }
        let end_period = tiers
            .get(i + 1)
            .map(|next| next.min_periods.min(period_count))
            .unwrap_or(period_count);

        bands.push(TaxBand {
            rate: tier.rate,
            start_period: tier.min_periods,
            end_period,
            start: period_to_date(start, tier.min_periods)?,
            end: period_to_date(start, end_period)?,
        });
    }

    Ok(bands)
}
