//! Holding-period capital gains tax tiers

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// Truncate toward zero at the hundredths place.
///
/// 1116.006 becomes 1116.00, never 1116.01. The downward bias on positive
/// amounts is intentional and must be kept for parity with published figures.
pub fn round_to_cents(amount: f64) -> f64 {
    (100.0 * amount).trunc() / 100.0
}

/// A tax rate that applies from `min_periods` elapsed periods onward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxTier {
    pub min_periods: u32,
    pub rate: f64,
}

/// Capital gains tiers for monthly periods:
/// under 6 months 22.5%, 6-11 20%, 12-23 17.5%, 24 and over 15%
pub const STANDARD_TIERS: [TaxTier; 4] = [
    TaxTier { min_periods: 0, rate: 0.225 },
    TaxTier { min_periods: 6, rate: 0.20 },
    TaxTier { min_periods: 12, rate: 0.175 },
    TaxTier { min_periods: 24, rate: 0.15 },
];

/// Tax tiers ordered by holding period
///
/// Deserialization goes through [`TaxSchedule::new`], so a stored schedule
/// is sorted and starts at period 0 like a constructed one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTaxSchedule")]
pub struct TaxSchedule {
    /// Sorted ascending by `min_periods`; the first tier starts at 0
    tiers: Vec<TaxTier>,
}

#[derive(Deserialize)]
struct RawTaxSchedule {
    tiers: Vec<TaxTier>,
}

impl TryFrom<RawTaxSchedule> for TaxSchedule {
    type Error = ProjectionError;

    fn try_from(raw: RawTaxSchedule) -> Result<Self, Self::Error> {
        TaxSchedule::new(raw.tiers).ok_or_else(|| {
            ProjectionError::InvalidInput("tax schedule needs a tier starting at period 0".to_string())
        })
    }
}

/// Rate in force after `periods` elapsed periods; 0 for an empty slice
fn rate_in(tiers: &[TaxTier], periods: u32) -> f64 {
    tiers
        .iter()
        .rev()
        .find(|t| periods >= t.min_periods)
        .or_else(|| tiers.first())
        .map_or(0.0, |t| t.rate)
}

fn tax_in(tiers: &[TaxTier], balance: f64, invested: f64, period: u32) -> f64 {
    let gain = balance - invested;
    round_to_cents(gain * rate_in(tiers, period))
}

impl TaxSchedule {
    /// Build a schedule from arbitrary tiers.
    ///
    /// Tiers are sorted by threshold. Returns `None` when empty or when no
    /// tier covers period 0.
    pub fn new(mut tiers: Vec<TaxTier>) -> Option<Self> {
        tiers.sort_by_key(|t| t.min_periods);
        match tiers.first() {
            Some(first) if first.min_periods == 0 => Some(Self { tiers }),
            _ => None,
        }
    }

    /// Schedule built from [`STANDARD_TIERS`]
    pub fn standard() -> Self {
        Self {
            tiers: STANDARD_TIERS.to_vec(),
        }
    }

    pub fn tiers(&self) -> &[TaxTier] {
        &self.tiers
    }

    pub fn rate_for(&self, periods: u32) -> f64 {
        rate_in(&self.tiers, periods)
    }

    /// Tax owed if the position were closed at `period`.
    ///
    /// A loss yields a negative amount (a notional credit); it is not floored.
    pub fn tax_on(&self, balance: f64, invested: f64, period: u32) -> f64 {
        tax_in(&self.tiers, balance, invested, period)
    }

    /// Balance left after paying tax on the gain at `period`
    pub fn apply_tax(&self, balance: f64, invested: f64, period: u32) -> f64 {
        balance - self.tax_on(balance, invested, period)
    }
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

/// [`TaxSchedule::apply_tax`] on [`STANDARD_TIERS`]
pub fn apply_tax(balance: f64, invested: f64, period: u32) -> f64 {
    balance - tax_in(&STANDARD_TIERS, balance, invested, period)
}
