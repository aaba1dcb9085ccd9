//! Running state of a projection between periods

use crate::params::ProjectionParams;
use super::tax::round_to_cents;

/// Balance and cost basis carried from one period to the next
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Periods elapsed (0 at the start)
    pub period: u32,

    /// Pre-tax balance at the end of `period`
    pub balance: f64,

    /// Cumulative principal contributed so far (cost basis)
    pub invested: f64,
}

impl ProjectionState {
    /// State at period 0: both balance and cost basis equal the initial amount
    pub fn from_params(params: &ProjectionParams) -> Self {
        Self {
            period: 0,
            balance: params.initial,
            invested: params.initial,
        }
    }

    /// Grow the balance one period and add the contribution.
    ///
    /// The cost basis is a running sum, not `initial + period * contribution`,
    /// so that per-period contributions can vary later.
    pub fn advance_period(&mut self, periodic_rate: f64, contribution: f64) {
        self.period += 1;

        let raw = self.balance * (1.0 + periodic_rate) + contribution;
        self.balance = round_to_cents(raw);
        self.invested += contribution;
    }

    /// Unrealized gain (negative for a loss)
    pub fn gain(&self) -> f64 {
        self.balance - self.invested
    }
}
