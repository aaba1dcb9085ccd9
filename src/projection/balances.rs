//! Balance series output structures for projections

use serde::{Deserialize, Serialize};

/// A single row of projection output for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRow {
    /// Period index (0 = start)
    pub period: u32,

    /// Pre-tax balance, truncated to cents
    pub balance: f64,

    /// Cumulative principal (cost basis)
    pub invested: f64,

    /// balance - invested
    pub gain: f64,

    /// Tier rate in force at this period
    pub tax_rate: f64,

    /// Tax if liquidated at this period (negative on a loss)
    pub tax: f64,

    /// Post-tax-equivalent balance
    pub balance_after_tax: f64,
}

impl BalanceRow {
    /// Period 0 row: nothing has been gained, so nothing is taxed
    pub fn opening(initial: f64) -> Self {
        Self {
            period: 0,
            balance: initial,
            invested: initial,
            gain: 0.0,
            tax_rate: 0.0,
            tax: 0.0,
            balance_after_tax: initial,
        }
    }
}

/// Complete projection result, one row per period from 0 to `period_count`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub rows: Vec<BalanceRow>,
}

impl ProjectionResult {
    pub fn with_capacity(period_count: u32) -> Self {
        Self {
            rows: Vec::with_capacity(period_count as usize + 1),
        }
    }

    /// Add a balance row
    pub fn add_row(&mut self, row: BalanceRow) {
        self.rows.push(row);
    }

    /// Number of projected periods (rows minus the opening row)
    pub fn period_count(&self) -> u32 {
        self.rows.len().saturating_sub(1) as u32
    }

    /// Pre-tax balance series, indexed by period
    pub fn balances(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.balance).collect()
    }

    /// Post-tax-equivalent balance series, indexed by period
    pub fn balances_after_tax(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.balance_after_tax).collect()
    }

    /// Cost basis series, indexed by period
    pub fn invested(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.invested).collect()
    }

    pub fn final_row(&self) -> Option<&BalanceRow> {
        self.rows.last()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let initial = self.rows.first().map(|r| r.balance).unwrap_or(0.0);
        let last = self.final_row();

        ProjectionSummary {
            periods: self.period_count(),
            initial,
            total_invested: last.map(|r| r.invested).unwrap_or(0.0),
            final_balance: last.map(|r| r.balance).unwrap_or(0.0),
            final_gain: last.map(|r| r.gain).unwrap_or(0.0),
            final_tax: last.map(|r| r.tax).unwrap_or(0.0),
            final_balance_after_tax: last.map(|r| r.balance_after_tax).unwrap_or(0.0),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub periods: u32,
    pub initial: f64,
    pub total_invested: f64,
    pub final_balance: f64,
    pub final_gain: f64,
    pub final_tax: f64,
    pub final_balance_after_tax: f64,
}
