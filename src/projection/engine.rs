//! Core projection engine for monthly balance projections

use crate::error::{ProjectionError, Result};
use crate::params::ProjectionParams;
use super::balances::{BalanceRow, ProjectionResult};
use super::state::ProjectionState;
use super::tax::TaxSchedule;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Compute the post-tax series; when false it mirrors the pre-tax series
    pub apply_tax: bool,

    /// Holding-period tax tiers
    pub tax_schedule: TaxSchedule,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            apply_tax: true,
            tax_schedule: TaxSchedule::standard(),
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run a projection, producing one row per period from 0 to `period_count`
    pub fn project(&self, params: &ProjectionParams) -> Result<ProjectionResult> {
        params.validate()?;

        let mut result = ProjectionResult::with_capacity(params.period_count);
        let mut state = ProjectionState::from_params(params);
        result.add_row(BalanceRow::opening(params.initial));

        for _period in 1..=params.period_count {
            state.advance_period(params.periodic_rate, params.contribution);
            let row = self.calculate_row(&state);
            if !row.balance.is_finite() || !row.balance_after_tax.is_finite() {
                return Err(ProjectionError::InvalidInput(format!(
                    "balance overflowed at period {}",
                    row.period
                )));
            }
            result.add_row(row);
        }

        log::debug!(
            "projected {} periods: final balance {:.2}, after tax {:.2}",
            params.period_count,
            state.balance,
            result.final_row().map(|r| r.balance_after_tax).unwrap_or(state.balance),
        );

        Ok(result)
    }

    /// Calculate tax figures for the period the state has just reached
    fn calculate_row(&self, state: &ProjectionState) -> BalanceRow {
        let (tax_rate, tax) = if self.config.apply_tax {
            let schedule = &self.config.tax_schedule;
            (
                schedule.rate_for(state.period),
                schedule.tax_on(state.balance, state.invested, state.period),
            )
        } else {
            (0.0, 0.0)
        };

        BalanceRow {
            period: state.period,
            balance: state.balance,
            invested: state.invested,
            gain: state.gain(),
            tax_rate,
            tax,
            balance_after_tax: state.balance - tax,
        }
    }
}

/// Project pre-tax and post-tax balance series with the standard tax tiers.
///
/// Both series have `period_count + 1` entries and start at `initial`.
pub fn project(
    initial: f64,
    periodic_rate: f64,
    contribution: f64,
    period_count: u32,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let params = ProjectionParams::new(initial, periodic_rate, contribution, period_count)?;
    let result = ProjectionEngine::default().project(&params)?;
    Ok((result.balances(), result.balances_after_tax()))
}
