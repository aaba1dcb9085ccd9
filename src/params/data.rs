//! Projection parameter records

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};
use crate::rates::{periodic_fraction, RateBasis};

/// Validated inputs for a single projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    /// Amount invested at period 0
    pub initial: f64,

    /// Fractional growth per period (0.02 = 2% per month)
    pub periodic_rate: f64,

    /// Amount added at the end of every period
    pub contribution: f64,

    /// Number of monthly periods to project (at least 1)
    pub period_count: u32,
}

impl ProjectionParams {
    /// Build parameters, rejecting a zero period count or non-finite numbers.
    ///
    /// Negative amounts and rates are accepted and simply flow through the
    /// arithmetic; range checks belong to the caller.
    pub fn new(initial: f64, periodic_rate: f64, contribution: f64, period_count: u32) -> Result<Self> {
        let params = Self {
            initial,
            periodic_rate,
            contribution,
            period_count,
        };
        params.validate()?;
        Ok(params)
    }

    /// Build parameters from a percentage rate quoted monthly or annually
    pub fn from_percent(
        initial: f64,
        rate_pct: f64,
        basis: RateBasis,
        contribution: f64,
        period_count: u32,
    ) -> Result<Self> {
        if !rate_pct.is_finite() {
            return Err(ProjectionError::InvalidInput(format!(
                "rate must be finite, got {}",
                rate_pct
            )));
        }
        Self::new(initial, periodic_fraction(rate_pct, basis)?, contribution, period_count)
    }

    /// Check the invariants a hand-built or deserialized record may violate
    pub fn validate(&self) -> Result<()> {
        if self.period_count < 1 {
            return Err(ProjectionError::InvalidInput(
                "period count must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("initial", self.initial),
            ("periodic_rate", self.periodic_rate),
            ("contribution", self.contribution),
        ] {
            if !value.is_finite() {
                return Err(ProjectionError::InvalidInput(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Parameters as supplied by an outside caller (JSON body, CSV row)
///
/// Every field is optional on the wire so that an absent value is reported
/// by name rather than silently defaulted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// Optional label used by batch runs
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub initial: Option<f64>,

    /// Return rate in percent, on `rate_basis`
    #[serde(default)]
    pub rate_percent: Option<f64>,

    #[serde(default)]
    pub rate_basis: RateBasis,

    #[serde(default)]
    pub contribution: Option<f64>,

    /// Duration in months
    #[serde(default)]
    pub months: Option<i64>,
}

impl ProjectionRequest {
    /// Convert into validated parameters, failing on the first missing field
    pub fn to_params(&self) -> Result<ProjectionParams> {
        let initial = self.initial.ok_or(ProjectionError::MissingParameter("initial"))?;
        let rate_pct = self
            .rate_percent
            .ok_or(ProjectionError::MissingParameter("rate_percent"))?;
        let contribution = self
            .contribution
            .ok_or(ProjectionError::MissingParameter("contribution"))?;
        let months = self.months.ok_or(ProjectionError::MissingParameter("months"))?;

        let period_count = u32::try_from(months)
            .ok()
            .filter(|&m| m >= 1)
            .ok_or_else(|| {
                ProjectionError::InvalidInput(format!("months must be a positive integer, got {}", months))
            })?;

        ProjectionParams::from_percent(initial, rate_pct, self.rate_basis, contribution, period_count)
    }
}
