//! Environment-driven defaults for projection inputs
//!
//! Recognised variables: `ROI_INITIAL`, `ROI_RATE_PERCENT`, `ROI_RATE_BASIS`,
//! `ROI_CONTRIBUTION`, `ROI_MONTHS`. Unset or unparsable values fall back to
//! the built-in defaults.

use std::env;

use crate::params::ProjectionRequest;
use crate::rates::RateBasis;

pub const DEFAULT_INITIAL: f64 = 1000.0;
pub const DEFAULT_RATE_PERCENT: f64 = 2.0;
pub const DEFAULT_CONTRIBUTION: f64 = 100.0;
pub const DEFAULT_MONTHS: u32 = 12;

/// Fallback values used when a caller leaves an input unspecified
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionDefaults {
    pub initial: f64,
    pub rate_percent: f64,
    pub rate_basis: RateBasis,
    pub contribution: f64,
    pub months: u32,
}

impl Default for ProjectionDefaults {
    fn default() -> Self {
        Self {
            initial: DEFAULT_INITIAL,
            rate_percent: DEFAULT_RATE_PERCENT,
            rate_basis: RateBasis::Monthly,
            contribution: DEFAULT_CONTRIBUTION,
            months: DEFAULT_MONTHS,
        }
    }
}

impl ProjectionDefaults {
    /// Read defaults from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read defaults through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = Self::default();
        Self {
            initial: lookup("ROI_INITIAL")
                .and_then(|s| s.parse().ok())
                .unwrap_or(base.initial),
            rate_percent: lookup("ROI_RATE_PERCENT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(base.rate_percent),
            rate_basis: lookup("ROI_RATE_BASIS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(base.rate_basis),
            contribution: lookup("ROI_CONTRIBUTION")
                .and_then(|s| s.parse().ok())
                .unwrap_or(base.contribution),
            months: lookup("ROI_MONTHS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(base.months),
        }
    }

    /// Fill the gaps of `request` from these defaults
    pub fn fill(&self, request: &ProjectionRequest) -> ProjectionRequest {
        ProjectionRequest {
            name: request.name.clone(),
            initial: request.initial.or(Some(self.initial)),
            rate_percent: request.rate_percent.or(Some(self.rate_percent)),
            // a defaulted rate keeps its own basis
            rate_basis: if request.rate_percent.is_some() {
                request.rate_basis
            } else {
                self.rate_basis
            },
            contribution: request.contribution.or(Some(self.contribution)),
            months: request.months.or(Some(self.months as i64)),
        }
    }
}
