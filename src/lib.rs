//! ROI Projection - compound investment growth with holding-period tax tiers
//!
//! This library provides:
//! - Monthly/annual compounding rate conversion
//! - Month-by-month balance projection with cent truncation
//! - Post-tax "if liquidated now" balances under tiered capital gains rates
//! - Calendar dates and tax-tier date bands for charting
//! - Parallel batch projections for scenario comparison

pub mod error;
pub mod rates;
pub mod params;
pub mod projection;
pub mod calendar;
pub mod report;
pub mod config;
pub mod scenario;
pub mod service;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use rates::{annual_to_monthly, monthly_to_annual, RateBasis};
pub use params::{ProjectionParams, ProjectionRequest};
pub use projection::{project, ProjectionEngine, ProjectionConfig, ProjectionResult, BalanceRow, TaxSchedule};
pub use calendar::period_to_date;
pub use scenario::ScenarioRunner;
