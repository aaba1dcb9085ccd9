//! Projection engine for monthly balance and after-tax projections

mod state;
mod engine;
mod balances;
mod tax;

pub use state::ProjectionState;
pub use engine::{project, ProjectionEngine, ProjectionConfig};
pub use balances::{BalanceRow, ProjectionResult, ProjectionSummary};
pub use tax::{apply_tax, round_to_cents, TaxSchedule, TaxTier};
