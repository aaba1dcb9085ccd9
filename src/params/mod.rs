//! Projection parameters and scenario loading

mod data;
pub mod loader;

pub use data::{ProjectionParams, ProjectionRequest};
pub use loader::{load_scenarios, load_scenarios_from_reader, DEFAULT_SCENARIOS_PATH};
