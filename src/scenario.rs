//! Scenario runner for batch projections
//!
//! Projections are independent pure computations, so a batch is spread over
//! the rayon thread pool with no coordination beyond collecting results in
//! input order.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::params::{ProjectionParams, ProjectionRequest};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionSummary};

/// Outcome of one named scenario in a batch
#[derive(Debug, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProjectionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Runner holding one engine configuration for many projections
///
/// # Example
/// ```
/// use roi_projection::{ProjectionParams, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let batch: Vec<_> = [0.01, 0.02, 0.03]
///     .iter()
///     .map(|&rate| ProjectionParams::new(1000.0, rate, 100.0, 24).unwrap())
///     .collect();
/// let results = runner.run_batch(&batch);
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the standard tax schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a custom engine configuration
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single projection
    pub fn run(&self, params: &ProjectionParams) -> Result<ProjectionResult> {
        self.engine.project(params)
    }

    /// Run projections for many parameter sets in parallel, preserving order
    pub fn run_batch(&self, batch: &[ProjectionParams]) -> Vec<Result<ProjectionResult>> {
        log::info!("running {} projections", batch.len());
        batch.par_iter().map(|params| self.engine.project(params)).collect()
    }

    /// Validate and run named requests, reporting failures per scenario
    pub fn run_requests(&self, requests: &[ProjectionRequest]) -> Vec<ScenarioOutcome> {
        log::info!("running {} scenarios", requests.len());
        requests
            .par_iter()
            .enumerate()
            .map(|(i, request)| {
                let name = request
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("scenario-{}", i + 1));
                match request.to_params().and_then(|p| self.engine.project(&p)) {
                    Ok(result) => ScenarioOutcome {
                        name,
                        summary: Some(result.summary()),
                        error: None,
                    },
                    Err(e) => {
                        log::warn!("scenario {} failed: {}", name, e);
                        ScenarioOutcome {
                            name,
                            summary: None,
                            error: Some(e.to_string()),
                        }
                    }
                }
            })
            .collect()
    }
}
