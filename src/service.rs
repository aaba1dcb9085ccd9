//! JSON request/response contract for the HTTP projection service
//!
//! Transport-free so the Lambda binary stays a thin adapter: it supplies the
//! request body and the start date, and sends back the status and JSON body.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::calendar::{monthly_date_range, tax_bands, TaxBand};
use crate::error::{ProjectionError, Result};
use crate::params::ProjectionRequest;
use crate::projection::{ProjectionEngine, ProjectionSummary};
use crate::report::final_value_text;

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub dates: Vec<String>,
    pub balance: Vec<f64>,
    pub balance_after_tax: Vec<f64>,
    pub final_value: String,
    pub summary: ProjectionSummary,
    pub tax_bands: Vec<TaxBand>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Run the projection described by `request`, dating period 0 at `start`
pub fn build_response(request: &ProjectionRequest, start: NaiveDateTime) -> Result<ProjectionResponse> {
    let params = request.to_params()?;
    let engine = ProjectionEngine::default();
    let result = engine.project(&params)?;

    let dates = monthly_date_range(start, params.period_count)?;
    let bands = tax_bands(start, params.period_count, &engine.config().tax_schedule)?;

    let summary = result.summary();
    let final_date = dates
        .last()
        .copied()
        .ok_or(ProjectionError::DateOutOfRange { period: params.period_count })?;

    Ok(ProjectionResponse {
        dates: dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect(),
        balance: result.balances(),
        balance_after_tax: result.balances_after_tax(),
        final_value: final_value_text(final_date, summary.final_balance_after_tax),
        summary,
        tax_bands: bands,
    })
}

/// Map a raw request body to an HTTP status and JSON body.
///
/// Malformed JSON and rejected inputs are 400 with `{"error": ...}`.
pub fn handle_body(body: &str, start: NaiveDateTime) -> serde_json::Result<(u16, String)> {
    let request: ProjectionRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            let error = ErrorBody {
                error: format!("Invalid JSON: {}", e),
            };
            return Ok((400, serde_json::to_string(&error)?));
        }
    };

    match build_response(&request, start) {
        Ok(response) => {
            log::info!(
                "projected {} months, final after tax {:.2}",
                response.summary.periods,
                response.summary.final_balance_after_tax
            );
            Ok((200, serde_json::to_string(&response)?))
        }
        Err(e) => {
            log::warn!("rejected request: {}", e);
            let error = ErrorBody { error: e.to_string() };
            Ok((400, serde_json::to_string(&error)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use serde_json::Value;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn request(months: Option<i64>) -> ProjectionRequest {
        ProjectionRequest {
            initial: Some(1000.0),
            rate_percent: Some(1.6),
            contribution: Some(100.0),
            months,
            ..Default::default()
        }
    }

    #[test]
    fn test_build_response() {
        let response = build_response(&request(Some(12)), start()).unwrap();

        assert_eq!(response.dates.len(), 13);
        assert_eq!(response.balance.len(), 13);
        assert_eq!(response.balance_after_tax.len(), 13);
        assert_eq!(response.dates[0], "2026-10-18");
        assert_eq!(response.dates[12], "2027-10-18");

        assert_relative_eq!(response.balance[12], 2521.22, epsilon = 1e-9);
        assert_relative_eq!(response.balance_after_tax[12], 2465.01, epsilon = 1e-9);
        assert_eq!(response.final_value, "October, 2027: $2,465.01");
        assert_eq!(response.tax_bands.len(), 2);
        assert_eq!(response.tax_bands[1].start_period, 6);
    }

    #[test]
    fn test_build_response_missing_field() {
        let incomplete = ProjectionRequest {
            contribution: None,
            ..request(Some(12))
        };
        let err = build_response(&incomplete, start()).unwrap_err();
        assert!(matches!(err, ProjectionError::MissingParameter("contribution")));
    }

    #[test]
    fn test_build_response_zero_months() {
        let err = build_response(&request(Some(0)), start()).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidInput(_)));
    }

    #[test]
    fn test_handle_body_ok() {
        let body = r#"{"initial": 1000, "rate_percent": 1.6, "contribution": 100, "months": 12}"#;
        let (status, json) = handle_body(body, start()).unwrap();
        assert_eq!(status, 200);

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["balance"].as_array().unwrap().len(), 13);
        assert_eq!(value["final_value"], "October, 2027: $2,465.01");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_handle_body_rejections() {
        let cases = [
            r#"{"initial": 1000, "rate_percent": 1.6, "months": 12}"#,
            r#"{"initial": 1000, "rate_percent": 1.6, "contribution": 100, "months": 0}"#,
            r#"{"initial": 1000,"#,
            "{}",
        ];
        for body in cases {
            let (status, json) = handle_body(body, start()).unwrap();
            assert_eq!(status, 400, "body {}", body);

            let value: Value = serde_json::from_str(&json).unwrap();
            assert!(value["error"].is_string(), "body {}", body);
        }
    }

    #[test]
    fn test_handle_body_names_missing_field() {
        let body = r#"{"initial": 1000, "rate_percent": 1.6, "months": 12}"#;
        let (_, json) = handle_body(body, start()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert!(value["error"].as_str().unwrap().contains("contribution"));
    }
}
