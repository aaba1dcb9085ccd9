//! AWS Lambda handler for running a single projection
//!
//! Accepts a JSON `ProjectionRequest` and returns the pre-tax and after-tax
//! balance series with one date per period.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use chrono::Utc;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use roi_projection::service::handle_body;

fn with_cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        let response = with_cors(Response::builder().status(200)).body(Body::Empty)?;
        return Ok(response);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let (status, json) = handle_body(&body_str, Utc::now().naive_utc())?;
    let response = with_cors(Response::builder().status(status))
        .header("Content-Type", "application/json")
        .body(Body::Text(json))?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
