//! JSON response envelopes.
//!
//! Every application response is a 200: GET endpoints return the raw
//! collection array, mutations return `{"success":true,"message":...}` and
//! failures return `{"error":...}`. The synchronization clients inspect the
//! body, not the status code, so error states must never change the status.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

/// Raw collection contents for GET endpoints.
pub fn records(records: Vec<Value>) -> Response {
    (StatusCode::OK, Json(Value::Array(records))).into_response()
}

/// Arbitrary JSON payload (health check).
pub fn payload(value: Value) -> Response {
    (StatusCode::OK, Json(value)).into_response()
}

/// Mutation acknowledged.
pub fn success(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": message })),
    )
        .into_response()
}

/// Application-level failure, reported in the body per the wire contract.
pub fn error(message: &str) -> Response {
    (StatusCode::OK, Json(json!({ "error": message }))).into_response()
}

/// 200 with the standard headers and no body, for HEAD probes.
pub fn no_body() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        (),
    )
        .into_response()
}

/// CORS preflight approval.
pub fn preflight() -> Response {
    (
        StatusCode::OK,
        [
            (
                header::ACCESS_CONTROL_ALLOW_METHODS,
                "GET, POST, PUT, DELETE, OPTIONS, HEAD",
            ),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
        (),
    )
        .into_response()
}
