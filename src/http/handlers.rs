//! Request dispatch and per-collection CRUD handlers.
//!
//! # Responsibilities
//! - Map (method, path) onto a collection operation
//! - Buffer and parse JSON request bodies
//! - Answer OPTIONS and HEAD for any path
//!
//! # Design Decisions
//! - One catch-all handler dispatching internally, instead of one Axum
//!   route per endpoint: unmatched requests still need the 200 +
//!   `{"error":"Endpoint not found"}` contract, and OPTIONS/HEAD apply to
//!   every path
//! - Bodies are parsed before the path is matched, so a broken payload
//!   reports its parse error even against an unknown endpoint
//! - Storage failures on mutations are logged and the response still
//!   acknowledges the write; only the body signals failure to clients

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{Method, Request};
use axum::response::Response;
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::http::response;
use crate::http::server::AppState;
use crate::storage::Collection;

/// Entry point for every request.
pub async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_owned);

    match method {
        Method::OPTIONS => response::preflight(),
        Method::HEAD => response::no_body(),
        Method::GET => get(&state, &path).await,
        Method::POST => match parse_body(request, state.max_body_bytes).await {
            Ok(record) => post(&state, &path, record).await,
            Err(message) => response::error(&message),
        },
        Method::PUT => match parse_body(request, state.max_body_bytes).await {
            Ok(record) => put(&state, &path, record).await,
            Err(message) => response::error(&message),
        },
        Method::DELETE => delete(&state, &path, query.as_deref()).await,
        _ => response::error("Endpoint not found"),
    }
}

async fn get(state: &AppState, path: &str) -> Response {
    match path {
        "/api/health" => response::payload(json!({
            "status": "ok",
            "time": Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        })),
        "/api/clients" => response::records(state.store.list(Collection::Clients).await),
        "/api/users" => response::records(state.store.list(Collection::Users).await),
        "/api/branches" => response::records(state.store.list(Collection::Branches).await),
        "/api/reports" => response::records(state.store.list(Collection::Reports).await),
        _ => response::error("Endpoint not found"),
    }
}

async fn post(state: &AppState, path: &str, record: Value) -> Response {
    let (collection, message) = match path {
        "/api/clients" => (Collection::Clients, "Client saved"),
        "/api/users" => (Collection::Users, "User saved"),
        "/api/branches" => (Collection::Branches, "Branch saved"),
        "/api/reports" => (Collection::Reports, "Report saved"),
        _ => return response::error("Endpoint not found"),
    };

    if let Err(error) = state.store.append(collection, record).await {
        tracing::error!(collection = ?collection, error = %error, "Failed to persist append");
    }
    response::success(message)
}

async fn put(state: &AppState, path: &str, record: Value) -> Response {
    match path {
        "/api/users" => {
            if record.get("id").is_none() {
                return response::error("missing field 'id'");
            }
            // Unknown ids are not an error here: the device fleet PUTs
            // optimistically and treats the ack as authoritative.
            if let Err(error) = state.store.update(Collection::Users, record).await {
                tracing::error!(error = %error, "Failed to persist user update");
            }
            response::success("User updated")
        }
        "/api/clients" => {
            if record.get("referenceNumber").is_none() {
                return response::error("missing field 'referenceNumber'");
            }
            match state.store.update(Collection::Clients, record).await {
                Ok(true) => response::success("Client updated"),
                Ok(false) => response::error("Client not found"),
                Err(error) => {
                    tracing::error!(error = %error, "Failed to persist client update");
                    response::success("Client updated")
                }
            }
        }
        "/api/reports" => {
            if record.get("id").is_none() {
                return response::error("missing field 'id'");
            }
            match state.store.update(Collection::Reports, record).await {
                Ok(true) => response::success("Report updated"),
                Ok(false) => response::error("Report not found"),
                Err(error) => {
                    tracing::error!(error = %error, "Failed to persist report update");
                    response::success("Report updated")
                }
            }
        }
        _ => response::error("Endpoint not found"),
    }
}

async fn delete(state: &AppState, path: &str, query: Option<&str>) -> Response {
    // Without an id there is nothing to address; that reads as an
    // unmatched route, same as the other verbs.
    let Some(id) = query.and_then(id_param) else {
        return response::error("Endpoint not found");
    };
    let (collection, message) = match path {
        "/api/users" => (Collection::Users, "User deleted"),
        "/api/branches" => (Collection::Branches, "Branch deleted"),
        _ => return response::error("Endpoint not found"),
    };

    if let Err(error) = state.store.delete(collection, &id).await {
        tracing::error!(collection = ?collection, error = %error, "Failed to persist delete");
    }
    response::success(message)
}

/// First `id` value in the query string, if any.
fn id_param(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == "id")
        .map(|(_, value)| value.into_owned())
}

async fn parse_body(request: Request<Body>, limit: usize) -> Result<Value, String> {
    let bytes = to_bytes(request.into_body(), limit)
        .await
        .map_err(|error| error.to_string())?;
    serde_json::from_slice(&bytes).map_err(|error| error.to_string())
}
