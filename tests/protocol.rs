//! Wire-contract tests: health, CORS, catch-all verbs and the
//! body-signalled error convention.

use serde_json::{json, Value};
use tempfile::tempdir;

mod common;

#[tokio::test]
async fn test_health_reports_ok_with_utc_timestamp() {
    let dir = tempdir().unwrap();
    let server = common::spawn_server(dir.path()).await;
    let client = common::client();

    let res = client
        .get(server.url("/api/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    let time = body["time"].as_str().unwrap();
    assert!(time.ends_with('Z'));
    chrono::DateTime::parse_from_rfc3339(time).unwrap();

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_endpoint_answers_200_with_error_body() {
    let dir = tempdir().unwrap();
    let server = common::spawn_server(dir.path()).await;
    let client = common::client();

    let res = client
        .get(server.url("/api/inventory"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Endpoint not found");

    // Same for a mutating verb with a well-formed body.
    let res = client
        .post(server.url("/api/inventory"))
        .json(&json!({"anything": true}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Endpoint not found");

    // DELETE without an id parameter is unmatched too.
    let res = client
        .delete(server.url("/api/users"))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Endpoint not found");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_options_preflight_any_path() {
    let dir = tempdir().unwrap();
    let server = common::spawn_server(dir.path()).await;
    let client = common::client();

    for path in ["/api/clients", "/api/whatever", "/"] {
        let res = client
            .request(reqwest::Method::OPTIONS, server.url(path))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);

        let headers = res.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        let methods = headers["access-control-allow-methods"].to_str().unwrap();
        assert!(methods.contains("PUT"));
        assert!(methods.contains("DELETE"));
        assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_head_any_path_returns_200_without_body() {
    let dir = tempdir().unwrap();
    let server = common::spawn_server(dir.path()).await;
    let client = common::client();

    for path in ["/api/health", "/api/users", "/not-an-endpoint"] {
        let res = client.head(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), 200);
        assert!(res.bytes().await.unwrap().is_empty());
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_cors_origin_header_on_every_response() {
    let dir = tempdir().unwrap();
    let server = common::spawn_server(dir.path()).await;
    let client = common::client();

    let res = client
        .get(server.url("/api/branches"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["access-control-allow-origin"], "*");

    let res = client
        .post(server.url("/api/clients"))
        .json(&json!({"referenceNumber": "REF-1"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["access-control-allow-origin"], "*");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_malformed_body_reports_parse_error_in_body() {
    let dir = tempdir().unwrap();
    let server = common::spawn_server(dir.path()).await;
    let client = common::client();

    let res = client
        .post(server.url("/api/clients"))
        .header("Content-Type", "application/json")
        .body("{ this is not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert!(body.get("error").is_some());
    assert!(body.get("success").is_none());

    // The broken payload never reached the collection.
    let clients: Vec<Value> = client
        .get(server.url("/api/clients"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(clients.is_empty());

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_put_without_identity_key_reports_error() {
    let dir = tempdir().unwrap();
    let server = common::spawn_server(dir.path()).await;
    let client = common::client();

    let body: Value = client
        .put(server.url("/api/users"))
        .json(&json!({"username": "keyless"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["error"], "missing field 'id'");

    let body: Value = client
        .put(server.url("/api/clients"))
        .json(&json!({"fullName": "keyless"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["error"], "missing field 'referenceNumber'");

    server.shutdown.trigger();
}
