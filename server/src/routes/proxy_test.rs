use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::get;
use serde_json::{Value, json};

use super::*;
use crate::routes::api_routes;

// =============================================================
// Helpers
// =============================================================

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Backend stand-in that reports back what it received.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<Value> {
    Json(json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "contentType": headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        "host": headers.get(header::HOST).and_then(|v| v.to_str().ok()),
        "body": String::from_utf8_lossy(&body),
    }))
}

fn state_for(backend_url: &str, http: reqwest::Client, max_body_bytes: usize) -> AppState {
    AppState { http, backend_url: backend_url.to_owned(), max_body_bytes }
}

async fn spawn_proxy(backend_url: &str) -> String {
    spawn(api_routes(state_for(backend_url, reqwest::Client::new(), 1024 * 1024))).await
}

// =============================================================
// target_url
// =============================================================

#[test]
fn target_url_strips_api_prefix_and_keeps_query() {
    let uri: Uri = "/api/horses?name=Wen&sex=FEMALE".parse().unwrap();
    assert_eq!(target_url("http://backend:8080", &uri), "http://backend:8080/horses?name=Wen&sex=FEMALE");
}

#[test]
fn target_url_keeps_nested_paths() {
    let uri: Uri = "/api/horses/-1/family?gen=3".parse().unwrap();
    assert_eq!(target_url("http://b", &uri), "http://b/horses/-1/family?gen=3");
}

#[test]
fn target_url_without_prefix_is_passed_through() {
    let uri: Uri = "/owners".parse().unwrap();
    assert_eq!(target_url("http://b", &uri), "http://b/owners");
}

#[test]
fn target_url_bare_prefix_maps_to_backend_root() {
    let uri: Uri = "/api?x=1".parse().unwrap();
    assert_eq!(target_url("http://b", &uri), "http://b/?x=1");
}

// =============================================================
// forward
// =============================================================

#[tokio::test]
async fn forwards_method_path_query_and_body() {
    let backend = spawn(Router::new().fallback(echo)).await;
    let proxy = spawn_proxy(&backend).await;

    let resp = reqwest::Client::new()
        .put(format!("{proxy}/api/horses/7?force=true"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(r#"{"name":"Wendy"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let seen: Value = resp.json().await.unwrap();
    assert_eq!(seen["method"], "PUT");
    assert_eq!(seen["uri"], "/horses/7?force=true");
    assert_eq!(seen["contentType"], "application/json");
    assert_eq!(seen["body"], r#"{"name":"Wendy"}"#);
}

#[tokio::test]
async fn host_header_is_not_copied_from_browser() {
    let backend = spawn(Router::new().fallback(echo)).await;
    let proxy = spawn_proxy(&backend).await;

    let seen: Value = reqwest::get(format!("{proxy}/api/owners")).await.unwrap().json().await.unwrap();
    let backend_host = backend.trim_start_matches("http://");
    assert_eq!(seen["host"], backend_host);
}

#[tokio::test]
async fn backend_error_status_and_body_pass_through() {
    let backend = spawn(Router::new().route(
        "/horses/{id}",
        get(|| async { (StatusCode::NOT_FOUND, Json(json!({"message": "No horse with ID 99 found"}))) }),
    ))
    .await;
    let proxy = spawn_proxy(&backend).await;

    let resp = reqwest::get(format!("{proxy}/api/horses/99")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "No horse with ID 99 found");
}

#[tokio::test]
async fn unreachable_backend_answers_502_with_error_body() {
    let proxy = spawn_proxy("http://127.0.0.1:1").await;

    let resp = reqwest::get(format!("{proxy}/api/horses")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().starts_with("backend unreachable"));
    assert_eq!(body["errors"], json!([]));
}

#[tokio::test]
async fn slow_backend_answers_504() {
    let backend = spawn(Router::new().fallback(|| async {
        tokio::time::sleep(Duration::from_secs(2)).await;
        "late"
    }))
    .await;
    let http = reqwest::Client::builder().timeout(Duration::from_millis(200)).build().unwrap();
    let proxy = spawn(api_routes(state_for(&backend, http, 1024))).await;

    let resp = reqwest::get(format!("{proxy}/api/horses")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let backend = spawn(Router::new().fallback(echo)).await;
    let proxy = spawn(api_routes(state_for(&backend, reqwest::Client::new(), 16))).await;

    let resp = reqwest::Client::new()
        .post(format!("{proxy}/api/owners"))
        .body("x".repeat(64))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn healthz_is_ok() {
    let proxy = spawn_proxy("http://127.0.0.1:1").await;
    let resp = reqwest::get(format!("{proxy}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
