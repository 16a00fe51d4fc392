//! End-to-end tests for the health contract, driving the full router.

use albergue_frontend::api;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::path::Path;
use tower::ServiceExt;

fn app(mode: &str) -> axum::Router {
    api::router(mode, Path::new("dist"))
}

async fn get_health(app: axum::Router) -> (StatusCode, Option<String>, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/_health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let cache_control = response
        .headers()
        .get(header::CACHE_CONTROL)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    (status, cache_control, body)
}

#[tokio::test]
async fn health_returns_the_wire_contract() {
    let (status, cache_control, body) = get_health(app("test")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("no-cache"));
    assert_eq!(body["ok"], Value::Bool(true));
    assert_eq!(body["mode"], "test");
    assert_eq!(body["service"], "albergue-frontend");
    assert!(body["ts"].is_u64());
}

#[tokio::test]
async fn health_timestamp_strictly_increases() {
    let app = app("test");

    let (_, _, first) = get_health(app.clone()).await;
    let (_, _, second) = get_health(app).await;

    let first_ts = first["ts"].as_u64().unwrap();
    let second_ts = second["ts"].as_u64().unwrap();
    assert!(
        second_ts > first_ts,
        "expected {second_ts} > {first_ts} across repeated calls"
    );
}

#[tokio::test]
async fn health_mode_follows_configuration() {
    let (_, _, body) = get_health(app("production")).await;
    assert_eq!(body["mode"], "production");
}
