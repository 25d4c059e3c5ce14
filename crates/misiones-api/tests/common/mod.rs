//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use misiones_core::clock::Clock;
use misiones_core::news::NewsSource;
use misiones_core::relay::MessageRelay;
use misiones_core::rng::DeterministicRng;
use misiones_regions::application::map_loader::RegionMap;
use misiones_test_support::{FixedClock, MockRng, RecordingMessageRelay, StubNewsSource};
use tower::ServiceExt;

use misiones_api::state::{AppState, Settings};

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock + Send + Sync> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build state with the given collaborators, deterministic Clock/RNG and the
/// bundled region map.
pub fn test_state(news_source: Arc<dyn NewsSource>, message_relay: Arc<dyn MessageRelay>) -> AppState {
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(MockRng));
    AppState::new(
        fixed_clock(),
        rng,
        news_source,
        message_relay,
        RegionMap::bundled().unwrap(),
        Settings::default(),
    )
}

/// Build the full app router over `news_source`.
pub fn build_test_app(news_source: Arc<dyn NewsSource>) -> Router {
    misiones_api::app(test_state(news_source, Arc::new(RecordingMessageRelay::new())))
}

/// Build the full app router with an empty news collection.
pub fn build_default_app() -> Router {
    build_test_app(Arc::new(StubNewsSource::new(vec![])))
}

async fn into_json(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    into_json(app, request).await
}

/// Send a POST request without a body and return the response.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    into_json(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    into_json(app, request).await
}
