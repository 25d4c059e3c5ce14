//! Integration tests for the contact form context.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use misiones_test_support::{RecordingMessageRelay, StubNewsSource};
use serde_json::json;

#[tokio::test]
async fn test_contact_submission_reaches_relay() {
    let relay = Arc::new(RecordingMessageRelay::new());
    let state = common::test_state(Arc::new(StubNewsSource::new(vec![])), relay.clone());

    let (status, json) = common::post_json(
        misiones_api::app(state),
        "/api/v1/contact",
        &json!({
            "name": "  Pedro ",
            "email": "pedro@example.org",
            "message": "Consulta sobre la misión en Salta."
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(json["dismiss_at"], "2026-01-15T10:00:05Z");
    let delivered = relay.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].name, "Pedro");
}

#[tokio::test]
async fn test_blank_form_reports_all_fields() {
    let (status, json) = common::post_json(
        common::build_default_app(),
        "/api/v1/contact",
        &json!({ "name": "", "email": "", "message": "" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("El nombre es requerido"));
    assert!(message.contains("El email es requerido"));
    assert!(message.contains("El mensaje es requerido"));
    let fields: Vec<&str> = json["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "email", "message"]);
}
