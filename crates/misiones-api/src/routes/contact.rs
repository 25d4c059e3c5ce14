//! Routes for the contact form context.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use misiones_contact::application::command_handlers::{SubmitOutcome, handle_submit_contact};
use misiones_contact::domain::commands::SubmitContact;
use misiones_contact::domain::form::ContactForm;
use misiones_core::command::Command;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /
#[instrument(skip_all)]
async fn submit_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<SubmitOutcome>, ApiError> {
    let command = SubmitContact::new(form);

    info!(correlation_id = %command.correlation_id(), "handling submit_contact command");

    let outcome = handle_submit_contact(
        &command,
        state.message_relay.as_ref(),
        state.clock.as_ref(),
    )
    .await?;

    Ok(Json(outcome))
}

/// Returns the router for the contact context.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(submit_contact))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{TimeZone, Utc};
    use http_body_util::BodyExt;
    use misiones_core::clock::Clock;
    use misiones_core::relay::MessageRelay;
    use misiones_core::rng::DeterministicRng;
    use misiones_regions::application::map_loader::RegionMap;
    use misiones_test_support::{
        FailingMessageRelay, FixedClock, MockRng, RecordingMessageRelay, StubNewsSource,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::state::Settings;

    fn app_state_with(message_relay: Arc<dyn MessageRelay>) -> AppState {
        let clock: Arc<dyn Clock + Send + Sync> = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        ));
        let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(MockRng));
        AppState::new(
            clock,
            rng,
            Arc::new(StubNewsSource::new(vec![])),
            message_relay,
            RegionMap::bundled().unwrap(),
            Settings::default(),
        )
    }

    async fn submit(state: AppState, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();
        let response = router().with_state(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn valid_body() -> Value {
        json!({
            "name": "Ana",
            "email": "ana@example.org",
            "message": "Quiero participar."
        })
    }

    #[tokio::test]
    async fn test_submit_contact_returns_success_banner() {
        // Arrange
        let relay = Arc::new(RecordingMessageRelay::new());
        let state = app_state_with(relay.clone());

        // Act
        let (status, json) = submit(state, &valid_body()).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "success");
        assert_eq!(json["dismiss_at"], "2026-03-01T12:00:05Z");
        assert_eq!(relay.delivered().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_contact_invalid_email_is_400() {
        let relay = Arc::new(RecordingMessageRelay::new());
        let state = app_state_with(relay.clone());

        let (status, json) = submit(
            state,
            &json!({ "name": "Ana", "email": "ana", "message": "Hola" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
        assert_eq!(json["fields"].as_array().unwrap().len(), 1);
        assert_eq!(json["fields"][0]["field"], "email");
        assert_eq!(json["fields"][0]["message"], "El formato del email no es válido");
        assert!(relay.delivered().is_empty());
    }

    #[tokio::test]
    async fn test_relay_failure_echoes_form() {
        let (status, json) = submit(app_state_with(Arc::new(FailingMessageRelay)), &valid_body()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "error");
        assert_eq!(json["form"]["email"], "ana@example.org");
    }
}
