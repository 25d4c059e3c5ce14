//! Misiones site — HTTP API.
//!
//! Exposes the news listing, the region map and the contact form as JSON
//! endpoints under `/api/v1`.

use axum::Router;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use state::AppState;

/// Builds the full router with every context mounted.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/news", routes::news::router())
        .nest("/api/v1/regions", routes::regions::router())
        .nest("/api/v1/contact", routes::contact::router())
        .with_state(state)
}
