//! Routes for the news context.

use axum::extract::{Path, Query, State};
use axum::http::header::{ETAG, IF_NONE_MATCH};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get, routing::post};
use misiones_core::command::Command;
use misiones_news::application::command_handlers::{
    LoadNewsResult, ensure_news_loaded, handle_load_news,
};
use misiones_news::application::query_handlers::{
    self, FeedStatusView, NewsCardView, NewsDetailView,
};
use misiones_news::domain::commands::LoadNews;
use misiones_news::domain::pagination::DEFAULT_LATEST_COUNT;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of GET /.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// 1-based page, 1 when absent.
    pub page: Option<usize>,
}

/// Query string of GET /latest.
#[derive(Debug, Default, Deserialize)]
pub struct LatestParams {
    /// Number of items, 5 when absent.
    pub n: Option<usize>,
}

async fn ensure_loaded(state: &AppState) -> Result<(), ApiError> {
    ensure_news_loaded(&state.news_feed, &state.news_source, &state.clock).await?;
    Ok(())
}

fn etag_for(hash: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!("\"{hash}\"")).ok()
}

/// GET /
#[instrument(skip(state, headers))]
async fn list_news(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    ensure_loaded(&state).await?;

    let page = params.page.unwrap_or(1);
    let feed = state.news_feed.read().await;
    let view = query_handlers::get_news_page(
        &feed,
        page,
        state.settings.news_page_size,
        DEFAULT_LATEST_COUNT,
    )?;
    drop(feed);

    let etag = view.version_hash.as_deref().and_then(etag_for);
    if let Some(etag) = etag {
        if headers.get(IF_NONE_MATCH) == Some(&etag) {
            return Ok((StatusCode::NOT_MODIFIED, [(ETAG, etag)]).into_response());
        }
        return Ok(([(ETAG, etag)], Json(view)).into_response());
    }
    Ok(Json(view).into_response())
}

/// GET /latest
#[instrument(skip(state))]
async fn latest_news(
    State(state): State<AppState>,
    Query(params): Query<LatestParams>,
) -> Result<Json<Vec<NewsCardView>>, ApiError> {
    ensure_loaded(&state).await?;

    let feed = state.news_feed.read().await;
    let latest = query_handlers::get_latest_news(&feed, params.n.unwrap_or(DEFAULT_LATEST_COUNT))?;
    Ok(Json(latest))
}

/// GET /status
async fn feed_status(State(state): State<AppState>) -> Json<FeedStatusView> {
    let feed = state.news_feed.read().await;
    Json(query_handlers::get_feed_status(&feed))
}

/// GET /{id}
#[instrument(skip(state))]
async fn news_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<NewsDetailView>, ApiError> {
    ensure_loaded(&state).await?;

    let feed = state.news_feed.read().await;
    let detail = query_handlers::get_news_detail(&feed, id)?;
    Ok(Json(detail))
}

/// POST /reload
#[instrument(skip(state))]
async fn reload_news(State(state): State<AppState>) -> Result<Json<LoadNewsResult>, ApiError> {
    let command = LoadNews::new();

    info!(correlation_id = %command.correlation_id(), "handling reload_news command");

    let result =
        handle_load_news(&command, &state.news_feed, &state.news_source, &state.clock).await?;

    Ok(Json(result))
}

/// Returns the router for the news context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_news))
        .route("/latest", get(latest_news))
        .route("/status", get(feed_status))
        .route("/reload", post(reload_news))
        .route("/{id}", get(news_detail))
}
