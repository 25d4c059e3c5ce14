//! Routes for the region map context.

use axum::extract::{Path, Query, State};
use axum::{Json, Router, routing::get, routing::post};
use misiones_core::error::DomainError;
use misiones_regions::application::query_handlers::{
    self, FillView, HoverQuery, HoverView,
};
use misiones_regions::domain::fills::Viewport;
use misiones_regions::domain::geometry::{MapGeometry, Size, StaticMapGeometry};
use misiones_regions::domain::region::Region;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of GET /fills.
#[derive(Debug, Deserialize)]
pub struct FillParams {
    /// Client viewport width in CSS px; desktop when absent.
    pub viewport_width: Option<f64>,
}

/// Request body for POST /hover.
#[derive(Debug, Deserialize)]
pub struct HoverRequest {
    /// Hovered element id.
    pub sub_unit_id: String,
    /// Client viewport width in CSS px.
    pub viewport_width: f64,
    /// Size of the map container.
    pub container: Size,
    /// Measured tooltip size; the default size when absent.
    #[serde(default)]
    pub tooltip: Option<Size>,
    /// Client-measured province boxes, replacing the configured geometry.
    #[serde(default)]
    pub geometry: Option<StaticMapGeometry>,
}

fn viewport(state: &AppState, width: Option<f64>) -> Viewport {
    width.map_or(Viewport::Desktop, |w| {
        Viewport::from_width(w, state.settings.desktop_breakpoint)
    })
}

/// GET /
async fn list_regions(State(state): State<AppState>) -> Json<Vec<Region>> {
    Json(query_handlers::list_regions(&state.region_map.catalog))
}

/// GET /resolve/{sub_unit_id}
#[instrument(skip(state))]
async fn resolve_region(
    State(state): State<AppState>,
    Path(sub_unit_id): Path<String>,
) -> Result<Json<Region>, ApiError> {
    let region = query_handlers::resolve_sub_unit(&state.region_map.catalog, &sub_unit_id)?;
    Ok(Json(region))
}

/// GET /fills
async fn resting_fills(
    State(state): State<AppState>,
    Query(params): Query<FillParams>,
) -> Json<FillView> {
    let viewport = viewport(&state, params.viewport_width);
    Json(query_handlers::resting_fills(&state.region_map.catalog, viewport))
}

/// POST /hover
#[instrument(skip(state, request), fields(sub_unit_id = %request.sub_unit_id))]
async fn preview_hover(
    State(state): State<AppState>,
    Json(request): Json<HoverRequest>,
) -> Result<Json<HoverView>, ApiError> {
    let query = HoverQuery {
        viewport: viewport(&state, Some(request.viewport_width)),
        sub_unit_id: request.sub_unit_id,
        container: request.container,
        tooltip: request.tooltip,
    };
    let geometry: &dyn MapGeometry = match &request.geometry {
        Some(measured) => measured,
        None => &state.region_map.geometry,
    };

    let view = {
        let mut rng = state
            .rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        query_handlers::preview_hover(&query, &state.region_map.catalog, geometry, &mut *rng)
    };
    debug!(phase = ?view.phase, "hover previewed");

    Ok(Json(view))
}

/// Returns the router for the region map context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_regions))
        .route("/resolve/{sub_unit_id}", get(resolve_region))
        .route("/fills", get(resting_fills))
        .route("/hover", post(preview_hover))
}
