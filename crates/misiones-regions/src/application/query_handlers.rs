//! Query handlers for the region map.
//!
//! Every handler is synchronous and stateless: a hover preview runs a fresh
//! controller through one hover-enter and reports the resulting state.

use misiones_core::error::DomainError;
use misiones_core::rng::DeterministicRng;
use serde::Serialize;

use crate::domain::fills::{FillAssignment, Viewport, fill_assignment};
use crate::domain::geometry::{MapGeometry, Size};
use crate::domain::map_controller::{HoverPhase, RegionMapController, RegionTooltipState};
use crate::domain::region::{Region, RegionCatalog};

/// Resting fills for a viewport.
#[derive(Debug, Serialize)]
pub struct FillView {
    /// Viewport class the fills were computed for.
    pub viewport: Viewport,
    /// Whether the client should bind hover handlers.
    pub hover_enabled: bool,
    /// Fill per province code.
    pub fills: FillAssignment,
}

/// Input of a hover preview.
#[derive(Debug, Clone)]
pub struct HoverQuery {
    /// Hovered element id.
    pub sub_unit_id: String,
    /// Viewport class of the client.
    pub viewport: Viewport,
    /// Size of the map container.
    pub container: Size,
    /// Measured tooltip size, if the client knows it.
    pub tooltip: Option<Size>,
}

/// Result of a hover preview.
#[derive(Debug, Serialize)]
pub struct HoverView {
    /// Phase after the hover-enter.
    pub phase: HoverPhase,
    /// Tooltip to display.
    pub tooltip: RegionTooltipState,
    /// Fill per province code.
    pub fills: FillAssignment,
}

/// Returns the catalog in display order.
#[must_use]
pub fn list_regions(catalog: &RegionCatalog) -> Vec<Region> {
    catalog.regions().to_vec()
}

/// Returns the region owning `sub_unit_id`.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no region owns the id.
pub fn resolve_sub_unit(catalog: &RegionCatalog, sub_unit_id: &str) -> Result<Region, DomainError> {
    catalog
        .resolve_region(sub_unit_id)
        .cloned()
        .ok_or_else(|| DomainError::NotFound(format!("no region owns province {sub_unit_id}")))
}

/// Fills with no region hovered.
#[must_use]
pub fn resting_fills(catalog: &RegionCatalog, viewport: Viewport) -> FillView {
    FillView {
        viewport,
        hover_enabled: viewport.hover_enabled(),
        fills: fill_assignment(catalog, None, viewport),
    }
}

/// Runs one hover-enter against an idle map and reports the outcome. A no-op
/// hover (unrendered, unowned, or mobile) reports the idle state.
pub fn preview_hover(
    query: &HoverQuery,
    catalog: &RegionCatalog,
    geometry: &dyn MapGeometry,
    rng: &mut dyn DeterministicRng,
) -> HoverView {
    let mut controller = RegionMapController::new(catalog, geometry, query.viewport, query.container);
    if let Some(tooltip) = query.tooltip {
        controller = controller.with_tooltip_size(tooltip);
    }

    controller.on_hover_enter(&query.sub_unit_id, rng);

    HoverView {
        phase: controller.phase().clone(),
        tooltip: controller.tooltip().clone(),
        fills: controller.fills(),
    }
}
