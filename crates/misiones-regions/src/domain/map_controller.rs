//! Hover state machine for the interactive region map.
//!
//! Two phases: `Idle` (tooltip hidden) and `Active(region)` (one region
//! highlighted, tooltip visible). Pointer-leave always precedes the next
//! pointer-enter, so moving between regions passes through `Idle`.

use misiones_core::rng::DeterministicRng;
use serde::Serialize;
use tracing::debug;

use super::fills::{FillAssignment, Viewport, fill_assignment};
use super::geometry::{DEFAULT_TOOLTIP_SIZE, MapGeometry, Size, clamp_to_container, compute_anchor};
use super::region::{Region, RegionCatalog};

/// Current hover phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HoverPhase {
    Idle,
    Active { region_id: String },
}

/// What the tooltip overlay should show.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegionTooltipState {
    /// Region described by the tooltip; kept after hover-exit.
    pub region: Option<Region>,
    /// Anchor x in container space.
    pub x: f64,
    /// Anchor y in container space (tooltip bottom edge).
    pub y: f64,
    /// Whether the tooltip is shown.
    pub visible: bool,
}

/// Binds hover events on province elements to region highlighting and
/// tooltip placement.
pub struct RegionMapController<'a> {
    catalog: &'a RegionCatalog,
    geometry: &'a dyn MapGeometry,
    viewport: Viewport,
    container: Size,
    tooltip_size: Size,
    phase: HoverPhase,
    tooltip: RegionTooltipState,
}

impl<'a> RegionMapController<'a> {
    /// Creates an idle controller for a map rendered in a container of size
    /// `container`.
    #[must_use]
    pub fn new(
        catalog: &'a RegionCatalog,
        geometry: &'a dyn MapGeometry,
        viewport: Viewport,
        container: Size,
    ) -> Self {
        Self {
            catalog,
            geometry,
            viewport,
            container,
            tooltip_size: DEFAULT_TOOLTIP_SIZE,
            phase: HoverPhase::Idle,
            tooltip: RegionTooltipState::default(),
        }
    }

    /// Overrides the assumed tooltip size.
    #[must_use]
    pub fn with_tooltip_size(mut self, tooltip_size: Size) -> Self {
        self.tooltip_size = tooltip_size;
        self
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> &HoverPhase {
        &self.phase
    }

    /// Current tooltip state.
    #[must_use]
    pub fn tooltip(&self) -> &RegionTooltipState {
        &self.tooltip
    }

    /// The highlighted region, if any.
    #[must_use]
    pub fn active_region(&self) -> Option<&'a Region> {
        match &self.phase {
            HoverPhase::Idle => None,
            HoverPhase::Active { region_id } => self.catalog.find(region_id),
        }
    }

    /// Fill colors for the current phase.
    #[must_use]
    pub fn fills(&self) -> FillAssignment {
        let highlighted = match &self.phase {
            HoverPhase::Idle => None,
            HoverPhase::Active { region_id } => Some(region_id.as_str()),
        };
        fill_assignment(self.catalog, highlighted, self.viewport)
    }

    /// Pointer entered the element `sub_unit_id`.
    ///
    /// Highlights the owning region and shows the tooltip at a clamped anchor.
    /// Returns `false` and changes nothing when hover is disabled for the
    /// viewport, when no element with that id is rendered, or when no region
    /// owns the id.
    pub fn on_hover_enter(&mut self, sub_unit_id: &str, rng: &mut dyn DeterministicRng) -> bool {
        if !self.viewport.hover_enabled() {
            return false;
        }
        if self.geometry.bounds_of(sub_unit_id).is_none() {
            debug!(sub_unit_id, "no rendered element, hover ignored");
            return false;
        }
        let Some(region) = self.catalog.resolve_region(sub_unit_id) else {
            debug!(sub_unit_id, "province owned by no region, hover ignored");
            return false;
        };

        if matches!(self.phase, HoverPhase::Active { .. }) {
            self.on_hover_exit();
        }

        let anchor = compute_anchor(region, self.geometry, rng);
        let clamped = clamp_to_container(anchor, self.tooltip_size, self.container);

        self.phase = HoverPhase::Active {
            region_id: region.id.clone(),
        };
        self.tooltip = RegionTooltipState {
            region: Some(region.clone()),
            x: clamped.x,
            y: clamped.y,
            visible: true,
        };
        debug!(sub_unit_id, region_id = %region.id, x = clamped.x, y = clamped.y, "region hovered");
        true
    }

    /// Pointer left a province element: hide the tooltip and restore tints.
    pub fn on_hover_exit(&mut self) {
        self.phase = HoverPhase::Idle;
        self.tooltip.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use misiones_test_support::{MockRng, SequenceRng};

    use super::*;
    use crate::domain::geometry::{BoundingBox, StaticMapGeometry};

    fn container() -> Size {
        Size {
            width: 800.0,
            height: 1000.0,
        }
    }

    fn geometry() -> StaticMapGeometry {
        let bbox = |x, y, width, height| BoundingBox { x, y, width, height };
        [
            ("ARH".to_owned(), bbox(260.0, 120.0, 110.0, 120.0)),
            ("ARP".to_owned(), bbox(270.0, 60.0, 120.0, 80.0)),
            ("ARW".to_owned(), bbox(340.0, 200.0, 100.0, 110.0)),
            ("ARN".to_owned(), bbox(430.0, 150.0, 50.0, 80.0)),
            ("ARS".to_owned(), bbox(250.0, 230.0, 80.0, 190.0)),
            ("XXX".to_owned(), bbox(0.0, 0.0, 10.0, 10.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_hover_enter_on_owned_province_activates_region() {
        // Arrange
        let catalog = RegionCatalog::argentina();
        let geometry = geometry();
        let mut controller =
            RegionMapController::new(&catalog, &geometry, Viewport::Desktop, container());

        // Act
        let changed = controller.on_hover_enter("ARN", &mut MockRng);

        // Assert
        assert!(changed);
        assert_eq!(
            controller.phase(),
            &HoverPhase::Active {
                region_id: "noreste".to_owned()
            }
        );
        let tooltip = controller.tooltip();
        assert!(tooltip.visible);
        assert_eq!(tooltip.region.as_ref().unwrap().id, "noreste");
        assert!((tooltip.x - 370.0).abs() < f64::EPSILON);
        assert!((tooltip.y - 185.0).abs() < f64::EPSILON);

        let fills = controller.fills();
        for id in ["ARH", "ARP", "ARW", "ARN"] {
            assert_eq!(fills.get(id), Some("#1e6f2fff"), "{id} should be highlighted");
        }
        assert_eq!(fills.get("ARS"), Some("rgba(64, 210, 93, 0.6)"));
    }

    #[test]
    fn test_hover_exit_returns_to_idle_and_restores_tints() {
        let catalog = RegionCatalog::argentina();
        let geometry = geometry();
        let mut controller =
            RegionMapController::new(&catalog, &geometry, Viewport::Desktop, container());
        controller.on_hover_enter("ARN", &mut MockRng);

        controller.on_hover_exit();

        assert_eq!(controller.phase(), &HoverPhase::Idle);
        assert!(!controller.tooltip().visible);
        assert!(controller.active_region().is_none());
        assert_eq!(controller.fills().get("ARN"), Some("rgba(30, 111, 47, 0.6)"));
    }

    #[test]
    fn test_hover_on_province_without_element_is_noop() {
        let catalog = RegionCatalog::argentina();
        let geometry = geometry();
        let mut controller =
            RegionMapController::new(&catalog, &geometry, Viewport::Desktop, container());

        // ARB is owned by a region but was not rendered.
        assert!(!controller.on_hover_enter("ARB", &mut MockRng));
        assert_eq!(controller.phase(), &HoverPhase::Idle);
        assert_eq!(controller.tooltip(), &RegionTooltipState::default());
    }

    #[test]
    fn test_hover_on_unowned_element_is_noop() {
        let catalog = RegionCatalog::argentina();
        let geometry = geometry();
        let mut controller =
            RegionMapController::new(&catalog, &geometry, Viewport::Desktop, container());

        assert!(!controller.on_hover_enter("XXX", &mut MockRng));
        assert_eq!(controller.phase(), &HoverPhase::Idle);
    }

    #[test]
    fn test_mobile_viewport_never_shows_tooltip() {
        let catalog = RegionCatalog::argentina();
        let geometry = geometry();
        let mut controller =
            RegionMapController::new(&catalog, &geometry, Viewport::Mobile, container());

        assert!(!controller.on_hover_enter("ARN", &mut MockRng));
        assert!(!controller.tooltip().visible);
        assert_eq!(controller.fills().get("ARN"), Some("rgba(30, 111, 47, 1)"));
    }

    #[test]
    fn test_enter_while_active_passes_through_idle() {
        let catalog = RegionCatalog::argentina();
        let geometry = geometry();
        let mut controller =
            RegionMapController::new(&catalog, &geometry, Viewport::Desktop, container());
        controller.on_hover_enter("ARN", &mut MockRng);

        assert!(controller.on_hover_enter("ARS", &mut MockRng));

        assert_eq!(controller.active_region().unwrap().id, "litoral");
        let fills = controller.fills();
        assert_eq!(fills.get("ARN"), Some("rgba(30, 111, 47, 0.6)"));
        assert_eq!(fills.get("ARS"), Some("#40d25dff"));
    }

    #[test]
    fn test_tooltip_is_clamped_into_small_container() {
        let catalog = RegionCatalog::argentina();
        let geometry = geometry();
        let small = Size {
            width: 400.0,
            height: 300.0,
        };
        let mut controller = RegionMapController::new(&catalog, &geometry, Viewport::Desktop, small);
        // Draw 0.999 pushes x to the far right.
        let mut rng = SequenceRng::new(vec![0.999, 0.5]);

        controller.on_hover_enter("ARN", &mut rng);

        let tooltip = controller.tooltip();
        // Max x is 400 - 125 - 10.
        assert!((tooltip.x - 265.0).abs() < f64::EPSILON);
        assert!((tooltip.y - 185.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_custom_tooltip_size_changes_clamp_bounds() {
        let catalog = RegionCatalog::argentina();
        let geometry = geometry();
        let mut controller = RegionMapController::new(
            &catalog,
            &geometry,
            Viewport::Desktop,
            Size {
                width: 400.0,
                height: 300.0,
            },
        )
        .with_tooltip_size(Size {
            width: 100.0,
            height: 200.0,
        });

        controller.on_hover_enter("ARN", &mut MockRng);

        // Centre (370, 185): x is past the max of 340, y is above the min of 210.
        assert!((controller.tooltip().x - 340.0).abs() < f64::EPSILON);
        assert!((controller.tooltip().y - 210.0).abs() < f64::EPSILON);
    }
}
