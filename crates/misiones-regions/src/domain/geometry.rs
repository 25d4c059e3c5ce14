//! Map geometry: bounding boxes, tooltip anchoring and container clamping.
//!
//! All coordinates are in the map container's local space, y growing
//! downwards.

use std::collections::HashMap;

use misiones_core::rng::DeterministicRng;
use serde::{Deserialize, Serialize};

use super::region::Region;

/// Anchor used when none of a region's provinces has geometry.
pub const DEFAULT_ANCHOR: Point = Point { x: 400.0, y: 500.0 };

/// Maximum random displacement of an anchor from the region centre, per axis.
pub const ANCHOR_JITTER: f64 = 40.0;

/// Minimum gap kept between the tooltip and each container edge.
pub const EDGE_PADDING: f64 = 10.0;

/// Tooltip size assumed when the caller does not measure it.
pub const DEFAULT_TOOLTIP_SIZE: Size = Size {
    width: 250.0,
    height: 120.0,
};

/// A point in container space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned bounding box of a rendered province.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Smallest box enclosing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }

    /// Centre point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

/// Read access to the rendered map: the bounding box of a province element.
///
/// `None` means no element with that id was rendered.
pub trait MapGeometry: Send + Sync {
    /// Bounding box of the element with id `sub_unit_id`.
    fn bounds_of(&self, sub_unit_id: &str) -> Option<BoundingBox>;
}

/// In-memory geometry keyed by province code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticMapGeometry {
    boxes: HashMap<String, BoundingBox>,
}

impl StaticMapGeometry {
    /// Wraps a map of province code to bounding box.
    #[must_use]
    pub fn new(boxes: HashMap<String, BoundingBox>) -> Self {
        Self { boxes }
    }

    /// Number of provinces with geometry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether no province has geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl MapGeometry for StaticMapGeometry {
    fn bounds_of(&self, sub_unit_id: &str) -> Option<BoundingBox> {
        self.boxes.get(sub_unit_id).copied()
    }
}

impl FromIterator<(String, BoundingBox)> for StaticMapGeometry {
    fn from_iter<I: IntoIterator<Item = (String, BoundingBox)>>(iter: I) -> Self {
        Self {
            boxes: iter.into_iter().collect(),
        }
    }
}

/// Union of the bounding boxes of every province of `region` that has
/// geometry, or `None` if none has.
#[must_use]
pub fn region_bounds(region: &Region, geometry: &dyn MapGeometry) -> Option<BoundingBox> {
    region
        .sub_units
        .iter()
        .filter_map(|id| geometry.bounds_of(id))
        .reduce(|acc, bounds| acc.union(&bounds))
}

/// Tooltip anchor for `region`: the centre of its provinces' combined bounds,
/// displaced by up to `ANCHOR_JITTER` on each axis so repeated hovers do not
/// land on the same spot. Falls back to `DEFAULT_ANCHOR` without drawing from
/// the RNG when the region has no geometry.
pub fn compute_anchor(
    region: &Region,
    geometry: &dyn MapGeometry,
    rng: &mut dyn DeterministicRng,
) -> Point {
    let Some(bounds) = region_bounds(region, geometry) else {
        return DEFAULT_ANCHOR;
    };
    let center = bounds.center();
    Point {
        x: center.x + rng.symmetric_offset(ANCHOR_JITTER),
        y: center.y + rng.symmetric_offset(ANCHOR_JITTER),
    }
}

/// Shifts `anchor` so a tooltip of size `tooltip`, centred horizontally on the
/// anchor and sitting above it, stays `EDGE_PADDING` away from every
/// container edge. Axes are handled independently and the tooltip is never
/// resized. When the container is too small to fit the padded tooltip the
/// left and top edges win.
#[must_use]
pub fn clamp_to_container(anchor: Point, tooltip: Size, container: Size) -> Point {
    let min_x = tooltip.width / 2.0 + EDGE_PADDING;
    let max_x = container.width - tooltip.width / 2.0 - EDGE_PADDING;
    let min_y = tooltip.height + EDGE_PADDING;
    let max_y = container.height - EDGE_PADDING;

    Point {
        x: clamp_axis(anchor.x, min_x, max_x),
        y: clamp_axis(anchor.y, min_y, max_y),
    }
}

fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
