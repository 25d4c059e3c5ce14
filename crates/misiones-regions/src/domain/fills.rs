//! Province fill colors as a pure function of catalog, hover and viewport.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::region::{Region, RegionCatalog};

/// Viewport width (CSS px) from which hover interaction is enabled.
pub const DESKTOP_BREAKPOINT: f64 = 900.0;

/// Opacity of the resting tint on desktop, where hover adds emphasis.
pub const DESKTOP_RESTING_OPACITY: f64 = 0.6;

/// Opacity of the resting tint on mobile, where the tint must read at rest.
pub const MOBILE_RESTING_OPACITY: f64 = 1.0;

/// Input class of the rendering device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Viewport {
    Desktop,
    Mobile,
}

impl Viewport {
    /// Classifies a viewport width against `breakpoint`.
    #[must_use]
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Whether pointer hover is a reliable input on this viewport.
    #[must_use]
    pub fn hover_enabled(self) -> bool {
        matches!(self, Self::Desktop)
    }

    /// Opacity of the resting tint.
    #[must_use]
    pub fn resting_opacity(self) -> f64 {
        match self {
            Self::Desktop => DESKTOP_RESTING_OPACITY,
            Self::Mobile => MOBILE_RESTING_OPACITY,
        }
    }
}

/// Fill color per province code, ready for the rendering layer to apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FillAssignment(BTreeMap<String, String>);

impl FillAssignment {
    /// Fill for one province.
    #[must_use]
    pub fn get(&self, sub_unit_id: &str) -> Option<&str> {
        self.0.get(sub_unit_id).map(String::as_str)
    }

    /// Number of provinces assigned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(province, fill)` pairs in province order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn resting_fill(region: &Region, viewport: Viewport) -> String {
    region.rgb().map_or_else(
        |_| region.color.clone(),
        |rgb| rgb.with_opacity(viewport.resting_opacity()),
    )
}

/// Assigns a fill to every province in the catalog.
///
/// Provinces rest at their region's tint for `viewport`. When `highlighted`
/// names a region, its provinces take the region's full base color instead.
/// A province claimed twice keeps the tint of the first claiming region.
#[must_use]
pub fn fill_assignment(
    catalog: &RegionCatalog,
    highlighted: Option<&str>,
    viewport: Viewport,
) -> FillAssignment {
    let mut fills = BTreeMap::new();
    for region in catalog.regions() {
        let tint = resting_fill(region, viewport);
        for sub_unit_id in &region.sub_units {
            fills.entry(sub_unit_id.clone()).or_insert_with(|| tint.clone());
        }
    }

    if let Some(region) = highlighted.and_then(|id| catalog.find(id)) {
        for sub_unit_id in &region.sub_units {
            fills.insert(sub_unit_id.clone(), region.color.clone());
        }
    }

    FillAssignment(fills)
}
