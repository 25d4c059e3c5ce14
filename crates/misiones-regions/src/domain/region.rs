//! Regions and the catalog that groups provinces into them.

use serde::{Deserialize, Serialize};

use super::color::{InvalidColor, Rgb};

/// A named grouping of provinces sharing a color and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Stable identifier, e.g. `noreste`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Base color, `#rrggbb` or `#rrggbbaa`.
    pub color: String,
    /// Province codes owned by this region, in display order.
    pub sub_units: Vec<String>,
    /// Human-readable list of the provinces.
    pub description: String,
}

impl Region {
    /// Returns whether `sub_unit_id` belongs to this region.
    #[must_use]
    pub fn owns(&self, sub_unit_id: &str) -> bool {
        self.sub_units.iter().any(|id| id == sub_unit_id)
    }

    /// Parsed base color.
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` if `color` is malformed.
    pub fn rgb(&self) -> Result<Rgb, InvalidColor> {
        Rgb::parse_hex(&self.color)
    }
}

/// A province code claimed by more than one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateMembership {
    /// The contested province code.
    pub sub_unit_id: String,
    /// Claiming regions in catalog order; the first one wins resolution.
    pub region_ids: Vec<String>,
}

/// The immutable, ordered list of regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

impl RegionCatalog {
    /// Builds a catalog from regions, checking every color.
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` for the first region with a malformed color.
    pub fn new(regions: Vec<Region>) -> Result<Self, InvalidColor> {
        for region in &regions {
            region.rgb()?;
        }
        Ok(Self { regions })
    }

    /// The nine coordination regions of Argentina keyed by ISO 3166-2 province
    /// codes.
    #[must_use]
    pub fn argentina() -> Self {
        let region = |id: &str, name: &str, color: &str, sub_units: &[&str], description: &str| {
            Region {
                id: id.to_owned(),
                name: name.to_owned(),
                color: color.to_owned(),
                sub_units: sub_units.iter().map(|&code| code.to_owned()).collect(),
                description: description.to_owned(),
            }
        };

        Self {
            regions: vec![
                region("noroeste", "Noroeste", "#FF5733", &["ARA", "ARY", "ART"], "Salta, Jujuy, Tucumán"),
                region(
                    "noreste",
                    "Noreste",
                    "#1e6f2fff",
                    &["ARH", "ARP", "ARW", "ARN"],
                    "Chaco, Formosa, Corrientes, Misiones",
                ),
                region("litoral", "Litoral", "#40d25dff", &["ARS", "ARE"], "Santa Fe, Entre Ríos"),
                region(
                    "centro",
                    "Centro",
                    "#fcb040",
                    &["ARK", "ARF", "ARG", "ARX"],
                    "Catamarca, La Rioja, Santiago del Estero, Córdoba",
                ),
                region("cuyo", "Cuyo", "#bd634fff", &["ARD", "ARJ", "ARM"], "San Luis, San Juan, Mendoza"),
                region(
                    "buenos-aires-cerca",
                    "Buenos Aires Cerca",
                    "#222073ff",
                    &["ARC"],
                    "Ciudad de Buenos Aires",
                ),
                region(
                    "buenos-aires-lejos",
                    "Buenos Aires Lejos",
                    "#4972b2",
                    &["ARB"],
                    "Provincia de Buenos Aires",
                ),
                region(
                    "sur",
                    "Sur",
                    "#7b5ba1",
                    &["ARL", "ARQ", "ARR", "ARU"],
                    "La Pampa, Neuquén, Río Negro, Chubut",
                ),
                region("austral", "Austral", "#49a6a6", &["ARZ", "ARV"], "Santa Cruz, Tierra del Fuego"),
            ],
        }
    }

    /// All regions in catalog order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Looks a region up by its identifier.
    #[must_use]
    pub fn find(&self, region_id: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.id == region_id)
    }

    /// Returns the first region owning `sub_unit_id`, or `None` when no region
    /// claims it.
    #[must_use]
    pub fn resolve_region(&self, sub_unit_id: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.owns(sub_unit_id))
    }

    /// Lists province codes claimed by more than one region.
    #[must_use]
    pub fn duplicate_memberships(&self) -> Vec<DuplicateMembership> {
        let mut duplicates: Vec<DuplicateMembership> = Vec::new();
        for region in &self.regions {
            for sub_unit_id in &region.sub_units {
                if duplicates.iter().any(|d| &d.sub_unit_id == sub_unit_id) {
                    continue;
                }
                let region_ids: Vec<String> = self
                    .regions
                    .iter()
                    .filter(|candidate| candidate.owns(sub_unit_id))
                    .map(|candidate| candidate.id.clone())
                    .collect();
                if region_ids.len() > 1 {
                    duplicates.push(DuplicateMembership {
                        sub_unit_id: sub_unit_id.clone(),
                        region_ids,
                    });
                }
            }
        }
        duplicates
    }
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self::argentina()
    }
}
