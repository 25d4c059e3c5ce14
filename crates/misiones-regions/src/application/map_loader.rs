//! Loading the region catalog and province geometry from YAML.
//!
//! ```yaml
//! regions:            # optional, defaults to the built-in catalog
//!   - id: noreste
//!     name: Noreste
//!     color: "#1e6f2f"
//!     sub_units: [ARH, ARP, ARW, ARN]
//!     description: Chaco, Formosa, Corrientes, Misiones
//! geometry:
//!   ARN: { x: 430, y: 150, width: 50, height: 80 }
//! ```

use std::path::Path;

use misiones_core::error::DomainError;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::geometry::{MapGeometry, StaticMapGeometry};
use crate::domain::region::{Region, RegionCatalog};

const BUNDLED_ARGENTINA: &str = include_str!("../../data/argentina.yaml");

#[derive(Debug, Deserialize)]
struct RegionMapFile {
    #[serde(default)]
    regions: Option<Vec<Region>>,
    #[serde(default)]
    geometry: StaticMapGeometry,
}

/// A region catalog together with the geometry of the rendered map.
#[derive(Debug, Clone)]
pub struct RegionMap {
    /// Regions and their provinces.
    pub catalog: RegionCatalog,
    /// Bounding box per rendered province.
    pub geometry: StaticMapGeometry,
}

impl RegionMap {
    /// The built-in catalog with the bundled Argentina map geometry.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the bundled file is corrupt.
    pub fn bundled() -> Result<Self, DomainError> {
        parse_region_map(BUNDLED_ARGENTINA)
    }
}

/// Parses a region map document.
///
/// Duplicate province membership is logged, not rejected; resolution keeps
/// first-match semantics.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` for malformed YAML and
/// `DomainError::Validation` for malformed region colors.
pub fn parse_region_map(yaml: &str) -> Result<RegionMap, DomainError> {
    let file: RegionMapFile = serde_yaml::from_str(yaml)
        .map_err(|e| DomainError::Infrastructure(format!("region map parse failed: {e}")))?;

    let catalog = match file.regions {
        Some(regions) => {
            RegionCatalog::new(regions).map_err(|e| DomainError::Validation(e.to_string()))?
        }
        None => RegionCatalog::argentina(),
    };

    for duplicate in catalog.duplicate_memberships() {
        warn!(
            sub_unit_id = %duplicate.sub_unit_id,
            regions = ?duplicate.region_ids,
            "province claimed by several regions; the first one wins"
        );
    }
    for region in catalog.regions() {
        for sub_unit_id in &region.sub_units {
            if file.geometry.bounds_of(sub_unit_id).is_none() {
                debug!(%sub_unit_id, region_id = %region.id, "province has no geometry");
            }
        }
    }

    info!(
        regions = catalog.regions().len(),
        provinces_with_geometry = file.geometry.len(),
        "region map loaded"
    );

    Ok(RegionMap {
        catalog,
        geometry: file.geometry,
    })
}

/// Reads and parses a region map file.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the file cannot be read, plus the
/// errors of [`parse_region_map`].
pub fn load_region_map(path: &Path) -> Result<RegionMap, DomainError> {
    let yaml = std::fs::read_to_string(path).map_err(|e| {
        DomainError::Infrastructure(format!("cannot read region map {}: {e}", path.display()))
    })?;
    parse_region_map(&yaml)
}
