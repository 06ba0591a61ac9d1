use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::NavigatorError;
use crate::models::{Building, Location};
use crate::utils::audit::MapAudit;

/// Campus map shipped with the crate
const CAMPUS_JSON: &str = include_str!("../../data/campus.json");

/// Authoring format of a map file
#[derive(Debug, Serialize, Deserialize)]
pub struct MapDocument {
    #[serde(default)]
    pub name: String,
    pub locations: Vec<Location>,
}

/// Parses a map document and builds the building from it
pub fn building_from_json(json: &str) -> Result<Building, NavigatorError> {
    let document: MapDocument = serde_json::from_str(json)?;
    let building = Building::from_locations(document.name, document.locations)?;

    log::info!(
        "Loaded map '{}' with {} locations on {} floors",
        building.name(),
        building.len(),
        building.floors().len()
    );
    report_findings(&building);

    Ok(building)
}

/// Reads a map document from disk
pub fn load_building<P: AsRef<Path>>(path: P) -> Result<Building, NavigatorError> {
    log::info!("Reading map from {}", path.as_ref().display());
    let json = fs::read_to_string(path)?;
    building_from_json(&json)
}

/// The bundled two-floor campus map
pub fn bundled_campus() -> Result<Building, NavigatorError> {
    building_from_json(CAMPUS_JSON)
}

// Authoring mistakes are tolerated by the engine, but worth a warning
fn report_findings(building: &Building) {
    let audit = MapAudit::of(building);

    if !audit.dangling.is_empty() {
        log::warn!(
            "{} connections point to unknown locations: {:?}",
            audit.dangling.len(),
            audit.dangling
        );
    }
    if !audit.one_way.is_empty() {
        log::warn!(
            "{} connections are declared in one direction only",
            audit.one_way.len()
        );
    }
    if !audit.isolated.is_empty() {
        log::warn!("Isolated locations: {:?}", audit.isolated);
    }
    if audit.components > 1 {
        log::warn!("Map splits into {} separate parts", audit.components);
    }
}
