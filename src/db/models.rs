//! Persisted envelope and legacy schema shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Area, Building, Coordinates};

/// Schema version written by this build.
pub const CURRENT_VERSION: u32 = 2;

/// The versioned envelope holding the whole delivery state.
///
/// Exactly one schema version is current; older versions are only ever
/// read (see [`super::migration`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub version: u32,
    pub buildings: Vec<Building>,
}

impl PersistedState {
    /// Wrap buildings in a current-version envelope.
    pub fn new(buildings: Vec<Building>) -> Self {
        Self {
            version: CURRENT_VERSION,
            buildings,
        }
    }

    /// Look up a building by id.
    pub fn building(&self, building_id: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == building_id)
    }

    /// Return a copy with `building` swapped in by id.
    pub fn with_building(&self, building: Building) -> Self {
        let buildings = self
            .buildings
            .iter()
            .map(|b| {
                if b.id == building.id {
                    building.clone()
                } else {
                    b.clone()
                }
            })
            .collect();
        Self {
            version: self.version,
            buildings,
        }
    }

    /// Return a copy with `buildings` appended.
    pub fn with_buildings_added(&self, added: Vec<Building>) -> Self {
        let mut buildings = self.buildings.clone();
        buildings.extend(added);
        Self {
            version: self.version,
            buildings,
        }
    }
}

// ==================== Legacy schema (version 1, read-only) ====================

/// Version-1 envelope. Apartments carried a boolean `delivered` flag
/// instead of the status lifecycle.
#[derive(Debug, Clone, Deserialize)]
pub struct StateV1 {
    pub version: u32,
    #[serde(default)]
    pub buildings: Vec<BuildingV1>,
}

/// Version-1 building shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingV1 {
    pub id: String,
    pub name: String,
    pub address: String,
    pub area: Area,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub coords: Option<Coordinates>,
    #[serde(default)]
    pub priority: Option<i32>,
    #[serde(default)]
    pub apartments: Vec<ApartmentV1>,
}

/// Version-1 apartment shape. Ids were optional in old exports.
#[derive(Debug, Clone, Deserialize)]
pub struct ApartmentV1 {
    #[serde(default)]
    pub id: Option<String>,
    pub label: String,
    #[serde(default)]
    pub delivered: bool,
}
