//! Schema migration and raw-content decoding.

use tracing::warn;
use uuid::Uuid;

use super::models::{PersistedState, StateV1, CURRENT_VERSION};
use crate::models::{Apartment, Building, DeliveryStatus};

/// Outcome of decoding raw persisted content.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// Content was already at the current version.
    Current(PersistedState),
    /// Content was a recognized older version; the migrated result must be
    /// written back by the caller.
    Migrated(PersistedState),
    /// Content was absent, unparseable or of unknown version; the caller
    /// receives a freshly seeded state instead.
    Fallback,
}

/// Decode raw JSON content into a current-version state.
///
/// Never fails: anything unreadable resolves to [`Decoded::Fallback`] so
/// the read path can degrade to the seed.
pub fn decode_state(raw: &str) -> Decoded {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Persisted state is not valid JSON, falling back to seed: {}", e);
            return Decoded::Fallback;
        }
    };

    match value.get("version").and_then(|v| v.as_u64()) {
        Some(v) if v == CURRENT_VERSION as u64 => {
            match serde_json::from_value::<PersistedState>(value) {
                Ok(state) => Decoded::Current(state),
                Err(e) => {
                    warn!("Version {} envelope failed to decode, falling back to seed: {}", CURRENT_VERSION, e);
                    Decoded::Fallback
                }
            }
        }
        Some(1) => match serde_json::from_value::<StateV1>(value) {
            Ok(old) => Decoded::Migrated(migrate_v1_to_v2(old)),
            Err(e) => {
                warn!("Version 1 envelope failed to decode, falling back to seed: {}", e);
                Decoded::Fallback
            }
        },
        other => {
            warn!("Unrecognized state version {:?}, falling back to seed", other);
            Decoded::Fallback
        }
    }
}

/// Migrate a version-1 state to the current schema.
///
/// Pure function of its input: building identity fields and timestamps are
/// preserved verbatim, `delivered: true` becomes [`DeliveryStatus::Delivered`]
/// and `delivered: false` becomes [`DeliveryStatus::Pending`]. Apartments
/// missing an id get a fresh unique one. Callers never invoke this on
/// current-version data; [`decode_state`] guards that with the version
/// check.
pub fn migrate_v1_to_v2(old: StateV1) -> PersistedState {
    let buildings = old
        .buildings
        .into_iter()
        .map(|b| Building {
            id: b.id,
            name: b.name,
            address: b.address,
            area: b.area,
            updated_at: b.updated_at,
            coords: b.coords,
            priority: b.priority,
            apartments: b
                .apartments
                .into_iter()
                .map(|a| Apartment {
                    id: a.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                    label: a.label,
                    status: if a.delivered {
                        DeliveryStatus::Delivered
                    } else {
                        DeliveryStatus::Pending
                    },
                    note: None,
                    attempts: Vec::new(),
                    registered: None,
                })
                .collect(),
        })
        .collect();

    PersistedState::new(buildings)
}
