//! Buildings on the round and their aggregate views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Apartment, Area, DeliveryStatus};

/// Geographic coordinate of a building entrance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A building on the round and its deliverable apartments.
///
/// `updated_at` is refreshed on every structural mutation of the building
/// or any of its apartments; the update helpers below take an explicit
/// `now` so callers stay deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: String,
    pub name: String,
    pub address: String,
    pub area: Area,
    /// Last structural mutation (epoch milliseconds on the wire).
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<Coordinates>,
    /// Optional priority weight for route planning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default)]
    pub apartments: Vec<Apartment>,
}

impl Building {
    /// Create an empty building assigned to `area`.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        area: Area,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            address: address.into(),
            area,
            updated_at: now,
            coords: None,
            priority: None,
            apartments: Vec::new(),
        }
    }

    /// Look up an apartment by id.
    pub fn apartment(&self, apartment_id: &str) -> Option<&Apartment> {
        self.apartments.iter().find(|a| a.id == apartment_id)
    }

    /// Number of apartments currently marked delivered.
    pub fn delivered_count(&self) -> usize {
        self.apartments
            .iter()
            .filter(|a| a.status == DeliveryStatus::Delivered)
            .count()
    }

    /// Aggregate completion percentage in `[0, 100]`.
    ///
    /// A building with zero apartments counts as 100% complete.
    pub fn completion_percent(&self) -> f64 {
        if self.apartments.is_empty() {
            return 100.0;
        }
        self.delivered_count() as f64 * 100.0 / self.apartments.len() as f64
    }

    /// Return a copy with `apartment` swapped in by id and `updated_at`
    /// refreshed.
    ///
    /// An id with no match leaves the apartment list unchanged (the
    /// service layer resolves ids before updating).
    pub fn with_apartment(&self, apartment: Apartment, now: DateTime<Utc>) -> Self {
        let apartments = self
            .apartments
            .iter()
            .map(|a| {
                if a.id == apartment.id {
                    apartment.clone()
                } else {
                    a.clone()
                }
            })
            .collect();
        Self {
            apartments,
            updated_at: now,
            ..self.clone()
        }
    }

    /// Return a copy with every apartment set to `status` in one aggregate
    /// operation.
    pub fn mark_all(&self, status: DeliveryStatus, now: DateTime<Utc>) -> Self {
        let apartments = self
            .apartments
            .iter()
            .map(|a| a.with_status(status, None))
            .collect();
        Self {
            apartments,
            updated_at: now,
            ..self.clone()
        }
    }
}
