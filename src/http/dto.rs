//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Domain and service types already derive Serialize and are re-exported
//! here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::models::{Apartment, Area, Building, Coordinates, DeliveryStatus};
pub use crate::services::{BuildingProgress, Dashboard, ImportSummary, RegisteredAlert};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connectivity
    pub store: String,
}

/// Query parameters for the dashboard endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardQuery {
    /// Reference date (`YYYY-MM-DD`); defaults to today
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Response listing all buildings.
#[derive(Debug, Clone, Serialize)]
pub struct BuildingListResponse {
    pub buildings: Vec<Building>,
    pub total: usize,
}

/// Request body for updating one apartment's status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    /// Wire status string (e.g. "DELIVERED", "NOT_HOME")
    pub status: String,
    /// Optional note replacing the current one
    #[serde(default)]
    pub note: Option<String>,
}

/// Request body for marking a whole building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAllRequest {
    /// Wire status string applied to every apartment
    pub status: String,
}

/// Request body for recording a delivery attempt.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AttemptRequest {
    /// Optional reason (e.g. "nobody home")
    #[serde(default)]
    pub reason: Option<String>,
}

/// Query parameters for the route planning endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RouteQuery {
    /// Area code filter (e.g. "45")
    #[serde(default)]
    pub area: Option<String>,
    /// Start latitude; must be paired with `lng`
    #[serde(default)]
    pub lat: Option<f64>,
    /// Start longitude; must be paired with `lat`
    #[serde(default)]
    pub lng: Option<f64>,
}

/// Query parameters for the CSV import endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportQuery {
    /// Area code the imported buildings are assigned to
    pub area: String,
}
