//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use super::dto::{
    AttemptRequest, BuildingListResponse, DashboardQuery, HealthResponse, ImportQuery,
    MarkAllRequest, RouteQuery, StatusUpdateRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{Area, Building, Coordinates, DeliveryStatus};
use crate::routing::NearestNeighbor;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store_status = match state.store.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        store: store_status,
    }))
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /v1/dashboard
///
/// Today's rotation area, delivery/preparation plan, building progress and
/// registered-mail alerts. `?date=YYYY-MM-DD` overrides the reference date.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> HandlerResult<services::Dashboard> {
    let reference_date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let view = services::dashboard(state.store.as_ref(), reference_date).await?;
    Ok(Json(view))
}

// =============================================================================
// Buildings
// =============================================================================

/// GET /v1/buildings
///
/// List every building in the state.
pub async fn list_buildings(State(state): State<AppState>) -> HandlerResult<BuildingListResponse> {
    let persisted = state.store.load().await?;
    let total = persisted.buildings.len();
    Ok(Json(BuildingListResponse {
        buildings: persisted.buildings,
        total,
    }))
}

/// GET /v1/buildings/{building_id}
pub async fn get_building(
    State(state): State<AppState>,
    Path(building_id): Path<String>,
) -> HandlerResult<Building> {
    let persisted = state.store.load().await?;
    let building = persisted
        .building(&building_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Building {} not found", building_id)))?;
    Ok(Json(building))
}

/// POST /v1/buildings/import?area=45
///
/// CSV bulk import. The body is `name,address,apartments` rows; imported
/// buildings are assigned to the given area.
pub async fn import_buildings(
    State(state): State<AppState>,
    Query(query): Query<ImportQuery>,
    body: String,
) -> Result<(StatusCode, Json<services::ImportSummary>), AppError> {
    let area = Area::from_code(&query.area)?;
    let summary =
        services::import_buildings(state.store.as_ref(), &body, area, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// POST /v1/buildings/{building_id}/status
///
/// Mark every apartment of a building with the same status.
pub async fn mark_building(
    State(state): State<AppState>,
    Path(building_id): Path<String>,
    Json(request): Json<MarkAllRequest>,
) -> HandlerResult<Building> {
    let status = DeliveryStatus::from_code(&request.status)?;
    let building =
        services::mark_building(state.store.as_ref(), &building_id, status, Utc::now()).await?;
    Ok(Json(building))
}

// =============================================================================
// Apartments
// =============================================================================

/// POST /v1/buildings/{building_id}/apartments/{apartment_id}/status
pub async fn set_apartment_status(
    State(state): State<AppState>,
    Path((building_id, apartment_id)): Path<(String, String)>,
    Json(request): Json<StatusUpdateRequest>,
) -> HandlerResult<Building> {
    let status = DeliveryStatus::from_code(&request.status)?;
    let building = services::set_apartment_status(
        state.store.as_ref(),
        &building_id,
        &apartment_id,
        status,
        request.note,
        Utc::now(),
    )
    .await?;
    Ok(Json(building))
}

/// POST /v1/buildings/{building_id}/apartments/{apartment_id}/attempts
pub async fn record_attempt(
    State(state): State<AppState>,
    Path((building_id, apartment_id)): Path<(String, String)>,
    Json(request): Json<AttemptRequest>,
) -> HandlerResult<Building> {
    let building = services::record_attempt(
        state.store.as_ref(),
        &building_id,
        &apartment_id,
        request.reason.as_deref(),
        Utc::now(),
    )
    .await?;
    Ok(Json(building))
}

// =============================================================================
// Route Planning
// =============================================================================

/// GET /v1/route
///
/// Order buildings into a visiting path. `?area=` filters to one area;
/// `?lat=&lng=` anchors the tour at the carrier's position.
pub async fn plan_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> HandlerResult<Vec<Building>> {
    let area = query
        .area
        .as_deref()
        .map(Area::from_code)
        .transpose()?;

    let start = match (query.lat, query.lng) {
        (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
        (None, None) => None,
        _ => {
            return Err(AppError::BadRequest(
                "lat and lng must be provided together".to_string(),
            ))
        }
    };

    let route = services::plan_route(state.store.as_ref(), &NearestNeighbor, area, start).await?;
    Ok(Json(route))
}
