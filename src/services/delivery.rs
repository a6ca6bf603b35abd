//! Delivery mutations threaded through the store.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::db::{
    state_checksum, ErrorContext, PersistedState, StateStore, StoreError, StoreResult,
};
use crate::models::{Building, DeliveryStatus};

fn building_not_found(building_id: &str, operation: &str) -> StoreError {
    StoreError::not_found_with_context(
        format!("Building {} not found", building_id),
        ErrorContext::new(operation).with_entity_id(building_id),
    )
}

fn apartment_not_found(apartment_id: &str, operation: &str) -> StoreError {
    StoreError::not_found_with_context(
        format!("Apartment {} not found", apartment_id),
        ErrorContext::new(operation).with_entity_id(apartment_id),
    )
}

/// Set one apartment's status (and optionally its note).
///
/// Returns the updated building; `updated_at` is refreshed to `now`.
pub async fn set_apartment_status(
    store: &dyn StateStore,
    building_id: &str,
    apartment_id: &str,
    status: DeliveryStatus,
    note: Option<String>,
    now: DateTime<Utc>,
) -> StoreResult<Building> {
    let state = store.load().await?;
    let building = state
        .building(building_id)
        .ok_or_else(|| building_not_found(building_id, "set_apartment_status"))?;
    let apartment = building
        .apartment(apartment_id)
        .ok_or_else(|| apartment_not_found(apartment_id, "set_apartment_status"))?;

    let updated = building.with_apartment(apartment.with_status(status, note), now);
    store.save(&state.with_building(updated.clone())).await?;
    debug!(building = building_id, apartment = apartment_id, status = status.code(), "status updated");
    Ok(updated)
}

/// Append one delivery attempt to an apartment's history.
///
/// Does not change the status; pair with [`set_apartment_status`] when an
/// attempt implies one.
pub async fn record_attempt(
    store: &dyn StateStore,
    building_id: &str,
    apartment_id: &str,
    reason: Option<&str>,
    now: DateTime<Utc>,
) -> StoreResult<Building> {
    let state = store.load().await?;
    let building = state
        .building(building_id)
        .ok_or_else(|| building_not_found(building_id, "record_attempt"))?;
    let apartment = building
        .apartment(apartment_id)
        .ok_or_else(|| apartment_not_found(apartment_id, "record_attempt"))?;

    let updated = building.with_apartment(apartment.with_attempt(now, reason), now);
    store.save(&state.with_building(updated.clone())).await?;
    Ok(updated)
}

/// Set every apartment of a building to the same status in one aggregate
/// operation.
pub async fn mark_building(
    store: &dyn StateStore,
    building_id: &str,
    status: DeliveryStatus,
    now: DateTime<Utc>,
) -> StoreResult<Building> {
    let state = store.load().await?;
    let building = state
        .building(building_id)
        .ok_or_else(|| building_not_found(building_id, "mark_building"))?;

    let updated = building.mark_all(status, now);
    store.save(&state.with_building(updated.clone())).await?;
    debug!(building = building_id, status = status.code(), "building marked");
    Ok(updated)
}

/// Persist the state only when its content differs from
/// `previous_checksum`.
///
/// Returns the new checksum when a write happened, `None` when the content
/// was unchanged and the write was skipped.
pub async fn save_if_changed(
    store: &dyn StateStore,
    state: &PersistedState,
    previous_checksum: Option<&str>,
) -> StoreResult<Option<String>> {
    let checksum = state_checksum(state)?;
    if previous_checksum == Some(checksum.as_str()) {
        return Ok(None);
    }
    store.save(state).await?;
    Ok(Some(checksum))
}
