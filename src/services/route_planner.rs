//! Route planning over the stored buildings.

use crate::db::{StateStore, StoreResult};
use crate::models::{Area, Building, Coordinates};
use crate::routing::TourStrategy;

/// Order the stored buildings into a visiting path.
///
/// When `area` is given only that area's buildings are planned; `start`
/// anchors the tour at the carrier's current position. The strategy is a
/// parameter so a better tour algorithm can be swapped in without touching
/// callers.
pub async fn plan_route(
    store: &dyn StateStore,
    strategy: &dyn TourStrategy,
    area: Option<Area>,
    start: Option<Coordinates>,
) -> StoreResult<Vec<Building>> {
    let state = store.load().await?;
    let stops: Vec<Building> = state
        .buildings
        .iter()
        .filter(|b| area.map_or(true, |a| b.area == a))
        .cloned()
        .collect();
    Ok(strategy.order(&stops, start))
}
