//! Daily dashboard composition.
//!
//! Answers "what do I do today": the rotation area, the delivery/
//! preparation plan, progress of today's buildings, and registered mail
//! approaching its due date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::db::{StateStore, StoreResult};
use crate::models::{Area, Building, RegisteredSla};
use crate::scheduler::{self, DayPlan};

/// Aggregate progress of one building.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingProgress {
    pub id: String,
    pub name: String,
    pub area: Area,
    pub delivered: usize,
    pub total: usize,
    pub completion_percent: f64,
}

impl From<&Building> for BuildingProgress {
    fn from(building: &Building) -> Self {
        Self {
            id: building.id.clone(),
            name: building.name.clone(),
            area: building.area,
            delivered: building.delivered_count(),
            total: building.apartments.len(),
            completion_percent: building.completion_percent(),
        }
    }
}

/// Registered mail surfaced on the dashboard with its SLA view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredAlert {
    pub building_id: String,
    pub building_name: String,
    pub apartment_id: String,
    pub apartment_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
    pub sla: RegisteredSla,
}

/// Everything the daily dashboard screen needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub date: NaiveDate,
    pub working_day: bool,
    /// Area under the working-day rotation.
    pub rotation_area: Area,
    /// Delivery/preparation pairing under the calendar rotation.
    pub plan: DayPlan,
    pub tomorrow: DayPlan,
    /// Buildings of today's rotation area.
    pub buildings: Vec<BuildingProgress>,
    /// All registered mail with a due date, most urgent first.
    pub registered_due: Vec<RegisteredAlert>,
}

/// Assemble the dashboard for `reference_date`.
pub async fn dashboard(
    store: &dyn StateStore,
    reference_date: NaiveDate,
) -> StoreResult<Dashboard> {
    let state = store.load().await?;

    let rotation_area = scheduler::area_for_date(reference_date);
    let buildings = state
        .buildings
        .iter()
        .filter(|b| b.area == rotation_area)
        .map(BuildingProgress::from)
        .collect();

    let mut registered_due: Vec<RegisteredAlert> = state
        .buildings
        .iter()
        .flat_map(|building| {
            building.apartments.iter().filter_map(move |apartment| {
                apartment.registered_sla(reference_date).map(|sla| RegisteredAlert {
                    building_id: building.id.clone(),
                    building_name: building.name.clone(),
                    apartment_id: apartment.id.clone(),
                    apartment_label: apartment.label.clone(),
                    tracking_id: apartment
                        .registered
                        .as_ref()
                        .and_then(|r| r.tracking_id.clone()),
                    sla,
                })
            })
        })
        .collect();
    registered_due.sort_by_key(|alert| alert.sla.days_left);

    Ok(Dashboard {
        date: reference_date,
        working_day: scheduler::is_working_day(reference_date),
        rotation_area,
        plan: scheduler::today_plan(reference_date),
        tomorrow: scheduler::tomorrow_plan(reference_date),
        buildings,
        registered_due,
    })
}
