//! CSV bulk-import boundary.
//!
//! The only sanctioned way external bulk data enters the delivery model.
//! Rows are `name, address, apartments` where the third field is either a
//! unit count or a `|`-separated list of labels; every imported apartment
//! starts pending with no history.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db::{StateStore, StoreError, StoreResult};
use crate::models::{Apartment, Area, Building};

#[derive(Debug, Deserialize)]
struct ImportRow {
    name: String,
    address: String,
    #[serde(default)]
    apartments: String,
}

/// Result of a bulk import.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub imported: usize,
    pub building_ids: Vec<String>,
}

/// Parse CSV content into buildings assigned to `area`.
///
/// Expects a `name,address,apartments` header row. Malformed rows are
/// reported with their row number; nothing is partially imported.
pub fn parse_buildings_csv(
    content: &str,
    area: Area,
    now: DateTime<Utc>,
) -> Result<Vec<Building>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut buildings = Vec::new();
    for (idx, record) in reader.deserialize::<ImportRow>().enumerate() {
        // Row 1 is the header.
        let row_number = idx + 2;
        let row = record.with_context(|| format!("Invalid CSV row {}", row_number))?;
        if row.name.is_empty() {
            bail!("Row {}: building name is empty", row_number);
        }

        let mut building = Building::new(row.name, row.address, area, now);
        building.apartments = expand_apartments(&row.apartments);
        buildings.push(building);
    }

    Ok(buildings)
}

/// Expand the third CSV field into pending apartments.
///
/// A numeric field becomes labels `"1"..="n"`; anything else is split on
/// `|`.
fn expand_apartments(field: &str) -> Vec<Apartment> {
    let field = field.trim();
    if field.is_empty() {
        return Vec::new();
    }
    if let Ok(count) = field.parse::<usize>() {
        return (1..=count).map(|i| Apartment::new(i.to_string())).collect();
    }
    field
        .split('|')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(Apartment::new)
        .collect()
}

/// Parse and persist CSV content, appending the buildings to the state.
pub async fn import_buildings(
    store: &dyn StateStore,
    content: &str,
    area: Area,
    now: DateTime<Utc>,
) -> StoreResult<ImportSummary> {
    let buildings = parse_buildings_csv(content, area, now)
        .map_err(|e| StoreError::validation(e.to_string()).with_operation("import_buildings"))?;

    let building_ids: Vec<String> = buildings.iter().map(|b| b.id.clone()).collect();
    let state = store.load().await?;
    store.save(&state.with_buildings_added(buildings)).await?;

    info!(count = building_ids.len(), area = area.code(), "buildings imported");
    Ok(ImportSummary {
        imported: building_ids.len(),
        building_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeliveryStatus;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_count_and_label_rows() {
        let csv = "name,address,apartments\n\
                   Oak St 3,Oak St 3,4\n\
                   Elm Ave 12,Elm Ave 12,1A|1B|2C\n";
        let buildings = parse_buildings_csv(csv, Area::Zone45, now()).unwrap();

        assert_eq!(buildings.len(), 2);
        assert_eq!(buildings[0].apartments.len(), 4);
        assert_eq!(buildings[0].apartments[0].label, "1");
        assert_eq!(buildings[0].apartments[3].label, "4");

        let labels: Vec<_> = buildings[1].apartments.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["1A", "1B", "2C"]);
    }

    #[test]
    fn test_imported_apartments_start_pending_without_history() {
        let csv = "name,address,apartments\nOak St 3,Oak St 3,2\n";
        let buildings = parse_buildings_csv(csv, Area::Zone12, now()).unwrap();

        for apt in &buildings[0].apartments {
            assert_eq!(apt.status, DeliveryStatus::Pending);
            assert!(apt.attempts.is_empty());
            assert!(apt.registered.is_none());
        }
        assert_eq!(buildings[0].area, Area::Zone12);
        assert_eq!(buildings[0].updated_at, now());
    }

    #[test]
    fn test_empty_apartments_field_imports_empty_building() {
        let csv = "name,address,apartments\nKiosk,Main Sq 1,\n";
        let buildings = parse_buildings_csv(csv, Area::Zone14, now()).unwrap();
        assert!(buildings[0].apartments.is_empty());
        assert_eq!(buildings[0].completion_percent(), 100.0);
    }

    #[test]
    fn test_empty_content_imports_nothing() {
        let buildings = parse_buildings_csv("name,address,apartments\n", Area::Zone45, now()).unwrap();
        assert!(buildings.is_empty());
    }

    #[test]
    fn test_blank_name_reports_row_number() {
        let csv = "name,address,apartments\nOak,Oak St,2\n,Elm Ave,3\n";
        let err = parse_buildings_csv(csv, Area::Zone45, now()).unwrap_err();
        assert!(err.to_string().contains("Row 3"), "got: {}", err);
    }

    #[cfg(feature = "local-store")]
    mod store_tests {
        use super::*;
        use crate::db::{MemoryStore, StateStore};

        #[tokio::test]
        async fn test_import_appends_to_state() {
            let store = MemoryStore::new();
            let before = store.load().await.unwrap().buildings.len();

            let csv = "name,address,apartments\nNew Bldg,Some St 9,2\n";
            let summary = import_buildings(&store, csv, Area::Zone45, now()).await.unwrap();
            assert_eq!(summary.imported, 1);

            let state = store.load().await.unwrap();
            assert_eq!(state.buildings.len(), before + 1);
            assert!(state.building(&summary.building_ids[0]).is_some());
        }

        #[tokio::test]
        async fn test_bad_csv_is_validation_error_and_no_write() {
            let store = MemoryStore::new();
            let before = store.load().await.unwrap();

            let err = import_buildings(&store, "name,address,apartments\n,x,1\n", Area::Zone45, now())
                .await
                .unwrap_err();
            assert!(matches!(err, StoreError::Validation { .. }));

            let after = store.load().await.unwrap();
            assert_eq!(before, after);
        }
    }
}
