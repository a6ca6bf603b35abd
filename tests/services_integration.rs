#![cfg(feature = "local-store")]

use chrono::{NaiveDate, TimeZone, Utc};

use rounds_rust::db::{MemoryStore, StateStore};
use rounds_rust::models::{Area, Coordinates, DeliveryStatus};
use rounds_rust::routing::NearestNeighbor;
use rounds_rust::services;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_full_carrier_day_flow() {
    let store = MemoryStore::new();
    let now = Utc.with_ymd_and_hms(2024, 1, 8, 8, 0, 0).unwrap();

    // Import a street's worth of buildings into zone 45.
    let csv = "name,address,apartments\n\
               Oak St 5,Oak St 5,1A|1B\n\
               Oak St 7,Oak St 7,3\n";
    let summary = services::import_buildings(&store, csv, Area::Zone45, now)
        .await
        .unwrap();
    assert_eq!(summary.imported, 2);

    // The dashboard for the rotation epoch (zone 45 day) shows them.
    let view = services::dashboard(&store, date(2024, 1, 8)).await.unwrap();
    assert_eq!(view.rotation_area, Area::Zone45);
    let names: Vec<_> = view.buildings.iter().map(|b| b.name.as_str()).collect();
    assert!(names.contains(&"Oak St 5"));
    assert!(names.contains(&"Oak St 7"));

    // Work one apartment: attempt, then not-home.
    let building_id = &summary.building_ids[0];
    let state = store.load().await.unwrap();
    let apartment_id = state.building(building_id).unwrap().apartments[0].id.clone();

    services::record_attempt(&store, building_id, &apartment_id, Some("nobody home"), now)
        .await
        .unwrap();
    let updated = services::set_apartment_status(
        &store,
        building_id,
        &apartment_id,
        DeliveryStatus::NotHome,
        None,
        now,
    )
    .await
    .unwrap();

    let apartment = updated.apartment(&apartment_id).unwrap();
    assert_eq!(apartment.status, DeliveryStatus::NotHome);
    assert_eq!(apartment.attempts.len(), 1);

    // Finish the other building wholesale.
    let other_id = &summary.building_ids[1];
    let finished = services::mark_building(&store, other_id, DeliveryStatus::Delivered, now)
        .await
        .unwrap();
    assert_eq!(finished.completion_percent(), 100.0);

    // Progress shows up on a fresh dashboard read.
    let view = services::dashboard(&store, date(2024, 1, 8)).await.unwrap();
    let finished_progress = view
        .buildings
        .iter()
        .find(|b| &b.id == other_id)
        .unwrap();
    assert_eq!(finished_progress.delivered, 3);
    assert_eq!(finished_progress.completion_percent, 100.0);
}

#[tokio::test]
async fn test_route_over_imported_buildings() {
    let store = MemoryStore::new();
    let now = Utc.with_ymd_and_hms(2024, 1, 8, 8, 0, 0).unwrap();

    let csv = "name,address,apartments\nA,A St,1\nB,B St,1\nC,C St,1\n";
    let summary = services::import_buildings(&store, csv, Area::Zone14, now)
        .await
        .unwrap();

    // Attach coordinates along a line, deliberately out of order.
    let mut state = store.load().await.unwrap();
    let coords = [(0.0, 4.0), (0.0, 0.0), (0.0, 2.0)];
    for (building_id, (lat, lng)) in summary.building_ids.iter().zip(coords) {
        let mut building = state.building(building_id).unwrap().clone();
        building.coords = Some(Coordinates { lat, lng });
        state = state.with_building(building);
    }
    store.save(&state).await.unwrap();

    // Anchored at the western end, the tour sweeps east.
    let start = Coordinates { lat: 0.0, lng: -1.0 };
    let route = services::plan_route(&store, &NearestNeighbor, Some(Area::Zone14), Some(start))
        .await
        .unwrap();
    let names: Vec<_> = route.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["B", "C", "A"]);

    // Permutation guarantee holds through the service layer.
    assert_eq!(route.len(), 3);
}

#[tokio::test]
async fn test_dashboard_surfaces_registered_mail_from_seed() {
    let store = MemoryStore::new();
    // Seed due dates are relative to the seeding instant; querying today
    // must show the registered apartment as not yet overdue.
    let today = Utc::now().date_naive();
    let view = services::dashboard(&store, today).await.unwrap();

    assert!(!view.registered_due.is_empty());
    let alert = &view.registered_due[0];
    assert!(!alert.sla.overdue);
    // Seeded ten days out; allow for the load and the query straddling
    // midnight.
    assert!(alert.sla.days_left >= 9 && alert.sla.days_left <= 10);
}

#[tokio::test]
async fn test_status_correction_back_to_pending() {
    let store = MemoryStore::new();
    let now = Utc.with_ymd_and_hms(2024, 1, 8, 8, 0, 0).unwrap();
    let state = store.load().await.unwrap();
    let building_id = state.buildings[0].id.clone();
    let apartment_id = state.buildings[0].apartments[0].id.clone();

    for status in [
        DeliveryStatus::Delivered,
        DeliveryStatus::WrongAddress,
        DeliveryStatus::ReturnToSender,
        DeliveryStatus::Pending,
    ] {
        let updated =
            services::set_apartment_status(&store, &building_id, &apartment_id, status, None, now)
                .await
                .unwrap();
        assert_eq!(updated.apartment(&apartment_id).unwrap().status, status);
    }
}
