//! Seeded default state for first runs and corrupt-state recovery.

use chrono::{DateTime, Duration, Utc};

use super::models::PersistedState;
use crate::models::{Apartment, Area, Building, Coordinates, RegisteredMeta};

/// Build the seeded example state.
///
/// One example building per area so every rotation day has something to
/// show, including one registered-mail apartment with a due date ten days
/// out from `now`.
pub fn seed_state(now: DateTime<Utc>) -> PersistedState {
    // Wire timestamps carry millisecond precision; truncate up front so a
    // persisted seed reads back identical.
    let now = DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now);

    let mut oak = Building::new("Oak St 3", "Oak St 3", Area::Zone45, now);
    oak.id = "seed-oak-3".to_string();
    oak.coords = Some(Coordinates {
        lat: 40.4175,
        lng: -3.7034,
    });
    oak.apartments = vec![
        Apartment::new("1A"),
        Apartment::new("1B"),
        Apartment::new("2A"),
        Apartment::new("2B"),
    ];

    let mut elm = Building::new("Elm Ave 12", "Elm Ave 12", Area::Zone14, now);
    elm.id = "seed-elm-12".to_string();
    elm.coords = Some(Coordinates {
        lat: 40.4203,
        lng: -3.6986,
    });
    let mut registered = Apartment::new("3C");
    registered.registered = Some(RegisteredMeta {
        tracking_id: Some("RR100000001".to_string()),
        due: Some(now.date_naive() + Duration::days(10)),
        attempts_allowed: Some(2),
    });
    elm.apartments = vec![Apartment::new("1A"), Apartment::new("2B"), registered];

    let mut mill = Building::new("Mill Rd 7", "Mill Rd 7", Area::Zone12, now);
    mill.id = "seed-mill-7".to_string();
    mill.apartments = vec![Apartment::new("1"), Apartment::new("2")];

    PersistedState::new(vec![oak, elm, mill])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::CURRENT_VERSION;
    use crate::models::DeliveryStatus;
    use chrono::TimeZone;

    #[test]
    fn test_seed_covers_every_area() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap();
        let state = seed_state(now);

        assert_eq!(state.version, CURRENT_VERSION);
        for area in Area::ALL {
            assert!(
                state.buildings.iter().any(|b| b.area == area),
                "missing area {}",
                area
            );
        }
    }

    #[test]
    fn test_seed_apartments_start_pending() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap();
        let state = seed_state(now);

        for building in &state.buildings {
            assert_eq!(building.updated_at, now);
            for apt in &building.apartments {
                assert_eq!(apt.status, DeliveryStatus::Pending);
                assert!(apt.attempts.is_empty());
            }
        }
    }

    #[test]
    fn test_seed_has_a_registered_due_date() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap();
        let state = seed_state(now);

        let sla = state
            .buildings
            .iter()
            .flat_map(|b| &b.apartments)
            .find_map(|a| a.registered_sla(now.date_naive()))
            .expect("seed should include registered mail");
        assert_eq!(sla.days_left, 10);
        assert!(!sla.overdue);
    }
}
