use chrono::{NaiveDate, TimeZone, Utc};

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_status_wire_codes() {
    assert_eq!(DeliveryStatus::Pending.code(), "PENDING");
    assert_eq!(DeliveryStatus::NotHome.code(), "NOT_HOME");
    assert_eq!(DeliveryStatus::ReturnToSender.code(), "RTS");

    for status in DeliveryStatus::ALL {
        assert_eq!(DeliveryStatus::from_code(status.code()).unwrap(), status);
    }
    assert!(DeliveryStatus::from_code("LOST").is_err());
}

#[test]
fn test_status_serde_matches_codes() {
    for status in DeliveryStatus::ALL {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{}\"", status.code()));
    }
}

#[test]
fn test_new_apartment_is_pending_without_history() {
    let apt = Apartment::new("3B");
    assert_eq!(apt.label, "3B");
    assert_eq!(apt.status, DeliveryStatus::Pending);
    assert!(apt.attempts.is_empty());
    assert!(apt.note.is_none());
    assert!(apt.registered.is_none());
}

#[test]
fn test_with_status_replaces_status_and_keeps_note() {
    let apt = Apartment::new("1A").with_status(
        DeliveryStatus::NotHome,
        Some("dog barking".to_string()),
    );
    assert_eq!(apt.status, DeliveryStatus::NotHome);
    assert_eq!(apt.note.as_deref(), Some("dog barking"));

    // No note given: previous note survives.
    let apt = apt.with_status(DeliveryStatus::Delivered, None);
    assert_eq!(apt.status, DeliveryStatus::Delivered);
    assert_eq!(apt.note.as_deref(), Some("dog barking"));
}

#[test]
fn test_with_status_allows_any_transition() {
    let mut apt = Apartment::new("2C");
    for status in DeliveryStatus::ALL {
        apt = apt.with_status(status, None);
        assert_eq!(apt.status, status);
    }
    // And back to pending.
    let apt = apt.with_status(DeliveryStatus::Pending, None);
    assert_eq!(apt.status, DeliveryStatus::Pending);
}

#[test]
fn test_with_attempt_is_append_only() {
    let at1 = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
    let at2 = Utc.with_ymd_and_hms(2025, 3, 11, 9, 30, 0).unwrap();

    let apt = Apartment::new("4D");
    let apt = apt.with_attempt(at1, Some("nobody home"));
    let before: Vec<_> = apt.attempts.clone();

    let apt = apt.with_attempt(at2, None);
    assert_eq!(apt.attempts.len(), 2);
    // Prior entries unchanged, in order.
    assert_eq!(&apt.attempts[..1], &before[..]);
    assert_eq!(apt.attempts[1].at, at2);
    assert!(apt.attempts[1].reason.is_none());
    // Status untouched by attempts.
    assert_eq!(apt.status, DeliveryStatus::Pending);
}

#[test]
fn test_attempt_ids_are_unique() {
    let at = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
    let apt = Apartment::new("5A").with_attempt(at, None).with_attempt(at, None);
    assert_ne!(apt.attempts[0].id, apt.attempts[1].id);
}

#[test]
fn test_registered_sla_none_without_due_date() {
    let today = date(2025, 3, 10);

    let apt = Apartment::new("1A");
    assert!(apt.registered_sla(today).is_none());

    // Registered metadata without a due date still yields no SLA.
    let mut apt = Apartment::new("1B");
    apt.registered = Some(RegisteredMeta {
        tracking_id: Some("RR123456789ES".to_string()),
        due: None,
        attempts_allowed: Some(2),
    });
    assert!(apt.registered_sla(today).is_none());
}

#[test]
fn test_registered_sla_days_left_and_overdue() {
    let mut apt = Apartment::new("2B");
    apt.registered = Some(RegisteredMeta {
        tracking_id: None,
        due: Some(date(2025, 3, 15)),
        attempts_allowed: None,
    });

    let sla = apt.registered_sla(date(2025, 3, 10)).unwrap();
    assert_eq!(sla.days_left, 5);
    assert!(!sla.overdue);

    // Due today: zero days left, not yet overdue.
    let sla = apt.registered_sla(date(2025, 3, 15)).unwrap();
    assert_eq!(sla.days_left, 0);
    assert!(!sla.overdue);

    // Past due: negative exactly when the date has passed.
    let sla = apt.registered_sla(date(2025, 3, 18)).unwrap();
    assert_eq!(sla.days_left, -3);
    assert!(sla.overdue);
}

#[test]
fn test_apartment_wire_shape() {
    let at = Utc.timestamp_millis_opt(1710000000000).unwrap();
    let mut apt = Apartment::new("1A");
    apt.id = "apt-1".to_string();
    let apt = apt.with_attempt(at, Some("no answer"));

    let value = serde_json::to_value(&apt).unwrap();
    assert_eq!(value["status"], "PENDING");
    assert_eq!(value["attempts"][0]["at"], 1710000000000i64);
    assert_eq!(value["attempts"][0]["reason"], "no answer");
    // Absent optionals are omitted, not null.
    assert!(value.get("note").is_none());
    assert!(value.get("registered").is_none());
}

#[test]
fn test_registered_meta_wire_keys() {
    let meta = RegisteredMeta {
        tracking_id: Some("RR1".to_string()),
        due: Some(date(2025, 4, 1)),
        attempts_allowed: Some(3),
    };
    let value = serde_json::to_value(&meta).unwrap();
    assert_eq!(value["trackingId"], "RR1");
    assert_eq!(value["due"], "2025-04-01");
    assert_eq!(value["attemptsAllowed"], 3);
}
