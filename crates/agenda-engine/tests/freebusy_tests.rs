//! Tests for free-slot derivation over a slot catalog.

use agenda_engine::catalog::SlotCatalog;
use agenda_engine::freebusy::free_slots;
use agenda_engine::reservation::Reservation;
use chrono::NaiveDate;

fn date(label: &str) -> NaiveDate {
    label.parse().unwrap()
}

fn reservation(id: &str, day: &str, start: &str, end: &str) -> Reservation {
    Reservation {
        id: id.to_string(),
        client_name: format!("client-{}", id),
        date: date(day),
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

fn free(catalog: &SlotCatalog, day: &str, reservations: &[Reservation]) -> Vec<String> {
    free_slots(catalog, date(day), reservations)
        .unwrap()
        .collect()
}

#[test]
fn empty_day_returns_the_whole_catalog_in_order() {
    let catalog = SlotCatalog::public_hourly();
    let expected: Vec<String> = catalog.labels().collect();
    assert_eq!(free(&catalog, "2024-01-01", &[]), expected);
}

#[test]
fn booked_hour_drops_exactly_its_slot() {
    // Catalog 08:00,09:00,10:00,... with [09:00,10:00) booked: 09:00 is the
    // only hourly slot that overlaps.
    let catalog = SlotCatalog::public_hourly();
    let existing = vec![reservation("r1", "2024-01-01", "09:00", "10:00")];

    let labels = free(&catalog, "2024-01-01", &existing);
    assert!(!labels.contains(&"09:00".to_string()));
    assert!(labels.contains(&"08:00".to_string()));
    assert!(labels.contains(&"10:00".to_string()));
    assert_eq!(labels.len(), catalog.len() - 1);
}

#[test]
fn reservation_spanning_multiple_slots_drops_them_all() {
    // [09:30,11:30) clips the 09:00, 10:00, and 11:00 hourly slots.
    let catalog = SlotCatalog::public_hourly();
    let existing = vec![reservation("r1", "2024-01-01", "09:30", "11:30")];

    let labels = free(&catalog, "2024-01-01", &existing);
    for taken in ["09:00", "10:00", "11:00"] {
        assert!(!labels.contains(&taken.to_string()), "{} should be busy", taken);
    }
    assert!(labels.contains(&"08:00".to_string()));
    assert!(labels.contains(&"12:00".to_string()));
}

#[test]
fn half_hour_booking_still_blocks_its_hourly_slot() {
    // A 30-minute booking inside an hourly slot makes the whole slot busy.
    let catalog = SlotCatalog::public_hourly();
    let existing = vec![reservation("r1", "2024-01-01", "14:30", "15:00")];

    let labels = free(&catalog, "2024-01-01", &existing);
    assert!(!labels.contains(&"14:00".to_string()));
    assert!(labels.contains(&"15:00".to_string()));
}

#[test]
fn other_dates_do_not_affect_the_day() {
    let catalog = SlotCatalog::public_hourly();
    let existing = vec![reservation("r1", "2024-01-02", "09:00", "10:00")];

    let expected: Vec<String> = catalog.labels().collect();
    assert_eq!(free(&catalog, "2024-01-01", &existing), expected);
}

#[test]
fn booking_catalog_respects_half_hour_granularity() {
    // With the 30-minute grid, [09:00,10:00) removes 09:00 and 09:30 only.
    let catalog = SlotCatalog::booking();
    let existing = vec![reservation("r1", "2024-01-01", "09:00", "10:00")];

    let labels = free(&catalog, "2024-01-01", &existing);
    assert!(!labels.contains(&"09:00".to_string()));
    assert!(!labels.contains(&"09:30".to_string()));
    assert!(labels.contains(&"08:30".to_string()));
    assert!(labels.contains(&"10:00".to_string()));
}

#[test]
fn derivation_is_restartable_and_deterministic() {
    let catalog = SlotCatalog::public_hourly();
    let existing = vec![
        reservation("r1", "2024-01-01", "09:00", "10:00"),
        reservation("r2", "2024-01-01", "13:00", "16:00"),
    ];

    let first = free(&catalog, "2024-01-01", &existing);
    let second = free(&catalog, "2024-01-01", &existing);
    assert_eq!(first, second);
}

#[test]
fn corrupt_snapshot_fails_up_front() {
    let catalog = SlotCatalog::public_hourly();
    let existing = vec![reservation("r1", "2024-01-01", "nine", "10:00")];
    assert!(free_slots(&catalog, date("2024-01-01"), &existing).is_err());
}
