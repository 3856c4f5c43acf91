//! Tests for the overlap predicate and the create/edit conflict checks.

use agenda_engine::conflict::{has_conflict, has_conflict_excluding};
use agenda_engine::reservation::Reservation;
use agenda_engine::time::Interval;
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

fn interval(start: &str, end: &str) -> Interval {
    Interval::from_labels(start, end).unwrap()
}

// ── Overlap predicate ───────────────────────────────────────────────────────

#[test]
fn touching_intervals_do_not_overlap() {
    // [09:00,10:00) and [10:00,11:00) are back-to-back, NOT overlapping.
    let a = interval("09:00", "10:00");
    let b = interval("10:00", "11:00");
    assert!(!a.overlaps(&b), "adjacent intervals must not overlap");
    assert!(!b.overlaps(&a));
}

#[test]
fn contained_interval_overlaps() {
    // [09:30,10:30) strictly inside [09:00,11:00).
    let outer = interval("09:00", "11:00");
    let inner = interval("09:30", "10:30");
    assert!(outer.overlaps(&inner), "containment is a conflict");
    assert!(inner.overlaps(&outer));
}

#[test]
fn identical_intervals_overlap() {
    let a = interval("09:00", "10:00");
    assert!(a.overlaps(&a));
}

#[test]
fn partial_overlap_is_symmetric() {
    let a = interval("09:00", "10:00");
    let b = interval("09:30", "10:30");
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

// ── Create check ────────────────────────────────────────────────────────────

#[test]
fn overlapping_candidate_conflicts() {
    let existing = vec![reservation("r1", "2024-01-01", "09:00", "10:00")];
    let conflicting = has_conflict(date("2024-01-01"), interval("09:30", "10:30"), &existing);
    assert_eq!(conflicting.unwrap(), true);
}

#[test]
fn back_to_back_candidate_does_not_conflict() {
    let existing = vec![reservation("r1", "2024-01-01", "09:00", "10:00")];
    let conflicting = has_conflict(date("2024-01-01"), interval("10:00", "11:00"), &existing);
    assert_eq!(conflicting.unwrap(), false);
}

#[test]
fn same_times_on_another_date_do_not_conflict() {
    let existing = vec![reservation("r1", "2024-01-01", "09:00", "10:00")];
    let conflicting = has_conflict(date("2024-01-02"), interval("09:00", "10:00"), &existing);
    assert_eq!(conflicting.unwrap(), false);
}

#[test]
fn empty_snapshot_never_conflicts() {
    let conflicting = has_conflict(date("2024-01-01"), interval("09:00", "10:00"), &[]);
    assert_eq!(conflicting.unwrap(), false);
}

#[test]
fn first_match_wins_among_many() {
    let existing = vec![
        reservation("r1", "2024-01-01", "08:00", "09:00"),
        reservation("r2", "2024-01-01", "12:00", "13:00"),
        reservation("r3", "2024-01-01", "18:00", "20:00"),
    ];
    assert_eq!(
        has_conflict(date("2024-01-01"), interval("12:30", "14:00"), &existing).unwrap(),
        true
    );
    assert_eq!(
        has_conflict(date("2024-01-01"), interval("09:00", "12:00"), &existing).unwrap(),
        false,
        "candidate exactly filling the gap must be free"
    );
}

#[test]
fn corrupt_stored_label_surfaces_an_error() {
    let existing = vec![reservation("r1", "2024-01-01", "9am", "10:00")];
    assert!(
        has_conflict(date("2024-01-01"), interval("09:00", "10:00"), &existing).is_err(),
        "a corrupt snapshot must not pass silently"
    );
}

// ── Edit check (self-exclusion) ─────────────────────────────────────────────

#[test]
fn unchanged_edit_does_not_conflict_with_itself() {
    let existing = vec![reservation("r1", "2024-01-01", "09:00", "10:00")];
    let conflicting = has_conflict_excluding(
        date("2024-01-01"),
        interval("09:00", "10:00"),
        &existing,
        "r1",
    );
    assert_eq!(conflicting.unwrap(), false);
}

#[test]
fn edit_still_conflicts_with_other_reservations() {
    let existing = vec![
        reservation("r1", "2024-01-01", "09:00", "10:00"),
        reservation("r2", "2024-01-01", "10:00", "11:00"),
    ];
    // Stretching r1 over r2's slot conflicts even though r1 itself is excluded.
    let conflicting = has_conflict_excluding(
        date("2024-01-01"),
        interval("09:00", "10:30"),
        &existing,
        "r1",
    );
    assert_eq!(conflicting.unwrap(), true);
}
