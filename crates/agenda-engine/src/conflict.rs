//! Conflict detection between a candidate booking and a reservation snapshot.
//!
//! Checks a candidate `[start, end)` interval against every same-date
//! reservation with the shared overlap predicate, short-circuiting on the
//! first hit. A conflict is a normal boolean outcome here, never a fault;
//! the booking flow (see [`crate::booking`]) turns it into an error when it
//! must block a submission.

use crate::error::Result;
use crate::reservation::Reservation;
use crate::time::Interval;
use chrono::NaiveDate;

/// Does the candidate interval overlap any reservation on `date`?
///
/// Reservations on other dates never conflict. The snapshot is read-only;
/// the caller owns refreshing it. The candidate's `start < end` precondition
/// is enforced earlier, by [`Interval::from_labels`].
pub fn has_conflict(
    date: NaiveDate,
    candidate: Interval,
    existing: &[Reservation],
) -> Result<bool> {
    scan(date, candidate, existing, None)
}

/// Same check for the edit flow: the reservation being edited is excluded by
/// id, so an unchanged booking never conflicts with its own prior span.
pub fn has_conflict_excluding(
    date: NaiveDate,
    candidate: Interval,
    existing: &[Reservation],
    reservation_id: &str,
) -> Result<bool> {
    scan(date, candidate, existing, Some(reservation_id))
}

fn scan(
    date: NaiveDate,
    candidate: Interval,
    existing: &[Reservation],
    exclude: Option<&str>,
) -> Result<bool> {
    for reservation in existing {
        if reservation.date != date {
            continue;
        }
        if exclude == Some(reservation.id.as_str()) {
            continue;
        }
        if candidate.overlaps(&reservation.interval()?) {
            return Ok(true);
        }
    }
    Ok(false)
}
