//! Free-slot derivation for the public availability view.
//!
//! Tests each catalog slot against a day's reservations and keeps the labels
//! that overlap none. Pure and deterministic over its inputs: calling the
//! function again with the same snapshot restarts the same sequence.

use crate::catalog::SlotCatalog;
use crate::error::Result;
use crate::reservation::Reservation;
use crate::time::{label_from_minutes, Interval};
use chrono::NaiveDate;

/// The catalog labels whose `[start, start + step)` slot is unoccupied on
/// `date`, in catalog (ascending time) order.
///
/// Reservations on other dates are ignored. With no reservations on the
/// date, the full catalog comes back unchanged.
///
/// # Errors
/// Returns `AgendaError::InvalidTime` / `InvalidRange` if a stored label in
/// the snapshot is corrupt; validation happens up front so the returned
/// iterator itself cannot fail.
pub fn free_slots(
    catalog: &SlotCatalog,
    date: NaiveDate,
    reservations: &[Reservation],
) -> Result<impl Iterator<Item = String>> {
    let busy = day_intervals(date, reservations)?;

    Ok(catalog
        .slots()
        .filter(move |slot| !busy.iter().any(|b| slot.overlaps(b)))
        .map(|slot| label_from_minutes(slot.start)))
}

/// The occupied intervals on `date`, parsed once for the whole derivation.
fn day_intervals(date: NaiveDate, reservations: &[Reservation]) -> Result<Vec<Interval>> {
    reservations
        .iter()
        .filter(|r| r.date == date)
        .map(|r| r.interval())
        .collect()
}
