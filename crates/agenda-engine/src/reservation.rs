//! The reservation record as stored by the remote agenda service.

use crate::error::Result;
use crate::time::Interval;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored reservation, in the JSON shape the REST store owns:
/// `{ id, client_name, date: "yyyy-MM-dd", start_time: "HH:MM", end_time: "HH:MM" }`.
///
/// `date` round-trips through chrono's ISO form; the time-of-day labels stay
/// strings for wire fidelity and convert to minutes on demand via
/// [`Reservation::interval`]. `start_time < end_time` is an invariant
/// enforced at creation/edit time (see [`crate::booking`]), not re-checked by
/// the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub client_name: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
}

impl Reservation {
    /// The reservation's time span as a half-open minute interval.
    ///
    /// # Errors
    /// Returns `AgendaError::InvalidTime` / `InvalidRange` if the stored
    /// labels are corrupt. Stored data is normally valid; surfacing the
    /// failure keeps a corrupt snapshot from silently widening availability.
    pub fn interval(&self) -> Result<Interval> {
        Interval::from_labels(&self.start_time, &self.end_time)
    }
}

/// The body of a create/update request. The store assigns ids, so this is a
/// [`Reservation`] without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    pub client_name: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
}
