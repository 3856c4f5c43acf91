//! The booking lifecycle: Draft → Validated → Submitted → Committed or
//! Rejected.
//!
//! Each stage is its own type, so the pre-check/commit race is an explicit
//! transition rather than implicit callback sequencing: a draft must pass
//! validation (fields, range, local conflict pre-check) before it can be
//! submitted, and a submitted booking must be resolved against the remote
//! store's verdict before it becomes a [`Reservation`]. The store remains
//! the final arbiter — it may reject a booking that passed the local
//! pre-check if another writer got there first.

use crate::conflict::{has_conflict, has_conflict_excluding};
use crate::error::{AgendaError, Result};
use crate::reservation::{NewReservation, Reservation};
use crate::time::{parse_date, Interval};

/// Raw form data for a new or edited booking, nothing checked yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub client_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// A draft that passed field, range, and local-conflict validation against a
/// snapshot of existing reservations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    record: NewReservation,
}

/// A validated booking handed off to the remote store, awaiting its verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    record: NewReservation,
}

/// The remote store's verdict on a submitted booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOutcome {
    /// The store accepted the write and assigned an id.
    Accepted { id: String },
    /// The store rejected the write as conflicting (HTTP 409 or the
    /// "agenda conflict" sentinel body) — another writer won the race.
    Conflict,
}

impl Draft {
    /// Validate the draft against a snapshot of existing reservations.
    ///
    /// Checks run in order: required fields, label syntax, `start < end`,
    /// then the local conflict pre-check. Pass the reservation's own id as
    /// `exclude` when editing, so an unchanged time range never conflicts
    /// with itself.
    ///
    /// # Errors
    /// `MissingField`, `InvalidDate`, `InvalidTime`, `InvalidRange`, or
    /// `Conflict`, whichever fails first.
    pub fn validate(self, existing: &[Reservation], exclude: Option<&str>) -> Result<Validated> {
        if self.date.is_empty() {
            return Err(AgendaError::MissingField("date"));
        }
        if self.start_time.is_empty() {
            return Err(AgendaError::MissingField("start_time"));
        }
        if self.end_time.is_empty() {
            return Err(AgendaError::MissingField("end_time"));
        }

        let date = parse_date(&self.date)?;
        let candidate = Interval::from_labels(&self.start_time, &self.end_time)?;

        let conflicting = match exclude {
            Some(id) => has_conflict_excluding(date, candidate, existing, id)?,
            None => has_conflict(date, candidate, existing)?,
        };
        if conflicting {
            return Err(AgendaError::Conflict {
                date,
                start: self.start_time,
                end: self.end_time,
            });
        }

        Ok(Validated {
            record: NewReservation {
                client_name: self.client_name,
                date,
                start_time: self.start_time,
                end_time: self.end_time,
            },
        })
    }
}

impl Validated {
    /// Hand the booking to the remote store.
    pub fn submit(self) -> Submitted {
        Submitted {
            record: self.record,
        }
    }

    pub fn record(&self) -> &NewReservation {
        &self.record
    }
}

impl Submitted {
    /// The create/update body to send to the store.
    pub fn payload(&self) -> &NewReservation {
        &self.record
    }

    /// Resolve the booking against the store's verdict.
    ///
    /// # Errors
    /// `RemoteConflict` when the store rejected the write: the local
    /// snapshot that passed the pre-check is stale, and the caller should
    /// refresh before retrying rather than resubmit blindly.
    pub fn resolve(self, outcome: RemoteOutcome) -> Result<Reservation> {
        match outcome {
            RemoteOutcome::Accepted { id } => Ok(Reservation {
                id,
                client_name: self.record.client_name,
                date: self.record.date,
                start_time: self.record.start_time,
                end_time: self.record.end_time,
            }),
            RemoteOutcome::Conflict => Err(AgendaError::RemoteConflict),
        }
    }
}
