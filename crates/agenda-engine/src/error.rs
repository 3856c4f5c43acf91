//! Error types for agenda-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgendaError {
    /// A time label that is not strict two-digit "HH:MM" 24-hour form.
    #[error("Invalid time label: {0:?}")]
    InvalidTime(String),

    /// A date label that is not "yyyy-MM-dd".
    #[error("Invalid date label: {0:?}")]
    InvalidDate(String),

    /// Candidate range with `start >= end`. Reported before any conflict
    /// check runs.
    #[error("Start time {start} must be before end time {end}")]
    InvalidRange { start: String, end: String },

    /// A required booking field was left empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The candidate overlaps an existing reservation on the same date
    /// (local pre-check).
    #[error("{date} {start}-{end} overlaps an existing reservation")]
    Conflict {
        date: NaiveDate,
        start: String,
        end: String,
    },

    /// The remote store rejected the write despite a clean local pre-check.
    /// The local snapshot is known stale; refresh before retrying.
    #[error("The booking was rejected by the store; refresh the schedule and retry")]
    RemoteConflict,
}

pub type Result<T> = std::result::Result<T, AgendaError>;
