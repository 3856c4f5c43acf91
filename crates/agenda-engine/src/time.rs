//! Minute-of-day time representation.
//!
//! Reservations carry "HH:MM" labels on the wire; every overlap or
//! containment decision happens on the derived minute-of-day form, never on
//! the strings. Ordering of valid labels is equivalent to numeric ordering
//! of their minute values, so either form sorts a day's bookings correctly.

use crate::error::{AgendaError, Result};
use chrono::NaiveDate;

/// Minutes in a day; valid minute-of-day values are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Convert a strict "HH:MM" label (two-digit 24-hour) to minute-of-day.
///
/// Labels are normally drawn from a slot catalog or previously stored
/// reservations, so a malformed one is a data error, not a user error.
///
/// # Errors
/// Returns `AgendaError::InvalidTime` unless the label is exactly two digits,
/// a colon, and two digits, with hour 00-23 and minute 00-59.
pub fn to_minutes(label: &str) -> Result<u32> {
    let invalid = || AgendaError::InvalidTime(label.to_string());

    let (hh, mm) = label.split_once(':').ok_or_else(invalid)?;
    // `u32: FromStr` tolerates a leading '+', so digits are checked explicitly.
    let two_digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hh) || !two_digits(mm) {
        return Err(invalid());
    }

    let hour: u32 = hh.parse().map_err(|_| invalid())?;
    let minute: u32 = mm.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    Ok(hour * 60 + minute)
}

/// Format a minute-of-day value back into its "HH:MM" label.
///
/// Inverse of [`to_minutes`] for values below [`MINUTES_PER_DAY`].
pub fn label_from_minutes(minutes: u32) -> String {
    debug_assert!(minutes < MINUTES_PER_DAY);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Parse a "yyyy-MM-dd" calendar date label.
///
/// # Errors
/// Returns `AgendaError::InvalidDate` on any other shape.
pub fn parse_date(label: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(label, "%Y-%m-%d")
        .map_err(|_| AgendaError::InvalidDate(label.to_string()))
}

/// A half-open `[start, end)` time range in minute-of-day integers.
///
/// The derived, ephemeral form of a reservation's time span. Half-open
/// semantics let one booking start exactly when another ends without the two
/// counting as intersecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    /// Parse a start/end label pair into an interval, enforcing `start < end`.
    ///
    /// # Errors
    /// Returns `AgendaError::InvalidTime` for a malformed label and
    /// `AgendaError::InvalidRange` when the range is empty or inverted.
    pub fn from_labels(start: &str, end: &str) -> Result<Self> {
        let start_minutes = to_minutes(start)?;
        let end_minutes = to_minutes(end)?;
        if start_minutes >= end_minutes {
            return Err(AgendaError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self {
            start: start_minutes,
            end: end_minutes,
        })
    }

    /// Whether two half-open intervals intersect.
    ///
    /// Two intervals overlap iff `a.start < b.end && a.end > b.start`. This
    /// is the single source of truth for every intersection decision in the
    /// engine: create checks, edit checks, and slot occupancy. Back-to-back
    /// intervals (`a.end == b.start`) are NOT overlapping; identical
    /// intervals are.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && self.end > other.start
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end - self.start
    }
}
