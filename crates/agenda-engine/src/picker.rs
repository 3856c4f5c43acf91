//! The slot-disable rule for start/end selection pickers.
//!
//! When a picker presents a discrete list of time labels, an option is
//! grayed out if choosing it in that role would land inside an existing
//! reservation's span. The rule is advisory UI guidance only: the snapshot
//! may go stale between render and submit, so the conflict check in
//! [`crate::conflict`] remains the authoritative gate at commit time.

use crate::error::Result;
use crate::reservation::Reservation;
use crate::time::to_minutes;
use chrono::NaiveDate;

/// Which end of the booking a picker option would become.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    Start,
    End,
}

/// Would selecting `option` in `role` fall inside an occupied span on `date`?
///
/// Per same-date reservation `e` (self excluded when editing):
/// - `Start`: disabled when `option >= e.start && option < e.end`;
/// - `End`: disabled when `option > e.start && option <= e.end`.
///
/// The inequality direction flips between the roles so that back-to-back
/// bookings stay selectable: a booking may start exactly when a prior one
/// ends, and may end exactly where a later one starts, while anything
/// strictly inside an occupied span is blocked in both roles.
///
/// # Errors
/// Returns `AgendaError::InvalidTime` if `option` or a stored label is
/// malformed.
pub fn is_option_disabled(
    option: &str,
    role: SlotRole,
    date: NaiveDate,
    existing: &[Reservation],
    exclude: Option<&str>,
) -> Result<bool> {
    let option_minutes = to_minutes(option)?;

    for reservation in existing {
        if reservation.date != date {
            continue;
        }
        if exclude == Some(reservation.id.as_str()) {
            continue;
        }

        let span = reservation.interval()?;
        let inside = match role {
            SlotRole::Start => option_minutes >= span.start && option_minutes < span.end,
            SlotRole::End => option_minutes > span.start && option_minutes <= span.end,
        };
        if inside {
            return Ok(true);
        }
    }

    Ok(false)
}
