//! Week-view derivation: grouping a reservation snapshot into the 7-day
//! grids and per-day cards the calendar surfaces render.
//!
//! Weeks start on Monday. Two public-view variants exist and are preserved
//! as explicit configuration: a detailed listing of booked spans with client
//! names, and a free/busy listing of open catalog slots.

use crate::catalog::SlotCatalog;
use crate::error::Result;
use crate::freebusy::free_slots;
use crate::reservation::Reservation;
use chrono::{Days, NaiveDate, Weekday};

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

/// The seven consecutive days beginning at `start`.
pub fn week_days(start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| start + Days::new(i as u64))
}

/// One day's bookings, sorted by start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub bookings: Vec<Reservation>,
}

/// One day's open slots for a given catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub free: Vec<String>,
}

/// Which of the two public-view variants to derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Booked spans with client labels.
    Detailed,
    /// Open catalog slots only; bookings themselves are not exposed.
    FreeBusy,
}

/// A derived week view in either display mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeekView {
    Detailed(Vec<DaySchedule>),
    FreeBusy(Vec<DayAvailability>),
}

/// Group a snapshot by day, each day's bookings ordered by start time.
///
/// Label ordering equals minute ordering for valid "HH:MM" labels, so the
/// sort compares the strings directly.
pub fn day_schedules(days: &[NaiveDate], reservations: &[Reservation]) -> Vec<DaySchedule> {
    days.iter()
        .map(|&date| {
            let mut bookings: Vec<Reservation> = reservations
                .iter()
                .filter(|r| r.date == date)
                .cloned()
                .collect();
            bookings.sort_by(|a, b| a.start_time.cmp(&b.start_time));
            DaySchedule { date, bookings }
        })
        .collect()
}

/// The free/busy variant: open catalog slots per day.
pub fn week_availability(
    days: &[NaiveDate],
    catalog: &SlotCatalog,
    reservations: &[Reservation],
) -> Result<Vec<DayAvailability>> {
    days.iter()
        .map(|&date| {
            Ok(DayAvailability {
                date,
                free: free_slots(catalog, date, reservations)?.collect(),
            })
        })
        .collect()
}

/// Derive the requested week view over `days`.
///
/// `catalog` supplies the slot grid for [`DisplayMode::FreeBusy`]; the
/// detailed mode lists the reservations themselves.
pub fn week_view(
    days: &[NaiveDate],
    catalog: &SlotCatalog,
    reservations: &[Reservation],
    mode: DisplayMode,
) -> Result<WeekView> {
    match mode {
        DisplayMode::Detailed => Ok(WeekView::Detailed(day_schedules(days, reservations))),
        DisplayMode::FreeBusy => Ok(WeekView::FreeBusy(week_availability(
            days,
            catalog,
            reservations,
        )?)),
    }
}

/// How many rows of a `row_minutes` grid a booking block spans, partial rows
/// rounding up.
pub fn grid_rows(reservation: &Reservation, row_minutes: u32) -> Result<u32> {
    Ok(reservation.interval()?.duration_minutes().div_ceil(row_minutes))
}

/// Deterministic hue in `0..360` for a reservation id, so a booking keeps
/// its color across renders and clients. Byte sum of the id modulo 360.
pub fn color_hue(id: &str) -> u32 {
    id.bytes().map(u32::from).sum::<u32>() % 360
}
