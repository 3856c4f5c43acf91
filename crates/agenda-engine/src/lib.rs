//! # agenda-engine
//!
//! Booking conflict detection and time-slot availability for court
//! reservation calendars.
//!
//! The engine is a pure, stateless set of functions over an in-memory
//! snapshot of [`Reservation`]s: it decides whether a proposed booking
//! overlaps an existing one, which picker options are selectable, and which
//! catalog slots a public viewer sees as free. It never performs I/O, never
//! caches the snapshot, and never mutates it — callers own create, update,
//! and delete against the remote store and refresh the snapshot themselves.
//!
//! ## Modules
//!
//! - [`time`] — "HH:MM" labels ↔ minute-of-day, half-open [`Interval`]s and
//!   the overlap predicate
//! - [`reservation`] — the stored record shape
//! - [`conflict`] — candidate-vs-snapshot conflict checks (create and edit)
//! - [`catalog`] — fixed slot menus (30-minute booking grid, hourly public grid)
//! - [`picker`] — the start/end slot-disable rule for selection UIs
//! - [`freebusy`] — free-slot derivation for the public availability view
//! - [`schedule`] — week grids, per-day grouping, display modes
//! - [`booking`] — the Draft → Validated → Submitted → Committed/Rejected
//!   lifecycle
//! - [`error`] — error types

pub mod booking;
pub mod catalog;
pub mod conflict;
pub mod error;
pub mod freebusy;
pub mod picker;
pub mod reservation;
pub mod schedule;
pub mod time;

pub use booking::{Draft, RemoteOutcome, Submitted, Validated};
pub use catalog::SlotCatalog;
pub use conflict::{has_conflict, has_conflict_excluding};
pub use error::{AgendaError, Result};
pub use freebusy::free_slots;
pub use picker::{is_option_disabled, SlotRole};
pub use reservation::{NewReservation, Reservation};
pub use time::{label_from_minutes, parse_date, to_minutes, Interval};
