//! Slot catalogs — the fixed menus of selectable time labels.
//!
//! A catalog is configuration, not persisted state: an ordered run of
//! candidate labels at a fixed granularity. Two stock catalogs coexist and
//! are configurable independently: the 30-minute booking grid used by the
//! authenticated flow and the hourly grid used by the public availability
//! view.

use crate::time::{label_from_minutes, Interval, MINUTES_PER_DAY};

/// An ordered sequence of candidate time slots at a fixed granularity.
///
/// Labels run from `first` through `last` inclusive in `step`-minute
/// increments; each label names a slot spanning `[label, label + step)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCatalog {
    first: u32,
    last: u32,
    step: u32,
}

impl SlotCatalog {
    /// Build a catalog from minute-of-day bounds.
    ///
    /// # Panics
    /// Panics if `step` is zero, the bounds are inverted, or a slot would
    /// extend past midnight. Catalogs are compile-time configuration, so a
    /// bad one is a programming error.
    pub const fn new(first: u32, last: u32, step: u32) -> Self {
        assert!(step > 0);
        assert!(first <= last);
        assert!(last + step <= MINUTES_PER_DAY);
        Self { first, last, step }
    }

    /// The 30-minute grid offered in the authenticated booking pickers:
    /// 08:00 through 23:30.
    pub const fn booking() -> Self {
        Self::new(8 * 60, 23 * 60 + 30, 30)
    }

    /// The hourly grid shown on the public availability view: 08:00 through
    /// 23:00.
    pub const fn public_hourly() -> Self {
        Self::new(8 * 60, 23 * 60, 60)
    }

    /// Width of each slot, in minutes.
    pub const fn slot_minutes(&self) -> u32 {
        self.step
    }

    /// Number of slots in the catalog.
    pub const fn len(&self) -> usize {
        ((self.last - self.first) / self.step + 1) as usize
    }

    pub const fn is_empty(&self) -> bool {
        false // a catalog always holds at least its `first` slot
    }

    /// The slot intervals, ascending.
    pub fn slots(&self) -> impl Iterator<Item = Interval> {
        let step = self.step;
        (self.first..=self.last)
            .step_by(step as usize)
            .map(move |start| Interval {
                start,
                end: start + step,
            })
    }

    /// The slot labels, ascending.
    pub fn labels(&self) -> impl Iterator<Item = String> {
        self.slots().map(|slot| label_from_minutes(slot.start))
    }
}
