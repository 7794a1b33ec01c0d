//! Half-open stay intervals and the overlap predicate.
//!
//! A stay occupies `[check_in, check_out)`: the guest sleeps every night from
//! the check-in day up to, but not including, the check-out day. Two stays that
//! meet on a single day (one checks out, the next checks in) therefore do not
//! overlap.

use crate::date::{is_before, CalendarDate};
use crate::error::BookingError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the requested stay `[in_start, in_end)` conflicts with an existing
/// stay `[existing_start, existing_end)`.
pub fn intervals_overlap(
    in_start: CalendarDate,
    in_end: CalendarDate,
    existing_start: CalendarDate,
    existing_end: CalendarDate,
) -> bool {
    let disjoint = !is_before(existing_start, in_end) || !is_before(in_start, existing_end);
    !disjoint
}

/// A non-empty stay interval `[check_in, check_out)`
///
/// Deserializing goes through the same check as [`StayInterval::new`], so an
/// inverted or empty range is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StayBounds")]
pub struct StayInterval {
    check_in: CalendarDate,
    check_out: CalendarDate,
}

/// Unchecked wire form of a [`StayInterval`]
#[derive(Deserialize)]
struct StayBounds {
    check_in: CalendarDate,
    check_out: CalendarDate,
}

impl TryFrom<StayBounds> for StayInterval {
    type Error = BookingError;

    fn try_from(bounds: StayBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.check_in, bounds.check_out).ok_or(BookingError::InvertedRange {
            check_in: bounds.check_in,
            check_out: bounds.check_out,
        })
    }
}

impl StayInterval {
    /// Returns `None` unless `check_in` is strictly before `check_out`.
    pub fn new(check_in: CalendarDate, check_out: CalendarDate) -> Option<Self> {
        is_before(check_in, check_out).then_some(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> CalendarDate {
        self.check_in
    }

    pub fn check_out(&self) -> CalendarDate {
        self.check_out
    }

    pub fn overlaps(&self, other: &StayInterval) -> bool {
        intervals_overlap(self.check_in, self.check_out, other.check_in, other.check_out)
    }

    /// Whether the guest is in the room on the night of `date`
    pub fn contains(&self, date: CalendarDate) -> bool {
        !is_before(date, self.check_in) && is_before(date, self.check_out)
    }

    /// Number of nights in the stay, or `None` if either end is not a valid
    /// calendar date.
    pub fn nights(&self) -> Option<i64> {
        let start = self.check_in.to_naive_date()?;
        let end = self.check_out.to_naive_date()?;
        Some((end - start).num_days())
    }
}

impl fmt::Display for StayInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.check_in, self.check_out)
    }
}
