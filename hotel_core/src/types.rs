//! Core domain types for the hotel reservation system.

use crate::date::CalendarDate;
use crate::interval::StayInterval;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Room numbers run from 1 to the configured room count
pub type RoomNumber = u32;

/// Identity of a reservation.
///
/// A room can be booked many times over, so the room number alone is not
/// unique. `index` is assigned by the store at booking time and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReservationId {
    pub room: RoomNumber,
    pub index: u64,
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.room, self.index)
    }
}

/// Where a reservation is in its stay
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    Booked,
    CheckedIn,
}

/// A booked stay for one guest in one room
///
/// Only serialized; reservations are created through
/// [`ReservationStore::book`](crate::ReservationStore::book).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reservation {
    pub(crate) id: ReservationId,
    pub(crate) guest_name: String,
    pub(crate) stay: StayInterval,
    pub(crate) checked_in: bool,
}

impl Reservation {
    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    pub fn room(&self) -> RoomNumber {
        self.id.room
    }

    pub fn stay(&self) -> StayInterval {
        self.stay
    }

    pub fn check_in_date(&self) -> CalendarDate {
        self.stay.check_in()
    }

    pub fn check_out_date(&self) -> CalendarDate {
        self.stay.check_out()
    }

    pub fn is_checked_in(&self) -> bool {
        self.checked_in
    }

    pub fn state(&self) -> LifecycleState {
        if self.checked_in {
            LifecycleState::CheckedIn
        } else {
            LifecycleState::Booked
        }
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer: {}, Room: {}, Check-in: {}, Check-out: {}, Checked-in: {}",
            self.guest_name,
            self.room(),
            self.check_in_date(),
            self.check_out_date(),
            if self.checked_in { "Yes" } else { "No" }
        )
    }
}
