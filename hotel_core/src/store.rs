//! In-memory reservation store.
//!
//! Reservations are kept in insertion order. Lookups by room are linear
//! scans, and every lookup by room number alone resolves to the earliest
//! inserted match.
//!
//! The store enforces one invariant above all: two reservations for the same
//! room never have overlapping stay intervals.

use crate::date::{is_before, is_valid_date, CalendarDate};
use crate::error::{BookingError, NotFound};
use crate::interval::{intervals_overlap, StayInterval};
use crate::types::{Reservation, ReservationId, RoomNumber};

/// Default upper bound on stored reservations
pub const MAX_CUSTOMERS: usize = 100;

/// Default number of rooms (numbered 1..=MAX_ROOMS)
pub const MAX_ROOMS: RoomNumber = 50;

/// Default longest guest name, in characters
pub const MAX_NAME_LENGTH: usize = 49;

/// Bounds applied by a [`ReservationStore`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreLimits {
    pub max_customers: usize,
    pub max_rooms: RoomNumber,
    pub max_name_length: usize,
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            max_customers: MAX_CUSTOMERS,
            max_rooms: MAX_ROOMS,
            max_name_length: MAX_NAME_LENGTH,
        }
    }
}

/// Ordered, capacity-bounded collection of reservations
#[derive(Clone, Debug, Default)]
pub struct ReservationStore {
    reservations: Vec<Reservation>,
    limits: StoreLimits,
    next_index: u64,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self::with_limits(StoreLimits::default())
    }

    pub fn with_limits(limits: StoreLimits) -> Self {
        Self {
            reservations: Vec::new(),
            limits,
            next_index: 0,
        }
    }

    pub fn limits(&self) -> StoreLimits {
        self.limits
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Whether `room` is free for the whole of `[check_in, check_out)`.
    ///
    /// Vacuously true when the room has no reservations.
    pub fn is_room_available(
        &self,
        room: RoomNumber,
        check_in: CalendarDate,
        check_out: CalendarDate,
    ) -> bool {
        let conflict = self.reservations_for_room(room).find(|r| {
            intervals_overlap(check_in, check_out, r.check_in_date(), r.check_out_date())
        });

        match conflict {
            Some(existing) => {
                tracing::debug!(
                    "Room {} conflicts with reservation {} ({})",
                    room,
                    existing.id(),
                    existing.stay()
                );
                false
            }
            None => true,
        }
    }

    /// Book `room` for `name` over `[check_in, check_out)`.
    pub fn book(
        &mut self,
        name: &str,
        room: RoomNumber,
        check_in: CalendarDate,
        check_out: CalendarDate,
    ) -> Result<ReservationId, BookingError> {
        let result = self.try_book(name, room, check_in, check_out);
        match &result {
            Ok(id) => tracing::info!(
                "Booked room {} for {} from {} to {} ({})",
                room,
                name.trim(),
                check_in,
                check_out,
                id
            ),
            Err(e) => tracing::warn!("Booking rejected: {}", e),
        }
        result
    }

    fn try_book(
        &mut self,
        name: &str,
        room: RoomNumber,
        check_in: CalendarDate,
        check_out: CalendarDate,
    ) -> Result<ReservationId, BookingError> {
        if self.reservations.len() >= self.limits.max_customers {
            return Err(BookingError::CapacityExceeded {
                capacity: self.limits.max_customers,
            });
        }

        let name = name.trim();
        let name_len = name.chars().count();
        if name_len == 0 || name_len > self.limits.max_name_length {
            return Err(BookingError::InvalidGuestName {
                max_len: self.limits.max_name_length,
            });
        }

        if !(1..=self.limits.max_rooms).contains(&room) {
            return Err(BookingError::InvalidRoom {
                room,
                max_rooms: self.limits.max_rooms,
            });
        }

        for date in [check_in, check_out] {
            if !is_valid_date(date) {
                return Err(BookingError::InvalidDate(date));
            }
        }

        let stay = StayInterval::new(check_in, check_out)
            .ok_or(BookingError::InvertedRange { check_in, check_out })?;

        if !self.is_room_available(room, check_in, check_out) {
            return Err(BookingError::RoomUnavailable { room });
        }

        let id = ReservationId {
            room,
            index: self.next_index,
        };
        self.next_index += 1;

        self.reservations.push(Reservation {
            id,
            guest_name: name.to_string(),
            stay,
            checked_in: false,
        });

        Ok(id)
    }

    /// Remove the earliest-inserted reservation for `room`.
    ///
    /// Relative order of the remaining reservations is preserved.
    pub fn cancel(&mut self, room: RoomNumber) -> Result<Reservation, NotFound> {
        let pos = self.position_for_room(room).ok_or(NotFound { room })?;
        let removed = self.reservations.remove(pos);
        tracing::info!("Cancelled reservation {} for {}", removed.id(), removed.guest_name());
        Ok(removed)
    }

    /// Remove exactly the reservation with `id`.
    pub fn cancel_reservation(&mut self, id: ReservationId) -> Result<Reservation, NotFound> {
        let pos = self.position_of(id).ok_or(NotFound { room: id.room })?;
        let removed = self.reservations.remove(pos);
        tracing::info!("Cancelled reservation {} for {}", removed.id(), removed.guest_name());
        Ok(removed)
    }

    /// All reservations in insertion order.
    ///
    /// The iterator borrows the store, so the view cannot change while it is
    /// alive; call `list()` again (or clone the iterator) to restart.
    pub fn list(&self) -> std::slice::Iter<'_, Reservation> {
        self.reservations.iter()
    }

    pub fn get(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id() == id)
    }

    /// Reservations for `room`, in insertion order
    pub fn reservations_for_room(
        &self,
        room: RoomNumber,
    ) -> impl Iterator<Item = &Reservation> + '_ {
        self.reservations.iter().filter(move |r| r.room() == room)
    }

    /// Reservations whose guest is currently checked in
    pub fn checked_in(&self) -> impl Iterator<Item = &Reservation> + '_ {
        self.reservations.iter().filter(|r| r.is_checked_in())
    }

    /// Rooms free for the whole of `[check_in, check_out)`.
    ///
    /// Yields nothing when the range is empty or inverted.
    pub fn available_rooms(
        &self,
        check_in: CalendarDate,
        check_out: CalendarDate,
    ) -> impl Iterator<Item = RoomNumber> + '_ {
        let rooms = if is_before(check_in, check_out) {
            1..=self.limits.max_rooms
        } else {
            1..=0
        };
        rooms.filter(move |room| self.is_room_available(*room, check_in, check_out))
    }

    pub(crate) fn position_for_room(&self, room: RoomNumber) -> Option<usize> {
        self.reservations.iter().position(|r| r.room() == room)
    }

    pub(crate) fn position_of(&self, id: ReservationId) -> Option<usize> {
        self.reservations.iter().position(|r| r.id() == id)
    }

    pub(crate) fn reservation_mut(&mut self, pos: usize) -> &mut Reservation {
        &mut self.reservations[pos]
    }
}
