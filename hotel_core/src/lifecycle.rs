//! Check-in and check-out transitions.
//!
//! Each reservation is either `Booked` or `CheckedIn`. Checking in moves it to
//! `CheckedIn`; checking out moves it back to `Booked`. Cancellation removes a
//! reservation from the store and is not a lifecycle transition.

use crate::error::{CheckInError, CheckOutError, NotFound};
use crate::store::ReservationStore;
use crate::types::{ReservationId, RoomNumber};

impl ReservationStore {
    /// Check in the earliest-inserted reservation for `room`.
    ///
    /// Fails with `AlreadyCheckedIn` when that reservation is already checked
    /// in, even if a later reservation for the same room is not.
    pub fn check_in(&mut self, room: RoomNumber) -> Result<ReservationId, CheckInError> {
        let pos = self.position_for_room(room).ok_or(NotFound { room })?;
        self.check_in_at(pos)
    }

    /// Check in exactly the reservation with `id`
    pub fn check_in_reservation(&mut self, id: ReservationId) -> Result<ReservationId, CheckInError> {
        let pos = self
            .position_of(id)
            .ok_or(NotFound { room: id.room })?;
        self.check_in_at(pos)
    }

    /// Check out the earliest-inserted checked-in reservation for `room`.
    pub fn check_out(&mut self, room: RoomNumber) -> Result<ReservationId, CheckOutError> {
        let pos = self
            .list()
            .position(|r| r.room() == room && r.is_checked_in())
            .ok_or(CheckOutError::NotCheckedIn { room })?;
        Ok(self.check_out_at(pos))
    }

    /// Check out exactly the reservation with `id`
    pub fn check_out_reservation(
        &mut self,
        id: ReservationId,
    ) -> Result<ReservationId, CheckOutError> {
        let pos = self
            .position_of(id)
            .filter(|pos| self.list().nth(*pos).is_some_and(|r| r.is_checked_in()))
            .ok_or(CheckOutError::NotCheckedIn { room: id.room })?;
        Ok(self.check_out_at(pos))
    }

    fn check_in_at(&mut self, pos: usize) -> Result<ReservationId, CheckInError> {
        let reservation = self.reservation_mut(pos);
        if reservation.checked_in {
            return Err(CheckInError::AlreadyCheckedIn {
                room: reservation.room(),
                guest: reservation.guest_name.clone(),
            });
        }
        reservation.checked_in = true;
        tracing::info!(
            "Checked in {} to room {} ({})",
            reservation.guest_name,
            reservation.room(),
            reservation.id
        );
        Ok(reservation.id)
    }

    fn check_out_at(&mut self, pos: usize) -> ReservationId {
        let reservation = self.reservation_mut(pos);
        reservation.checked_in = false;
        tracing::info!(
            "Checked out {} from room {} ({})",
            reservation.guest_name,
            reservation.room(),
            reservation.id
        );
        reservation.id
    }
}
