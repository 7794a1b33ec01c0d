//! Thread-safe handle around a [`ReservationStore`].
//!
//! The store is not designed for concurrent mutation. `SharedStore` serializes
//! every operation, reads included, behind a single mutex so that the
//! availability check and the insert of a booking happen atomically.
//!
//! This is for hosts that embed the library across threads. The `hotel` binary
//! runs one session on one thread and owns a plain [`ReservationStore`].

use crate::date::CalendarDate;
use crate::error::{BookingError, CheckInError, CheckOutError, NotFound};
use crate::store::{ReservationStore, StoreLimits};
use crate::types::{Reservation, ReservationId, RoomNumber};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, mutex-guarded reservation store
#[derive(Clone, Debug, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<ReservationStore>>,
}

impl SharedStore {
    pub fn new(store: ReservationStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn with_limits(limits: StoreLimits) -> Self {
        Self::new(ReservationStore::with_limits(limits))
    }

    // A panic while holding the lock cannot leave the store half-updated:
    // each operation mutates it in a single step.
    fn lock(&self) -> MutexGuard<'_, ReservationStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn book(
        &self,
        name: &str,
        room: RoomNumber,
        check_in: CalendarDate,
        check_out: CalendarDate,
    ) -> Result<ReservationId, BookingError> {
        self.lock().book(name, room, check_in, check_out)
    }

    pub fn cancel(&self, room: RoomNumber) -> Result<Reservation, NotFound> {
        self.lock().cancel(room)
    }

    pub fn check_in(&self, room: RoomNumber) -> Result<ReservationId, CheckInError> {
        self.lock().check_in(room)
    }

    pub fn check_out(&self, room: RoomNumber) -> Result<ReservationId, CheckOutError> {
        self.lock().check_out(room)
    }

    pub fn is_room_available(
        &self,
        room: RoomNumber,
        check_in: CalendarDate,
        check_out: CalendarDate,
    ) -> bool {
        self.lock().is_room_available(room, check_in, check_out)
    }

    /// Copy of all reservations in insertion order
    pub fn snapshot(&self) -> Vec<Reservation> {
        self.lock().list().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Run `f` with exclusive access to the underlying store
    pub fn with_store<T>(&self, f: impl FnOnce(&mut ReservationStore) -> T) -> T {
        f(&mut self.lock())
    }
}
