//! Error types for the hotel_core library.

use crate::date::CalendarDate;
use crate::types::RoomNumber;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for hotel_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure to turn raw input into a valid calendar date
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Input was not three integers (day, month, year)
    #[error("malformed date '{0}', expected dd mm yyyy")]
    Malformed(String),

    /// Input parsed but does not name a real calendar day in range
    #[error("invalid date {0}")]
    Invalid(CalendarDate),
}

/// Reasons a booking request is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("customer limit of {capacity} reached, cannot book more rooms")]
    CapacityExceeded { capacity: usize },

    #[error("guest name must be between 1 and {max_len} characters")]
    InvalidGuestName { max_len: usize },

    #[error("room {room} is outside the range 1-{max_rooms}")]
    InvalidRoom { room: RoomNumber, max_rooms: RoomNumber },

    #[error("invalid date {0}")]
    InvalidDate(CalendarDate),

    #[error("check-out date {check_out} must be after the check-in date {check_in}")]
    InvertedRange {
        check_in: CalendarDate,
        check_out: CalendarDate,
    },

    #[error("room {room} is not available for the given dates")]
    RoomUnavailable { room: RoomNumber },
}

/// No reservation exists for the requested room
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no booking found for room {room}")]
pub struct NotFound {
    pub room: RoomNumber,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckInError {
    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error("guest {guest} in room {room} is already checked in")]
    AlreadyCheckedIn { room: RoomNumber, guest: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CheckOutError {
    #[error("no checked-in guest found for room {room}")]
    NotCheckedIn { room: RoomNumber },
}
