#![forbid(unsafe_code)]

//! Core domain model and business logic for the hotel reservation manager.
//!
//! This crate provides:
//! - Calendar date validation and ordering
//! - Half-open stay intervals and the overlap predicate
//! - The in-memory reservation store with conflict prevention
//! - Check-in/check-out lifecycle transitions
//! - A mutex-guarded store handle for concurrent callers

pub mod types;
pub mod error;
pub mod date;
pub mod interval;
pub mod store;
pub mod lifecycle;
pub mod shared;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{
    BookingError, CheckInError, CheckOutError, DateError, Error, NotFound, Result,
};
pub use types::*;
pub use date::{days_in_month, is_before, is_leap_year, is_valid_date, CalendarDate};
pub use interval::{intervals_overlap, StayInterval};
pub use store::{ReservationStore, StoreLimits};
pub use shared::SharedStore;
pub use config::Config;
