// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and rule validation for the seat reservation system.
//!
//! Pure types only: trips, seats, passengers, bookings, and the
//! validation rules over them. The restricted-seat rule (the lowest
//! four seat numbers are reservable only by female passengers) lives
//! here, as does the status/occupant co-mutation invariant enforced
//! structurally by [`SeatState`]. No I/O and no dependencies on the
//! rest of the system.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use types::{
    Booking, BookingStatus, Gender, NewTrip, Passenger, RESTRICTED_SEAT_COUNT, Seat, SeatState,
    Trip, is_restricted_seat_number,
};
pub use validation::{
    MAX_PASSENGER_AGE, MIN_PASSENGER_AGE, validate_new_trip, validate_passenger,
    validate_passengers,
};
