// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A reservation request named no seats.
    EmptySeatSelection,
    /// Trip name is empty or invalid.
    InvalidTripName(String),
    /// Bus type label is empty or invalid.
    InvalidBusType(String),
    /// Origin or destination city is empty or invalid.
    InvalidCity {
        /// Which endpoint of the route was invalid ("origin" or "destination").
        which: &'static str,
        /// The reason the value was rejected.
        reason: String,
    },
    /// Total seat count must be at least 1.
    InvalidSeatCount {
        /// The invalid count value.
        count: u32,
    },
    /// Departure time is not a valid RFC 3339 timestamp.
    InvalidDepartureTime {
        /// The invalid timestamp string.
        value: String,
        /// The parsing error message.
        error: String,
    },
    /// Passenger name is empty or invalid.
    InvalidPassengerName(String),
    /// Passenger age is outside the accepted range.
    InvalidPassengerAge {
        /// The invalid age value.
        age: u8,
    },
    /// Gender string is not a recognized value.
    InvalidGender(String),
    /// Two passenger records claim the same seat number.
    DuplicatePassengerSeat {
        /// The duplicated seat number.
        seat_number: u32,
    },
    /// A restricted seat was claimed without a female passenger.
    RestrictedSeatViolation {
        /// The restricted seat numbers that were claimed invalidly.
        seat_numbers: Vec<u32>,
    },
    /// Seat status string is not a recognized value.
    InvalidSeatStatus(String),
    /// An occupant gender was present on a seat that is not booked.
    OccupantWithoutBooking {
        /// The status the seat actually carried.
        status: String,
    },
    /// Booking status string is not a recognized value.
    InvalidBookingStatus(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySeatSelection => write!(f, "No seats selected"),
            Self::InvalidTripName(msg) => write!(f, "Invalid trip name: {msg}"),
            Self::InvalidBusType(msg) => write!(f, "Invalid bus type: {msg}"),
            Self::InvalidCity { which, reason } => {
                write!(f, "Invalid {which} city: {reason}")
            }
            Self::InvalidSeatCount { count } => {
                write!(f, "Total seats must be at least 1, got {count}")
            }
            Self::InvalidDepartureTime { value, error } => {
                write!(f, "Invalid departure time '{value}': {error}")
            }
            Self::InvalidPassengerName(msg) => write!(f, "Invalid passenger name: {msg}"),
            Self::InvalidPassengerAge { age } => {
                write!(f, "Passenger age must be between 1 and 120, got {age}")
            }
            Self::InvalidGender(value) => {
                write!(f, "Invalid gender '{value}': must be 'Male' or 'Female'")
            }
            Self::DuplicatePassengerSeat { seat_number } => {
                write!(f, "Duplicate passenger record for seat {seat_number}")
            }
            Self::RestrictedSeatViolation { seat_numbers } => {
                let seats: String = seat_numbers
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(
                    f,
                    "Seats {seats} are reserved for female passengers"
                )
            }
            Self::InvalidSeatStatus(value) => write!(f, "Invalid seat status: {value}"),
            Self::OccupantWithoutBooking { status } => {
                write!(
                    f,
                    "Seat with status {status} must not carry an occupant gender"
                )
            }
            Self::InvalidBookingStatus(value) => write!(f, "Invalid booking status: {value}"),
        }
    }
}

impl std::error::Error for DomainError {}
