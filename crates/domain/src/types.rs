// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of leading seats on every trip that are reserved for
/// female passengers. Seats numbered `1..=RESTRICTED_SEAT_COUNT`
/// carry the restriction; all higher numbers are unrestricted.
pub const RESTRICTED_SEAT_COUNT: u32 = 4;

/// Returns whether a seat number falls in the restricted range.
#[must_use]
pub const fn is_restricted_seat_number(seat_number: u32) -> bool {
    seat_number >= 1 && seat_number <= RESTRICTED_SEAT_COUNT
}

/// Declared gender of a passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male passenger.
    Male,
    /// Female passenger. Only females may occupy restricted seats.
    Female,
}

impl Gender {
    /// Converts this gender to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            _ => Err(DomainError::InvalidGender(s.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The state of a single seat.
///
/// Status and occupant gender change together, so they are modeled as
/// one sum type rather than two independently settable fields. An
/// occupant is only representable while the seat is booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatState {
    /// The seat may be reserved.
    Available,
    /// The seat has been granted by a confirmed booking.
    Booked {
        /// Gender of the occupying passenger, when one was declared.
        occupant: Option<Gender>,
    },
    /// Soft-hold state defined by the schema but never produced by any
    /// operation in scope. Parsed for completeness only.
    Locked,
}

impl SeatState {
    /// Converts this state to its status-column string representation.
    #[must_use]
    pub const fn as_status_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Booked { .. } => "BOOKED",
            Self::Locked => "LOCKED",
        }
    }

    /// Returns the occupant gender, if the seat is booked by a
    /// passenger with a declared gender.
    #[must_use]
    pub const fn occupant(&self) -> Option<Gender> {
        match self {
            Self::Booked { occupant } => *occupant,
            Self::Available | Self::Locked => None,
        }
    }

    /// Returns whether the seat may be granted to a reservation.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Reconstructs a seat state from its stored column pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the status string is unknown, the occupant
    /// gender does not parse, or an occupant is present on a seat that
    /// is not booked (a violation of the co-mutation invariant).
    pub fn from_columns(status: &str, occupant: Option<&str>) -> Result<Self, DomainError> {
        match status {
            "AVAILABLE" | "LOCKED" => {
                if occupant.is_some() {
                    return Err(DomainError::OccupantWithoutBooking {
                        status: status.to_string(),
                    });
                }
                if status == "AVAILABLE" {
                    Ok(Self::Available)
                } else {
                    Ok(Self::Locked)
                }
            }
            "BOOKED" => {
                let occupant: Option<Gender> = occupant.map(Gender::from_str).transpose()?;
                Ok(Self::Booked { occupant })
            }
            _ => Err(DomainError::InvalidSeatStatus(status.to_string())),
        }
    }
}

/// Status of a booking record.
///
/// Cancellation is not modeled; `Confirmed` is the only value a
/// booking can carry in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    /// The booking was committed successfully.
    Confirmed,
}

impl BookingStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONFIRMED" => Ok(Self::Confirmed),
            _ => Err(DomainError::InvalidBookingStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scheduled bus trip with a fixed seat inventory and fare.
///
/// Trips are immutable after creation; the reservation path never
/// mutates a trip row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Canonical numeric identifier assigned by the database.
    pub trip_id: i64,
    /// Display name (e.g., "Coastal Express").
    pub name: String,
    /// Bus type or category label (e.g., "Sleeper").
    pub bus_type: String,
    /// Origin city.
    pub origin: String,
    /// Destination city.
    pub destination: String,
    /// Scheduled departure time (RFC 3339).
    pub departs_at: String,
    /// Total number of seats created for this trip.
    pub total_seats: u32,
    /// Fare per seat.
    pub price: u32,
    /// Comma-separated amenities list (free text).
    pub amenities: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

/// Attributes for creating a new trip.
///
/// Seat rows are derived from `total_seats` at creation time and are
/// never supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrip {
    /// Display name.
    pub name: String,
    /// Bus type or category label.
    pub bus_type: String,
    /// Origin city.
    pub origin: String,
    /// Destination city.
    pub destination: String,
    /// Scheduled departure time (RFC 3339).
    pub departs_at: String,
    /// Total number of seats to create (must be at least 1).
    pub total_seats: u32,
    /// Fare per seat.
    pub price: u32,
    /// Comma-separated amenities list.
    pub amenities: String,
}

/// A bookable unit of a trip's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Canonical numeric identifier assigned by the database.
    pub seat_id: i64,
    /// The trip this seat belongs to. A seat belongs to exactly one
    /// trip and is never deleted.
    pub trip_id: i64,
    /// Seat number, unique within the trip (1-based).
    pub seat_number: u32,
    /// Current seat state.
    pub state: SeatState,
    /// Whether this seat is reservable only by female passengers.
    pub restricted: bool,
}

/// Passenger details submitted for one seat of a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    /// The seat number this passenger record applies to.
    pub seat_number: u32,
    /// Passenger name.
    pub name: String,
    /// Passenger age in years.
    pub age: u8,
    /// Declared gender.
    pub gender: Gender,
    /// Optional meal choice (free text).
    pub meal_choice: Option<String>,
}

/// The immutable receipt of one successful reservation transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Canonical numeric identifier assigned by the database.
    pub booking_id: i64,
    /// The user the booking was made for.
    pub user_id: i64,
    /// The trip the seats belong to.
    pub trip_id: i64,
    /// The exact set of granted seat ids, sorted ascending.
    pub seat_ids: Vec<i64>,
    /// Passenger details as submitted, keyed by seat number.
    pub passengers: Vec<Passenger>,
    /// Booking status. Always `Confirmed` in scope.
    pub status: BookingStatus,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}
