// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{NewTrip, Passenger};
use std::collections::HashSet;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Minimum accepted passenger age.
pub const MIN_PASSENGER_AGE: u8 = 1;

/// Maximum accepted passenger age.
pub const MAX_PASSENGER_AGE: u8 = 120;

/// Validates the attributes of a trip before creation.
///
/// # Arguments
///
/// * `trip` - The trip attributes to validate
///
/// # Errors
///
/// Returns an error if:
/// - The name, bus type, origin, or destination is empty
/// - The total seat count is zero
/// - The departure time is not a valid RFC 3339 timestamp
pub fn validate_new_trip(trip: &NewTrip) -> Result<(), DomainError> {
    // Rule: name must not be empty
    if trip.name.trim().is_empty() {
        return Err(DomainError::InvalidTripName(String::from(
            "Name cannot be empty",
        )));
    }

    // Rule: bus type must not be empty
    if trip.bus_type.trim().is_empty() {
        return Err(DomainError::InvalidBusType(String::from(
            "Bus type cannot be empty",
        )));
    }

    // Rule: both route endpoints must be present
    if trip.origin.trim().is_empty() {
        return Err(DomainError::InvalidCity {
            which: "origin",
            reason: String::from("City cannot be empty"),
        });
    }
    if trip.destination.trim().is_empty() {
        return Err(DomainError::InvalidCity {
            which: "destination",
            reason: String::from("City cannot be empty"),
        });
    }

    // Rule: a trip must have at least one seat
    if trip.total_seats < 1 {
        return Err(DomainError::InvalidSeatCount {
            count: trip.total_seats,
        });
    }

    // Rule: departure time must parse as RFC 3339
    if let Err(e) = OffsetDateTime::parse(&trip.departs_at, &Rfc3339) {
        return Err(DomainError::InvalidDepartureTime {
            value: trip.departs_at.clone(),
            error: e.to_string(),
        });
    }

    Ok(())
}

/// Validates a single passenger record.
///
/// This checks field constraints only; matching passengers to seats
/// happens inside the reservation transaction where the seat rows are
/// authoritative.
///
/// # Arguments
///
/// * `passenger` - The passenger record to validate
///
/// # Errors
///
/// Returns an error if:
/// - The passenger name is empty
/// - The age is outside `[MIN_PASSENGER_AGE, MAX_PASSENGER_AGE]`
pub fn validate_passenger(passenger: &Passenger) -> Result<(), DomainError> {
    // Rule: name must not be empty
    if passenger.name.trim().is_empty() {
        return Err(DomainError::InvalidPassengerName(String::from(
            "Name cannot be empty",
        )));
    }

    // Rule: age must fall within the accepted range
    if !(MIN_PASSENGER_AGE..=MAX_PASSENGER_AGE).contains(&passenger.age) {
        return Err(DomainError::InvalidPassengerAge {
            age: passenger.age,
        });
    }

    Ok(())
}

/// Validates a full passenger list for one reservation.
///
/// Each record is validated individually, and seat numbers must be
/// unique across records.
///
/// # Arguments
///
/// * `passengers` - The passenger records to validate
///
/// # Errors
///
/// Returns an error if any record is invalid or two records claim the
/// same seat number.
pub fn validate_passengers(passengers: &[Passenger]) -> Result<(), DomainError> {
    let mut seen: HashSet<u32> = HashSet::with_capacity(passengers.len());

    for passenger in passengers {
        validate_passenger(passenger)?;

        // Rule: one passenger record per seat number
        if !seen.insert(passenger.seat_number) {
            return Err(DomainError::DuplicatePassengerSeat {
                seat_number: passenger.seat_number,
            });
        }
    }

    Ok(())
}
