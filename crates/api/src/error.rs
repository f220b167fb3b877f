// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::passenger_policy::PassengerPolicyError;
use transita::CoreError;
use transita_domain::DomainError;
use transita_persistence::{PersistenceError, ReservationError, TripCreationError};

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// The variant, not the message text, decides how a transport layer
/// reports the failure; messages are for humans only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The request conflicts with committed state and may succeed if
    /// retried with a different selection.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// Passenger policy violation.
    PassengerPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => {
                write!(f, "Conflict: {message}")
            }
            Self::PassengerPolicyViolation { message } => {
                write!(f, "Passenger policy violation: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<PassengerPolicyError> for ApiError {
    fn from(err: PassengerPolicyError) -> Self {
        Self::PassengerPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: &DomainError) -> ApiError {
    match err {
        DomainError::EmptySeatSelection => ApiError::InvalidInput {
            field: String::from("seat_ids"),
            message: String::from("At least one seat must be selected"),
        },
        DomainError::InvalidTripName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg.clone(),
        },
        DomainError::InvalidBusType(msg) => ApiError::InvalidInput {
            field: String::from("bus_type"),
            message: msg.clone(),
        },
        DomainError::InvalidCity { which, reason } => ApiError::InvalidInput {
            field: String::from(*which),
            message: reason.clone(),
        },
        DomainError::InvalidSeatCount { count } => ApiError::InvalidInput {
            field: String::from("total_seats"),
            message: format!("Total seats must be at least 1, got {count}"),
        },
        DomainError::InvalidDepartureTime { value, error } => ApiError::InvalidInput {
            field: String::from("departs_at"),
            message: format!("'{value}' is not a valid RFC 3339 timestamp: {error}"),
        },
        DomainError::InvalidPassengerName(msg) => ApiError::InvalidInput {
            field: String::from("passengers.name"),
            message: msg.clone(),
        },
        DomainError::InvalidPassengerAge { age } => ApiError::InvalidInput {
            field: String::from("passengers.age"),
            message: format!("Age must be between 1 and 120, got {age}"),
        },
        DomainError::InvalidGender(value) => ApiError::InvalidInput {
            field: String::from("passengers.gender"),
            message: format!("'{value}' is not a recognized gender; use 'Male' or 'Female'"),
        },
        DomainError::DuplicatePassengerSeat { seat_number } => ApiError::InvalidInput {
            field: String::from("passengers.seat_number"),
            message: format!("Duplicate passenger record for seat {seat_number}"),
        },
        DomainError::RestrictedSeatViolation { .. } => ApiError::DomainRuleViolation {
            rule: String::from("restricted_seating"),
            message: err.to_string(),
        },
        DomainError::InvalidSeatStatus(_)
        | DomainError::OccupantWithoutBooking { .. }
        | DomainError::InvalidBookingStatus(_) => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a core reservation error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: &CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::TripNotFound(trip_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Trip"),
            message: format!("Trip {trip_id} does not exist"),
        },
        CoreError::SeatsNotFound { seat_ids } => {
            let ids: String = seat_ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<String>>()
                .join(", ");
            ApiError::ResourceNotFound {
                resource_type: String::from("Seat"),
                message: format!("Some seats not found: {ids}"),
            }
        }
        CoreError::SeatsUnavailable { seat_numbers } => {
            let seats: String = seat_numbers
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<String>>()
                .join(", ");
            ApiError::Conflict {
                message: format!("Seats {seats} are not available"),
            }
        }
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: &PersistenceError) -> ApiError {
    match err {
        PersistenceError::TripNotFound(trip_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Trip"),
            message: format!("Trip {trip_id} does not exist"),
        },
        PersistenceError::BookingNotFound(booking_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: format!("Booking {booking_id} does not exist"),
        },
        _ => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a reservation outcome error into an API error.
#[must_use]
pub fn translate_reservation_error(err: &ReservationError) -> ApiError {
    match err {
        ReservationError::Rejected(core_err) => translate_core_error(core_err),
        ReservationError::Storage(persistence_err) => translate_persistence_error(persistence_err),
    }
}

/// Translates a trip creation error into an API error.
#[must_use]
pub fn translate_trip_creation_error(err: &TripCreationError) -> ApiError {
    match err {
        TripCreationError::Invalid(domain_err) => translate_domain_error(domain_err),
        TripCreationError::Storage(persistence_err) => {
            translate_persistence_error(persistence_err)
        }
    }
}
