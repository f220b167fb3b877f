// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Passenger record policy validation.
//!
//! This module enforces API-contract limits on reservation requests,
//! ahead of the domain validation the reservation engine performs.

use thiserror::Error;
use transita_domain::Passenger;

/// Passenger policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PassengerPolicyError {
    /// Too many seats requested in one booking.
    #[error("A booking may reserve at most {max_seats} seats (requested {requested})")]
    TooManySeats { max_seats: usize, requested: usize },

    /// More passenger records than requested seats.
    #[error("Passenger records ({passengers}) exceed requested seats ({seats})")]
    TooManyPassengers { passengers: usize, seats: usize },

    /// Passenger name exceeds the length limit.
    #[error("Passenger name must be at most {max_length} characters long")]
    NameTooLong { max_length: usize },
}

/// Passenger policy configuration.
pub struct PassengerPolicy {
    /// Maximum seats a single booking may reserve.
    pub max_seats_per_booking: usize,
    /// Maximum passenger name length in characters.
    pub max_name_length: usize,
}

impl Default for PassengerPolicy {
    fn default() -> Self {
        Self {
            max_seats_per_booking: 6,
            max_name_length: 100,
        }
    }
}

impl PassengerPolicy {
    /// Validates a reservation request against the policy.
    ///
    /// # Arguments
    ///
    /// * `seat_count` - The number of distinct seats requested
    /// * `passengers` - The submitted passenger records
    ///
    /// # Errors
    ///
    /// Returns a `PassengerPolicyError` if the request does not meet
    /// policy requirements.
    pub fn validate(
        &self,
        seat_count: usize,
        passengers: &[Passenger],
    ) -> Result<(), PassengerPolicyError> {
        if seat_count > self.max_seats_per_booking {
            return Err(PassengerPolicyError::TooManySeats {
                max_seats: self.max_seats_per_booking,
                requested: seat_count,
            });
        }

        if passengers.len() > seat_count {
            return Err(PassengerPolicyError::TooManyPassengers {
                passengers: passengers.len(),
                seats: seat_count,
            });
        }

        for passenger in passengers {
            if passenger.name.chars().count() > self.max_name_length {
                return Err(PassengerPolicyError::NameTooLong {
                    max_length: self.max_name_length,
                });
            }
        }

        Ok(())
    }
}
