// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::diesel_schema::{bookings, seats, trips};
use crate::error::PersistenceError;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use std::str::FromStr;
use transita_domain::{Booking, BookingStatus, Passenger, Seat, SeatState, Trip};

/// Queryable row for the `trips` table.
#[derive(Debug, Clone, Queryable)]
pub struct TripRow {
    pub trip_id: i64,
    pub name: String,
    pub bus_type: String,
    pub origin: String,
    pub destination: String,
    pub departs_at: String,
    pub total_seats: i32,
    pub price: i32,
    pub amenities: String,
    pub created_at: String,
}

impl TripRow {
    /// Converts this row into a domain `Trip`.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored count does not fit the domain
    /// representation.
    pub fn into_domain(self) -> Result<Trip, PersistenceError> {
        let total_seats: u32 = self.total_seats.to_u32().ok_or_else(|| {
            PersistenceError::ReconstructionError(format!(
                "Invalid total_seats for trip {}: {}",
                self.trip_id, self.total_seats
            ))
        })?;
        let price: u32 = self.price.to_u32().ok_or_else(|| {
            PersistenceError::ReconstructionError(format!(
                "Invalid price for trip {}: {}",
                self.trip_id, self.price
            ))
        })?;

        Ok(Trip {
            trip_id: self.trip_id,
            name: self.name,
            bus_type: self.bus_type,
            origin: self.origin,
            destination: self.destination,
            departs_at: self.departs_at,
            total_seats,
            price,
            amenities: self.amenities,
            created_at: self.created_at,
        })
    }
}

/// Insertable row for the `trips` table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = trips)]
pub struct NewTripRow {
    pub name: String,
    pub bus_type: String,
    pub origin: String,
    pub destination: String,
    pub departs_at: String,
    pub total_seats: i32,
    pub price: i32,
    pub amenities: String,
    pub created_at: String,
}

/// Queryable row for the `seats` table.
#[derive(Debug, Clone, Queryable)]
pub struct SeatRow {
    pub seat_id: i64,
    pub trip_id: i64,
    pub seat_number: i32,
    pub status: String,
    pub is_restricted: i32,
    pub occupant_gender: Option<String>,
}

impl SeatRow {
    /// Reconstructs the seat state from the stored column pair,
    /// enforcing the status/occupant co-mutation invariant.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored columns violate the invariant
    /// or carry unknown values.
    pub fn state(&self) -> Result<SeatState, PersistenceError> {
        SeatState::from_columns(&self.status, self.occupant_gender.as_deref())
            .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
    }

    /// Converts this row into a domain `Seat`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored columns cannot be reconstructed.
    pub fn into_domain(self) -> Result<Seat, PersistenceError> {
        let state: SeatState = self.state()?;
        let seat_number: u32 = self.seat_number.to_u32().ok_or_else(|| {
            PersistenceError::ReconstructionError(format!(
                "Invalid seat_number for seat {}: {}",
                self.seat_id, self.seat_number
            ))
        })?;

        Ok(Seat {
            seat_id: self.seat_id,
            trip_id: self.trip_id,
            seat_number,
            state,
            restricted: self.is_restricted != 0,
        })
    }
}

/// Insertable row for the `seats` table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = seats)]
pub struct NewSeatRow {
    pub trip_id: i64,
    pub seat_number: i32,
    pub status: String,
    pub is_restricted: i32,
    pub occupant_gender: Option<String>,
}

/// Queryable row for the `bookings` table.
///
/// Seat ids and passenger details are stored as JSON text.
#[derive(Debug, Clone, Queryable)]
pub struct BookingRow {
    pub booking_id: i64,
    pub user_id: i64,
    pub trip_id: i64,
    pub seat_ids: String,
    pub passenger_details: String,
    pub status: String,
    pub created_at: String,
}

impl BookingRow {
    /// Converts this row into a domain `Booking`, deserializing the
    /// JSON payload columns.
    ///
    /// # Errors
    ///
    /// Returns an error if a JSON column or the status string cannot
    /// be parsed.
    pub fn into_domain(self) -> Result<Booking, PersistenceError> {
        let seat_ids: Vec<i64> = serde_json::from_str(&self.seat_ids)?;
        let passengers: Vec<Passenger> = serde_json::from_str(&self.passenger_details)?;
        let status: BookingStatus = BookingStatus::from_str(&self.status)
            .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;

        Ok(Booking {
            booking_id: self.booking_id,
            user_id: self.user_id,
            trip_id: self.trip_id,
            seat_ids,
            passengers,
            status,
            created_at: self.created_at,
        })
    }
}

/// Insertable row for the `bookings` table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBookingRow {
    pub user_id: i64,
    pub trip_id: i64,
    pub seat_ids: String,
    pub passenger_details: String,
    pub status: String,
    pub created_at: String,
}

/// A trip paired with its derived count of available seats, as served
/// by the listing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripAvailability {
    /// The trip.
    pub trip: Trip,
    /// Count of seats currently in the `AVAILABLE` state. Snapshot
    /// only; reservations may invalidate it at any time.
    pub available_seats: u32,
}
