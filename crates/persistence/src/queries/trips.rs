// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use num_traits::ToPrimitive;
use transita_domain::{Seat, SeatState, Trip};

use crate::data_models::{SeatRow, TripAvailability, TripRow};
use crate::diesel_schema::{seats, trips};
use crate::error::PersistenceError;

/// Fetches a single trip by ID.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `trip_id` - The trip ID to look up
///
/// # Errors
///
/// Returns an error if the query fails.
///
/// # Returns
///
/// `Ok(Some(trip))` if found, `Ok(None)` if no trip has that ID.
pub fn get_trip(
    conn: &mut SqliteConnection,
    trip_id: i64,
) -> Result<Option<Trip>, PersistenceError> {
    let row: Option<TripRow> = trips::table
        .filter(trips::trip_id.eq(trip_id))
        .first::<TripRow>(conn)
        .optional()?;

    row.map(TripRow::into_domain).transpose()
}

/// Lists all trips ordered by departure time, each paired with its
/// current count of available seats.
///
/// The count is a snapshot and may be stale the moment it is read;
/// only the reservation transaction decides actual seat grants.
///
/// # Arguments
///
/// * `conn` - Database connection
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be
/// reconstructed.
pub fn list_trips(conn: &mut SqliteConnection) -> Result<Vec<TripAvailability>, PersistenceError> {
    let trip_rows: Vec<TripRow> = trips::table
        .order(trips::departs_at.asc())
        .load::<TripRow>(conn)?;

    let mut listings: Vec<TripAvailability> = Vec::with_capacity(trip_rows.len());
    for row in trip_rows {
        let available: i64 = seats::table
            .filter(seats::trip_id.eq(row.trip_id))
            .filter(seats::status.eq(SeatState::Available.as_status_str()))
            .count()
            .get_result(conn)?;
        let available_seats: u32 = available.to_u32().ok_or_else(|| {
            PersistenceError::ReconstructionError(format!(
                "Invalid available seat count for trip {}: {available}",
                row.trip_id
            ))
        })?;

        listings.push(TripAvailability {
            trip: row.into_domain()?,
            available_seats,
        });
    }

    Ok(listings)
}

/// Fetches a trip together with its full seat map, ordered by seat
/// number.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `trip_id` - The trip ID to look up
///
/// # Errors
///
/// Returns `TripNotFound` if no trip has that ID, or an error if the
/// query fails.
pub fn get_trip_with_seats(
    conn: &mut SqliteConnection,
    trip_id: i64,
) -> Result<(Trip, Vec<Seat>), PersistenceError> {
    let trip: Trip =
        get_trip(conn, trip_id)?.ok_or(PersistenceError::TripNotFound(trip_id))?;

    let seat_rows: Vec<SeatRow> = seats::table
        .filter(seats::trip_id.eq(trip_id))
        .order(seats::seat_number.asc())
        .load::<SeatRow>(conn)?;

    let mut seat_list: Vec<Seat> = Vec::with_capacity(seat_rows.len());
    for row in seat_rows {
        seat_list.push(row.into_domain()?);
    }

    Ok((trip, seat_list))
}
