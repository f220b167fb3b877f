// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use num_traits::ToPrimitive;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;
use transita_domain::{NewTrip, SeatState, is_restricted_seat_number};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{NewSeatRow, NewTripRow};
use crate::diesel_schema::{seats, trips};
use crate::error::PersistenceError;

/// Inserts a trip and its seat inventory.
///
/// Seats are numbered `1..=total_seats`; the lowest-numbered seats
/// are flagged restricted at creation time, so the restriction is a
/// property of the row, not of query-time arithmetic. All seats start
/// in the `AVAILABLE` state.
///
/// # Arguments
///
/// * `conn` - Database connection (inside the creation transaction)
/// * `new_trip` - The validated trip to insert
///
/// # Errors
///
/// Returns an error if any insert fails.
///
/// # Returns
///
/// The ID of the newly created trip.
pub fn insert_trip(
    conn: &mut SqliteConnection,
    new_trip: &NewTrip,
) -> Result<i64, PersistenceError> {
    let created_at: String = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;

    let total_seats: i32 = new_trip.total_seats.to_i32().ok_or_else(|| {
        PersistenceError::InitializationError(format!(
            "Invalid total_seats: {}",
            new_trip.total_seats
        ))
    })?;
    let price: i32 = new_trip.price.to_i32().ok_or_else(|| {
        PersistenceError::InitializationError(format!("Invalid price: {}", new_trip.price))
    })?;

    let trip_row: NewTripRow = NewTripRow {
        name: new_trip.name.clone(),
        bus_type: new_trip.bus_type.clone(),
        origin: new_trip.origin.clone(),
        destination: new_trip.destination.clone(),
        departs_at: new_trip.departs_at.clone(),
        total_seats,
        price,
        amenities: new_trip.amenities.clone(),
        created_at,
    };

    diesel::insert_into(trips::table)
        .values(&trip_row)
        .execute(conn)?;

    let trip_id: i64 = get_last_insert_rowid(conn)?;

    let mut seat_rows: Vec<NewSeatRow> =
        Vec::with_capacity(new_trip.total_seats.to_usize().unwrap_or_default());
    for number in 1..=new_trip.total_seats {
        let seat_number: i32 = number.to_i32().ok_or_else(|| {
            PersistenceError::InitializationError(format!("Invalid seat number: {number}"))
        })?;
        seat_rows.push(NewSeatRow {
            trip_id,
            seat_number,
            status: String::from(SeatState::Available.as_status_str()),
            is_restricted: i32::from(is_restricted_seat_number(number)),
            occupant_gender: None,
        });
    }

    diesel::insert_into(seats::table)
        .values(&seat_rows)
        .execute(conn)?;

    info!(
        trip_id,
        total_seats = new_trip.total_seats,
        "Created trip with seat inventory"
    );

    Ok(trip_id)
}
