// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use transita::{ReservationPlan, SeatGrant};
use transita_domain::{BookingStatus, Gender, SeatState};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::NewBookingRow;
use crate::diesel_schema::{bookings, seats};
use crate::error::PersistenceError;

/// Marks each granted seat as booked, recording the occupant gender
/// alongside the status so the two columns change together.
///
/// # Arguments
///
/// * `conn` - Database connection (inside the reservation transaction)
/// * `grants` - Verified seat grants, in canonical lock order
///
/// # Errors
///
/// Returns an error if any update fails.
pub fn mark_seats_booked(
    conn: &mut SqliteConnection,
    grants: &[SeatGrant],
) -> Result<(), PersistenceError> {
    for grant in grants {
        let occupant: Option<String> = grant
            .occupant
            .map(|gender: Gender| String::from(gender.as_str()));
        diesel::update(seats::table.filter(seats::seat_id.eq(grant.seat_id)))
            .set((
                seats::status.eq(SeatState::Booked { occupant: None }.as_status_str()),
                seats::occupant_gender.eq(occupant),
            ))
            .execute(conn)?;
    }
    Ok(())
}

/// Inserts the booking record for a granted reservation.
///
/// Seat IDs and passenger details are serialized to JSON text, and
/// the booking is created directly in the `CONFIRMED` state.
///
/// # Arguments
///
/// * `conn` - Database connection (inside the reservation transaction)
/// * `plan` - The reservation plan being granted
///
/// # Errors
///
/// Returns an error if serialization or the insert fails.
///
/// # Returns
///
/// The ID of the newly created booking.
pub fn insert_booking(
    conn: &mut SqliteConnection,
    plan: &ReservationPlan,
) -> Result<i64, PersistenceError> {
    let created_at: String = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;

    let booking_row: NewBookingRow = NewBookingRow {
        user_id: plan.user_id,
        trip_id: plan.trip_id,
        seat_ids: serde_json::to_string(&plan.seat_ids)?,
        passenger_details: serde_json::to_string(&plan.passengers)?,
        status: String::from(BookingStatus::Confirmed.as_str()),
        created_at,
    };

    diesel::insert_into(bookings::table)
        .values(&booking_row)
        .execute(conn)?;

    get_last_insert_rowid(conn)
}
