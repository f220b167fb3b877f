// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use transita_domain::Booking;

use crate::data_models::BookingRow;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;

/// Fetches a single booking by ID.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `booking_id` - The booking ID to look up
///
/// # Errors
///
/// Returns `BookingNotFound` if no booking has that ID, or an error
/// if the query fails or the stored JSON payload cannot be parsed.
pub fn get_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Booking, PersistenceError> {
    let row: BookingRow = bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .first::<BookingRow>(conn)
        .optional()?
        .ok_or(PersistenceError::BookingNotFound(booking_id))?;

    row.into_domain()
}
