// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use num_traits::ToPrimitive;
use transita::SeatRecord;

use crate::data_models::SeatRow;
use crate::diesel_schema::seats;
use crate::error::PersistenceError;

/// Fetches the seat rows for a reservation, in ascending `seat_id`
/// order.
///
/// Rows are filtered to the target trip, so a seat ID belonging to a
/// different trip is simply absent from the result and surfaces as a
/// missing seat. The ascending order matches the canonical lock
/// order the reservation engine planned, so every transaction touches
/// contended rows in the same sequence.
///
/// # Arguments
///
/// * `conn` - Database connection (inside the reservation transaction)
/// * `trip_id` - The trip the reservation targets
/// * `seat_ids` - Sorted, deduplicated seat IDs from the plan
///
/// # Errors
///
/// Returns an error if the query fails or a stored row violates the
/// status/occupant invariant.
pub fn fetch_seat_records(
    conn: &mut SqliteConnection,
    trip_id: i64,
    seat_ids: &[i64],
) -> Result<Vec<SeatRecord>, PersistenceError> {
    let rows: Vec<SeatRow> = seats::table
        .filter(seats::trip_id.eq(trip_id))
        .filter(seats::seat_id.eq_any(seat_ids))
        .order(seats::seat_id.asc())
        .load::<SeatRow>(conn)?;

    let mut records: Vec<SeatRecord> = Vec::with_capacity(rows.len());
    for row in rows {
        let state = row.state()?;
        let seat_number: u32 = row.seat_number.to_u32().ok_or_else(|| {
            PersistenceError::ReconstructionError(format!(
                "Invalid seat_number for seat {}: {}",
                row.seat_id, row.seat_number
            ))
        })?;
        records.push(SeatRecord {
            seat_id: row.seat_id,
            seat_number,
            state,
            restricted: row.is_restricted != 0,
        });
    }

    Ok(records)
}
