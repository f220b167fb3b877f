// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use transita_domain::{DomainError, Passenger, validate_passengers};

/// A validated reservation request, ready to execute transactionally.
///
/// Construction via [`plan_reservation`] is the only way to obtain a
/// plan, so holding one proves the pre-storage checks have passed and
/// the seat ids carry the canonical lock order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationPlan {
    /// The trip the seats must belong to.
    pub trip_id: i64,
    /// The user the booking is made for.
    pub user_id: i64,
    /// Requested seat ids, sorted ascending and deduplicated.
    ///
    /// Every transaction locks seat rows in this order. Do not reorder.
    pub seat_ids: Vec<i64>,
    /// Passenger records keyed by seat number. May be empty.
    pub passengers: Vec<Passenger>,
}

impl ReservationPlan {
    /// Looks up the passenger record for a seat number, if one was
    /// submitted.
    #[must_use]
    pub fn passenger_for_seat(&self, seat_number: u32) -> Option<&Passenger> {
        self.passengers
            .iter()
            .find(|p| p.seat_number == seat_number)
    }
}

/// Validates a raw reservation request and fixes the lock order.
///
/// This runs before any storage access. Checks performed:
///
/// 1. The seat id set must be non-empty.
/// 2. Every passenger record must carry a non-empty name, an age in
///    the accepted range, and unique seat numbers.
///
/// Seat ids are sorted ascending and deduplicated; the sorted order is
/// the deadlock-avoidance contract shared by all concurrent callers.
///
/// # Arguments
///
/// * `trip_id` - The trip to reserve on
/// * `user_id` - The user the booking is made for
/// * `seat_ids` - The requested seat ids, in any order
/// * `passengers` - Optional passenger records keyed by seat number
///
/// # Errors
///
/// Returns a [`CoreError::DomainViolation`] if the selection is empty
/// or a passenger record is invalid.
pub fn plan_reservation(
    trip_id: i64,
    user_id: i64,
    seat_ids: &[i64],
    passengers: Vec<Passenger>,
) -> Result<ReservationPlan, CoreError> {
    if seat_ids.is_empty() {
        return Err(DomainError::EmptySeatSelection.into());
    }

    validate_passengers(&passengers)?;

    // Canonical lock order: ascending, no duplicates.
    let mut sorted_ids: Vec<i64> = seat_ids.to_vec();
    sorted_ids.sort_unstable();
    sorted_ids.dedup();

    Ok(ReservationPlan {
        trip_id,
        user_id,
        seat_ids: sorted_ids,
        passengers,
    })
}
