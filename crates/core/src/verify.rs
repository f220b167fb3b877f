// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::plan::ReservationPlan;
use std::collections::HashSet;
use transita_domain::{DomainError, Gender, SeatState};

/// The authoritative view of one seat row fetched inside the
/// reservation transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRecord {
    /// The seat id.
    pub seat_id: i64,
    /// The seat number within the trip.
    pub seat_number: u32,
    /// The committed seat state at lock time.
    pub state: SeatState,
    /// Whether the seat is reservable only by female passengers.
    pub restricted: bool,
}

/// One seat grant produced by a successful verification: the write
/// the transaction must apply to that seat row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrant {
    /// The seat id to mark booked.
    pub seat_id: i64,
    /// The seat number, echoed into the booking receipt.
    pub seat_number: u32,
    /// The occupant gender to record. `None` when no passenger record
    /// was submitted for this (unrestricted) seat.
    pub occupant: Option<Gender>,
}

/// Verifies fetched seat rows against a reservation plan.
///
/// This is the transactional core of the reservation and must run
/// inside the same storage transaction that fetched `records`, so the
/// decision is made against committed state no concurrent transaction
/// can change underneath us. Checks, in order:
///
/// 1. **Existence** — every planned seat id must have a row. Ids that
///    resolve to no seat of the trip fail the whole request.
/// 2. **Availability** — every row must be `Available`. A single
///    conflicting seat fails the whole request; partial grants are
///    never produced.
/// 3. **Restricted seating** — every restricted row must match a
///    passenger record with gender Female. The flag on the fetched row
///    is authoritative; client state is never trusted.
///
/// # Arguments
///
/// * `plan` - The validated reservation plan
/// * `records` - The seat rows fetched under the transaction, scoped
///   to the plan's trip
///
/// # Returns
///
/// One [`SeatGrant`] per planned seat, in lock order.
///
/// # Errors
///
/// * [`CoreError::SeatsNotFound`] if any planned id has no row
/// * [`CoreError::SeatsUnavailable`] naming the conflicting seat
///   numbers if any row is not available
/// * [`CoreError::DomainViolation`] with
///   [`DomainError::RestrictedSeatViolation`] if a restricted seat
///   lacks a female passenger
pub fn verify_seat_records(
    plan: &ReservationPlan,
    records: &[SeatRecord],
) -> Result<Vec<SeatGrant>, CoreError> {
    // Existence: the fetch returns only rows that exist for this trip,
    // so any planned id without a row does not belong to the trip.
    if records.len() != plan.seat_ids.len() {
        let found: HashSet<i64> = records.iter().map(|r| r.seat_id).collect();
        let missing: Vec<i64> = plan
            .seat_ids
            .iter()
            .copied()
            .filter(|id| !found.contains(id))
            .collect();
        return Err(CoreError::SeatsNotFound { seat_ids: missing });
    }

    // Availability: all or nothing.
    let unavailable: Vec<u32> = records
        .iter()
        .filter(|r| !r.state.is_available())
        .map(|r| r.seat_number)
        .collect();
    if !unavailable.is_empty() {
        return Err(CoreError::SeatsUnavailable {
            seat_numbers: unavailable,
        });
    }

    // Restricted seating: re-verified against the authoritative rows.
    let violations: Vec<u32> = records
        .iter()
        .filter(|r| {
            r.restricted
                && plan
                    .passenger_for_seat(r.seat_number)
                    .is_none_or(|p| p.gender != Gender::Female)
        })
        .map(|r| r.seat_number)
        .collect();
    if !violations.is_empty() {
        return Err(DomainError::RestrictedSeatViolation {
            seat_numbers: violations,
        }
        .into());
    }

    Ok(records
        .iter()
        .map(|r| SeatGrant {
            seat_id: r.seat_id,
            seat_number: r.seat_number,
            occupant: plan.passenger_for_seat(r.seat_number).map(|p| p.gender),
        })
        .collect())
}
