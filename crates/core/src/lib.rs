// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation engine core.
//!
//! This crate holds the pure logic of the seat reservation
//! transaction, split into the two places it runs:
//!
//! - [`plan_reservation`] validates a raw request *before* any storage
//!   access and fixes the ascending seat-id order that every caller
//!   must lock in. The fixed global order is the deadlock-avoidance
//!   mechanism: when all concurrent reservations touch seat rows in
//!   the same relative order, no cycle of waiting transactions can
//!   form.
//! - [`verify_seat_records`] runs *inside* the storage transaction,
//!   against the authoritative fetched rows: existence, availability,
//!   and the restricted-seat gender rule are all decided there, never
//!   from client-supplied state.
//!
//! The crate performs no I/O; the persistence layer executes the plan
//! under its transaction primitives.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod plan;
mod verify;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::CoreError;
pub use plan::{ReservationPlan, plan_reservation};
pub use verify::{SeatGrant, SeatRecord, verify_seat_records};
