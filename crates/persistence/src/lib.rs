// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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
#![allow(clippy::multiple_crate_versions)]

//! Seat inventory persistence for the booking system.
//!
//! This crate owns the `SQLite` schema (trips, seats, bookings),
//! embedded migrations, and the [`InventoryStore`] adapter the rest of
//! the system talks to. The store's [`reserve`](InventoryStore::reserve)
//! method runs the reservation decision inside a single
//! `BEGIN IMMEDIATE` transaction: the write lock is acquired up front,
//! so two reservations contending for the same seats serialize and the
//! loser observes the winner's committed `BOOKED` rows.
//!
//! Seat availability is decided only here, against committed rows
//! fetched under the transaction. Everything read outside a
//! reservation transaction is a snapshot and may be stale.

use std::sync::atomic::{AtomicU64, Ordering};

use diesel::prelude::*;
use tracing::{debug, info};

use transita::{CoreError, ReservationPlan, verify_seat_records};
use transita_domain::{Booking, NewTrip, Seat, Trip, validate_new_trip};

pub mod backend;
pub mod data_models;
pub mod diesel_schema;
pub mod error;
pub mod mutations;
pub mod queries;

#[cfg(test)]
mod tests;

pub use data_models::TripAvailability;
pub use error::{PersistenceError, ReservationError, TripCreationError};

/// Counter for generating unique in-memory database names, so
/// concurrent tests never share state by accident.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The seat inventory store.
///
/// Owns one `SQLite` connection. Handlers that need concurrent access
/// across threads open one store per thread against the same file
/// database; correctness comes from the database transaction, not from
/// sharing this struct.
pub struct InventoryStore {
    conn: SqliteConnection,
}

impl InventoryStore {
    /// Creates a store backed by a uniquely named in-memory database.
    ///
    /// Each call gets a fresh, empty, migrated database. Intended for
    /// tests and for running the server without a data file.
    ///
    /// # Errors
    ///
    /// Returns an error if initialization or migration fails.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let database_url: String =
            format!("file:transita_mem_{id}?mode=memory&cache=shared");
        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&database_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;
        Ok(Self { conn })
    }

    /// Creates a store backed by a file database, enabling WAL mode.
    ///
    /// Opening an already-initialized file is safe; migrations are
    /// idempotent. Multiple stores may be opened against the same file
    /// concurrently.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if initialization or migration fails.
    pub fn new_with_file(path: &str) -> Result<Self, PersistenceError> {
        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;
        Ok(Self { conn })
    }

    /// Creates a trip and its seat inventory.
    ///
    /// Attributes are validated first; nothing is written on a
    /// validation failure. The trip row and all seat rows are inserted
    /// in one transaction.
    ///
    /// # Arguments
    ///
    /// * `new_trip` - The trip attributes
    ///
    /// # Errors
    ///
    /// Returns `Invalid` if validation fails, `Storage` if any insert
    /// fails.
    ///
    /// # Returns
    ///
    /// The created trip as stored.
    pub fn create_trip(&mut self, new_trip: &NewTrip) -> Result<Trip, TripCreationError> {
        validate_new_trip(new_trip)?;

        let trip: Trip = self
            .conn
            .transaction(|conn| -> Result<Trip, PersistenceError> {
                let trip_id: i64 = mutations::trips::insert_trip(conn, new_trip)?;
                queries::trips::get_trip(conn, trip_id)?
                    .ok_or(PersistenceError::TripNotFound(trip_id))
            })?;

        Ok(trip)
    }

    /// Lists all trips with their available-seat counts, ordered by
    /// departure time.
    ///
    /// The counts are a snapshot; a concurrent reservation may make
    /// them stale immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_trips(&mut self) -> Result<Vec<TripAvailability>, PersistenceError> {
        queries::trips::list_trips(&mut self.conn)
    }

    /// Fetches a trip with its full seat map, ordered by seat number.
    ///
    /// # Arguments
    ///
    /// * `trip_id` - The trip ID to look up
    ///
    /// # Errors
    ///
    /// Returns `TripNotFound` if the trip does not exist.
    pub fn get_trip_with_seats(
        &mut self,
        trip_id: i64,
    ) -> Result<(Trip, Vec<Seat>), PersistenceError> {
        queries::trips::get_trip_with_seats(&mut self.conn, trip_id)
    }

    /// Fetches a booking receipt by ID.
    ///
    /// # Arguments
    ///
    /// * `booking_id` - The booking ID to look up
    ///
    /// # Errors
    ///
    /// Returns `BookingNotFound` if the booking does not exist.
    pub fn get_booking(&mut self, booking_id: i64) -> Result<Booking, PersistenceError> {
        queries::bookings::get_booking(&mut self.conn, booking_id)
    }

    /// Executes a reservation plan atomically.
    ///
    /// Runs the entire decision inside one `BEGIN IMMEDIATE`
    /// transaction: trip existence, seat row fetch in the plan's
    /// canonical ascending order, existence and availability and
    /// restricted-seat verification, then the seat updates and booking
    /// insert. Any failure rolls back every write, so a reservation
    /// either grants all requested seats or none of them.
    ///
    /// # Arguments
    ///
    /// * `plan` - A validated reservation plan
    ///
    /// # Errors
    ///
    /// Returns `Rejected` with the typed refusal (trip or seats not
    /// found, seats unavailable, restricted-seat violation) or
    /// `Storage` if the database fails.
    ///
    /// # Returns
    ///
    /// The committed booking receipt.
    pub fn reserve(&mut self, plan: &ReservationPlan) -> Result<Booking, ReservationError> {
        debug!(
            trip_id = plan.trip_id,
            user_id = plan.user_id,
            seats = plan.seat_ids.len(),
            "Executing reservation transaction"
        );

        let booking: Booking = self.conn.immediate_transaction(|conn| {
            if queries::trips::get_trip(conn, plan.trip_id)?.is_none() {
                return Err(ReservationError::Rejected(CoreError::TripNotFound(
                    plan.trip_id,
                )));
            }

            let records = queries::seats::fetch_seat_records(conn, plan.trip_id, &plan.seat_ids)?;
            let grants =
                verify_seat_records(plan, &records).map_err(ReservationError::Rejected)?;

            mutations::reservations::mark_seats_booked(conn, &grants)?;
            let booking_id: i64 = mutations::reservations::insert_booking(conn, plan)?;

            queries::bookings::get_booking(conn, booking_id).map_err(ReservationError::Storage)
        })?;

        info!(
            booking_id = booking.booking_id,
            trip_id = booking.trip_id,
            seats = booking.seat_ids.len(),
            "Reservation granted"
        );

        Ok(booking)
    }
}
