// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use transita::CoreError;
use transita_domain::DomainError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested trip was not found.
    TripNotFound(i64),
    /// The requested booking was not found.
    BookingNotFound(i64),
    /// A stored row could not be reconstructed into a domain value.
    ReconstructionError(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// The requested resource was not found.
    NotFound(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::TripNotFound(trip_id) => write!(f, "Trip not found: {trip_id}"),
            Self::BookingNotFound(booking_id) => {
                write!(f, "Booking not found: {booking_id}")
            }
            Self::ReconstructionError(msg) => {
                write!(f, "Row reconstruction error: {msg}")
            }
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Outcome classification for a failed reservation transaction.
///
/// `Rejected` carries the typed failure taxonomy decided inside the
/// transaction (all seat writes rolled back); `Storage` carries an
/// underlying persistence failure, fatal to the current request and
/// never retried by the store itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// The reservation was rejected by validation, existence,
    /// availability, or restricted-seat checks.
    Rejected(CoreError),
    /// The underlying persistence layer failed.
    Storage(PersistenceError),
}

impl std::fmt::Display for ReservationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "Storage failure: {err}"),
        }
    }
}

impl std::error::Error for ReservationError {}

impl From<CoreError> for ReservationError {
    fn from(err: CoreError) -> Self {
        Self::Rejected(err)
    }
}

impl From<PersistenceError> for ReservationError {
    fn from(err: PersistenceError) -> Self {
        Self::Storage(err)
    }
}

impl From<diesel::result::Error> for ReservationError {
    fn from(err: diesel::result::Error) -> Self {
        Self::Storage(PersistenceError::from(err))
    }
}

/// Outcome classification for a failed trip creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripCreationError {
    /// The trip attributes failed validation; nothing was written.
    Invalid(DomainError),
    /// The underlying persistence layer failed.
    Storage(PersistenceError),
}

impl std::fmt::Display for TripCreationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "Storage failure: {err}"),
        }
    }
}

impl std::error::Error for TripCreationError {}

impl From<DomainError> for TripCreationError {
    fn from(err: DomainError) -> Self {
        Self::Invalid(err)
    }
}

impl From<PersistenceError> for TripCreationError {
    fn from(err: PersistenceError) -> Self {
        Self::Storage(err)
    }
}
