// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use transita_domain::DomainError;

/// Errors that can occur while planning or verifying a reservation.
///
/// The taxonomy is explicit so callers never classify failures by
/// matching on message text. `SeatsUnavailable` is the only retryable
/// variant: the caller should refresh availability and let the user
/// reselect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated. Not retryable without changing input.
    DomainViolation(DomainError),
    /// The referenced trip does not exist.
    TripNotFound(i64),
    /// One or more referenced seat ids do not belong to any seat of
    /// the trip.
    SeatsNotFound {
        /// The seat ids that could not be resolved.
        seat_ids: Vec<i64>,
    },
    /// One or more requested seats were no longer available at lock
    /// time. Retryable after refreshing seat state.
    SeatsUnavailable {
        /// The seat numbers that conflicted.
        seat_numbers: Vec<u32>,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::TripNotFound(trip_id) => write!(f, "Trip not found: {trip_id}"),
            Self::SeatsNotFound { seat_ids } => {
                let ids: String = seat_ids
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "Some seats not found: {ids}")
            }
            Self::SeatsUnavailable { seat_numbers } => {
                let seats: String = seat_numbers
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "Seats {seats} are not available")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
