// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

/// API request to create a new trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTripRequest {
    /// Display name of the trip.
    pub name: String,
    /// Bus type or category label.
    pub bus_type: String,
    /// Origin city.
    pub origin: String,
    /// Destination city.
    pub destination: String,
    /// Scheduled departure time (RFC 3339).
    pub departs_at: String,
    /// Total number of seats to create.
    pub total_seats: u32,
    /// Fare per seat.
    pub price: u32,
    /// Comma-separated amenities list.
    pub amenities: String,
}

/// API response for a successful trip creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateTripResponse {
    /// The canonical numeric identifier.
    pub trip_id: i64,
    /// The trip name.
    pub name: String,
    /// The number of seats created.
    pub total_seats: u32,
    /// A success message.
    pub message: String,
}

/// One trip in a listing, with its availability snapshot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TripSummary {
    /// The canonical numeric identifier.
    pub trip_id: i64,
    /// The trip name.
    pub name: String,
    /// Bus type or category label.
    pub bus_type: String,
    /// Origin city.
    pub origin: String,
    /// Destination city.
    pub destination: String,
    /// Scheduled departure time (RFC 3339).
    pub departs_at: String,
    /// Total number of seats.
    pub total_seats: u32,
    /// Fare per seat.
    pub price: u32,
    /// Comma-separated amenities list.
    pub amenities: String,
    /// Seats currently available. Snapshot only; a concurrent
    /// reservation may make it stale immediately.
    pub available_seats: u32,
}

/// API response listing all trips.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListTripsResponse {
    /// Trips ordered by departure time.
    pub trips: Vec<TripSummary>,
}

/// One seat in a trip detail response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeatInfo {
    /// The canonical numeric identifier.
    pub seat_id: i64,
    /// Seat number, unique within the trip.
    pub seat_number: u32,
    /// Seat status ("AVAILABLE", "BOOKED", or "LOCKED").
    pub status: String,
    /// Whether this seat is reservable only by female passengers.
    pub is_restricted: bool,
    /// Gender of the occupying passenger, when booked with one declared.
    pub occupant_gender: Option<String>,
}

/// API response for a trip detail request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetTripDetailsResponse {
    /// The trip summary.
    pub trip: TripSummary,
    /// The full seat map in seat-number order.
    pub seats: Vec<SeatInfo>,
}

/// One passenger record in a reservation request.
///
/// This DTO is distinct from domain types and represents the API contract;
/// the gender arrives as a string and is parsed by the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerRecord {
    /// The seat number this record applies to.
    pub seat_number: u32,
    /// Passenger name.
    pub name: String,
    /// Passenger age in years.
    pub age: u8,
    /// Declared gender ("Male" or "Female").
    pub gender: String,
    /// Optional meal choice.
    pub meal_choice: Option<String>,
}

/// API request to reserve seats on a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveSeatsRequest {
    /// The trip to reserve on.
    pub trip_id: i64,
    /// The user the booking is made for.
    pub user_id: i64,
    /// The requested seat ids, in any order.
    pub seat_ids: Vec<i64>,
    /// Passenger records keyed by seat number. May be empty.
    pub passengers: Vec<PassengerRecord>,
}

/// API response for a successful reservation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReserveSeatsResponse {
    /// The canonical booking identifier.
    pub booking_id: i64,
    /// The trip the seats belong to.
    pub trip_id: i64,
    /// The user the booking was made for.
    pub user_id: i64,
    /// The granted seat ids, sorted ascending.
    pub seat_ids: Vec<i64>,
    /// Booking status ("CONFIRMED").
    pub status: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// A success message.
    pub message: String,
}
