// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for trip management and seat reservation.

use std::str::FromStr;

use tracing::{info, warn};
use transita::{ReservationPlan, plan_reservation};
use transita_domain::{Booking, Gender, NewTrip, Passenger, Trip};
use transita_persistence::{InventoryStore, TripAvailability};

use crate::error::{
    ApiError, translate_core_error, translate_persistence_error, translate_reservation_error,
    translate_trip_creation_error,
};
use crate::passenger_policy::PassengerPolicy;
use crate::request_response::{
    CreateTripRequest, CreateTripResponse, GetTripDetailsResponse, ListTripsResponse,
    PassengerRecord, ReserveSeatsRequest, ReserveSeatsResponse, SeatInfo, TripSummary,
};

fn trip_summary(trip: Trip, available_seats: u32) -> TripSummary {
    TripSummary {
        trip_id: trip.trip_id,
        name: trip.name,
        bus_type: trip.bus_type,
        origin: trip.origin,
        destination: trip.destination,
        departs_at: trip.departs_at,
        total_seats: trip.total_seats,
        price: trip.price,
        amenities: trip.amenities,
        available_seats,
    }
}

/// Parses a passenger record DTO into a domain passenger.
fn parse_passenger(record: &PassengerRecord) -> Result<Passenger, ApiError> {
    let gender: Gender = Gender::from_str(&record.gender).map_err(|_| ApiError::InvalidInput {
        field: String::from("passengers.gender"),
        message: format!(
            "'{}' is not a recognized gender; use 'Male' or 'Female'",
            record.gender
        ),
    })?;

    Ok(Passenger {
        seat_number: record.seat_number,
        name: record.name.clone(),
        age: record.age,
        gender,
        meal_choice: record.meal_choice.clone(),
    })
}

/// Creates a new trip with its seat inventory.
///
/// # Arguments
///
/// * `store` - The inventory store
/// * `request` - The trip attributes
///
/// # Errors
///
/// Returns an `ApiError` if validation or persistence fails.
pub fn create_trip(
    store: &mut InventoryStore,
    request: CreateTripRequest,
) -> Result<CreateTripResponse, ApiError> {
    let new_trip: NewTrip = NewTrip {
        name: request.name,
        bus_type: request.bus_type,
        origin: request.origin,
        destination: request.destination,
        departs_at: request.departs_at,
        total_seats: request.total_seats,
        price: request.price,
        amenities: request.amenities,
    };

    let trip: Trip = store
        .create_trip(&new_trip)
        .map_err(|e| translate_trip_creation_error(&e))?;

    info!(trip_id = trip.trip_id, name = %trip.name, "Trip created");

    Ok(CreateTripResponse {
        trip_id: trip.trip_id,
        total_seats: trip.total_seats,
        message: format!("Trip '{}' created with {} seats", trip.name, trip.total_seats),
        name: trip.name,
    })
}

/// Lists all trips with their availability snapshots.
///
/// # Arguments
///
/// * `store` - The inventory store
///
/// # Errors
///
/// Returns an `ApiError` if the query fails.
pub fn list_trips(store: &mut InventoryStore) -> Result<ListTripsResponse, ApiError> {
    let listings: Vec<TripAvailability> = store
        .list_trips()
        .map_err(|e| translate_persistence_error(&e))?;

    Ok(ListTripsResponse {
        trips: listings
            .into_iter()
            .map(|listing| trip_summary(listing.trip, listing.available_seats))
            .collect(),
    })
}

/// Fetches a trip with its full seat map.
///
/// # Arguments
///
/// * `store` - The inventory store
/// * `trip_id` - The trip to fetch
///
/// # Errors
///
/// Returns `ResourceNotFound` if the trip does not exist.
pub fn get_trip_details(
    store: &mut InventoryStore,
    trip_id: i64,
) -> Result<GetTripDetailsResponse, ApiError> {
    let (trip, seats) = store
        .get_trip_with_seats(trip_id)
        .map_err(|e| translate_persistence_error(&e))?;

    let seat_infos: Vec<SeatInfo> = seats
        .iter()
        .map(|seat| SeatInfo {
            seat_id: seat.seat_id,
            seat_number: seat.seat_number,
            status: String::from(seat.state.as_status_str()),
            is_restricted: seat.restricted,
            occupant_gender: seat
                .state
                .occupant()
                .map(|gender| String::from(gender.as_str())),
        })
        .collect();

    let available_seats: u32 = u32::try_from(
        seats.iter().filter(|seat| seat.state.is_available()).count(),
    )
    .map_err(|_| ApiError::Internal {
        message: String::from("Seat count overflow"),
    })?;

    Ok(GetTripDetailsResponse {
        trip: trip_summary(trip, available_seats),
        seats: seat_infos,
    })
}

/// Reserves seats on a trip atomically.
///
/// Policy and domain validation run before any storage access; the
/// availability and restricted-seat decisions are made inside the
/// store's reservation transaction.
///
/// # Arguments
///
/// * `store` - The inventory store
/// * `request` - The reservation request
///
/// # Errors
///
/// Returns an `ApiError` classifying the refusal: invalid input,
/// missing trip or seats, unavailable seats, restricted-seat
/// violation, or an internal storage failure.
pub fn reserve_seats(
    store: &mut InventoryStore,
    request: ReserveSeatsRequest,
) -> Result<ReserveSeatsResponse, ApiError> {
    let passengers: Vec<Passenger> = request
        .passengers
        .iter()
        .map(parse_passenger)
        .collect::<Result<Vec<Passenger>, ApiError>>()?;

    let policy: PassengerPolicy = PassengerPolicy::default();
    policy.validate(request.seat_ids.len(), &passengers)?;

    let plan: ReservationPlan =
        plan_reservation(request.trip_id, request.user_id, &request.seat_ids, passengers)
            .map_err(|e| translate_core_error(&e))?;

    let booking: Booking = store.reserve(&plan).map_err(|e| {
        warn!(
            trip_id = request.trip_id,
            user_id = request.user_id,
            error = %e,
            "Reservation refused"
        );
        translate_reservation_error(&e)
    })?;

    Ok(ReserveSeatsResponse {
        booking_id: booking.booking_id,
        trip_id: booking.trip_id,
        user_id: booking.user_id,
        message: format!(
            "Booking {} confirmed for {} seat(s)",
            booking.booking_id,
            booking.seat_ids.len()
        ),
        seat_ids: booking.seat_ids,
        status: String::from(booking.status.as_str()),
        created_at: booking.created_at,
    })
}
