// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test module for the API crate.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use transita_persistence::InventoryStore;

use crate::handlers;
use crate::request_response::{CreateTripRequest, CreateTripResponse, PassengerRecord};

pub fn create_test_trip_request() -> CreateTripRequest {
    CreateTripRequest {
        name: String::from("Coastal Express"),
        bus_type: String::from("AC Sleeper"),
        origin: String::from("Mumbai"),
        destination: String::from("Pune"),
        departs_at: String::from("2026-09-01T08:00:00Z"),
        total_seats: 40,
        price: 450,
        amenities: String::from("WiFi,Water Bottle,Charging Point"),
    }
}

pub fn create_female_record(seat_number: u32) -> PassengerRecord {
    PassengerRecord {
        seat_number,
        name: String::from("Priya Sharma"),
        age: 29,
        gender: String::from("Female"),
        meal_choice: None,
    }
}

pub fn create_male_record(seat_number: u32) -> PassengerRecord {
    PassengerRecord {
        seat_number,
        name: String::from("Rahul Verma"),
        age: 34,
        gender: String::from("Male"),
        meal_choice: Some(String::from("Veg")),
    }
}

/// Creates an in-memory store with one trip, returning its id.
pub fn setup_store_with_trip() -> (InventoryStore, i64) {
    let mut store: InventoryStore =
        InventoryStore::new_in_memory().expect("In-memory store should initialize");
    let response: CreateTripResponse =
        handlers::create_trip(&mut store, create_test_trip_request())
            .expect("Test trip should be created");
    (store, response.trip_id)
}

/// Resolves seat numbers to seat ids via the trip detail handler.
pub fn seat_ids_for_numbers(
    store: &mut InventoryStore,
    trip_id: i64,
    seat_numbers: &[u32],
) -> Vec<i64> {
    let details = handlers::get_trip_details(store, trip_id).expect("Trip should exist");
    seat_numbers
        .iter()
        .map(|number| {
            details
                .seats
                .iter()
                .find(|seat| seat.seat_number == *number)
                .expect("Seat number should exist")
                .seat_id
        })
        .collect()
}
