// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;

use transita_domain::{Gender, NewTrip, Passenger, Trip};

use crate::InventoryStore;

pub fn create_test_trip() -> NewTrip {
    NewTrip {
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

pub fn create_female_passenger(seat_number: u32) -> Passenger {
    Passenger {
        seat_number,
        name: String::from("Priya Sharma"),
        age: 29,
        gender: Gender::Female,
        meal_choice: None,
    }
}

pub fn create_male_passenger(seat_number: u32) -> Passenger {
    Passenger {
        seat_number,
        name: String::from("Rahul Verma"),
        age: 34,
        gender: Gender::Male,
        meal_choice: Some(String::from("Veg")),
    }
}

/// Creates an in-memory store with one test trip.
pub fn setup_store_with_trip() -> (InventoryStore, Trip) {
    let mut store: InventoryStore =
        InventoryStore::new_in_memory().expect("In-memory store should initialize");
    let trip: Trip = store
        .create_trip(&create_test_trip())
        .expect("Test trip should be created");
    (store, trip)
}

/// Resolves seat numbers to seat ids for a trip.
pub fn seat_ids_for_numbers(
    store: &mut InventoryStore,
    trip_id: i64,
    seat_numbers: &[u32],
) -> Vec<i64> {
    let (_, seats) = store
        .get_trip_with_seats(trip_id)
        .expect("Trip should exist");
    seat_numbers
        .iter()
        .map(|number| {
            seats
                .iter()
                .find(|seat| seat.seat_number == *number)
                .expect("Seat number should exist")
                .seat_id
        })
        .collect()
}
