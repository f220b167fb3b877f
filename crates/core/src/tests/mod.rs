// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod verify_tests;

use transita_domain::{Gender, Passenger};

pub fn create_test_passenger(seat_number: u32, gender: Gender) -> Passenger {
    Passenger {
        seat_number,
        name: String::from("Test Passenger"),
        age: 30,
        gender,
        meal_choice: Some(String::from("Veg")),
    }
}
