// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_restricted_seat_violation_names_the_seats() {
    let err: DomainError = DomainError::RestrictedSeatViolation {
        seat_numbers: vec![1, 3],
    };
    let message: String = err.to_string();
    assert!(message.contains("1, 3"));
    assert!(message.contains("female"));
}

#[test]
fn test_empty_selection_message() {
    let err: DomainError = DomainError::EmptySeatSelection;
    assert_eq!(err.to_string(), "No seats selected");
}

#[test]
fn test_invalid_age_message_names_the_bounds() {
    let err: DomainError = DomainError::InvalidPassengerAge { age: 0 };
    let message: String = err.to_string();
    assert!(message.contains("between 1 and 120"));
    assert!(message.contains('0'));
}

#[test]
fn test_invalid_gender_message_names_accepted_values() {
    let err: DomainError = DomainError::InvalidGender(String::from("x"));
    let message: String = err.to_string();
    assert!(message.contains("'Male' or 'Female'"));
}
