// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::create_test_passenger;
use crate::{CoreError, ReservationPlan, SeatGrant, SeatRecord, plan_reservation, verify_seat_records};
use transita_domain::{DomainError, Gender, Passenger, SeatState};

fn available_seat(seat_id: i64, seat_number: u32, restricted: bool) -> SeatRecord {
    SeatRecord {
        seat_id,
        seat_number,
        state: SeatState::Available,
        restricted,
    }
}

fn booked_seat(seat_id: i64, seat_number: u32) -> SeatRecord {
    SeatRecord {
        seat_id,
        seat_number,
        state: SeatState::Booked {
            occupant: Some(Gender::Male),
        },
        restricted: false,
    }
}

#[test]
fn test_verify_grants_available_unrestricted_seats() {
    let passengers: Vec<Passenger> = vec![create_test_passenger(5, Gender::Male)];
    let plan: ReservationPlan = plan_reservation(1, 1, &[105], passengers).unwrap();
    let records: Vec<SeatRecord> = vec![available_seat(105, 5, false)];

    let grants: Vec<SeatGrant> = verify_seat_records(&plan, &records).unwrap();
    assert_eq!(grants.len(), 1);
    assert_eq!(grants[0].seat_id, 105);
    assert_eq!(grants[0].occupant, Some(Gender::Male));
}

#[test]
fn test_verify_grant_without_passenger_record_has_no_occupant() {
    let plan: ReservationPlan = plan_reservation(1, 1, &[105], Vec::new()).unwrap();
    let records: Vec<SeatRecord> = vec![available_seat(105, 5, false)];

    let grants: Vec<SeatGrant> = verify_seat_records(&plan, &records).unwrap();
    assert_eq!(grants[0].occupant, None);
}

#[test]
fn test_verify_reports_missing_seat_ids() {
    let plan: ReservationPlan = plan_reservation(1, 1, &[105, 999], Vec::new()).unwrap();
    let records: Vec<SeatRecord> = vec![available_seat(105, 5, false)];

    let result = verify_seat_records(&plan, &records);
    assert_eq!(
        result,
        Err(CoreError::SeatsNotFound {
            seat_ids: vec![999]
        })
    );
}

#[test]
fn test_verify_rejects_booked_seat_naming_its_number() {
    let plan: ReservationPlan = plan_reservation(1, 1, &[102, 103], Vec::new()).unwrap();
    let records: Vec<SeatRecord> = vec![booked_seat(102, 2), available_seat(103, 3, false)];

    let result = verify_seat_records(&plan, &records);
    assert_eq!(
        result,
        Err(CoreError::SeatsUnavailable {
            seat_numbers: vec![2]
        })
    );
}

#[test]
fn test_verify_rejects_locked_seat_as_unavailable() {
    let plan: ReservationPlan = plan_reservation(1, 1, &[104], Vec::new()).unwrap();
    let records: Vec<SeatRecord> = vec![SeatRecord {
        seat_id: 104,
        seat_number: 4,
        state: SeatState::Locked,
        restricted: false,
    }];

    let result = verify_seat_records(&plan, &records);
    assert_eq!(
        result,
        Err(CoreError::SeatsUnavailable {
            seat_numbers: vec![4]
        })
    );
}

#[test]
fn test_verify_names_every_conflicting_seat() {
    let plan: ReservationPlan = plan_reservation(1, 1, &[102, 103], Vec::new()).unwrap();
    let records: Vec<SeatRecord> = vec![booked_seat(102, 2), booked_seat(103, 3)];

    let result = verify_seat_records(&plan, &records);
    assert_eq!(
        result,
        Err(CoreError::SeatsUnavailable {
            seat_numbers: vec![2, 3]
        })
    );
}

#[test]
fn test_verify_rejects_male_passenger_on_restricted_seat() {
    let passengers: Vec<Passenger> = vec![create_test_passenger(1, Gender::Male)];
    let plan: ReservationPlan = plan_reservation(1, 1, &[101], passengers).unwrap();
    let records: Vec<SeatRecord> = vec![available_seat(101, 1, true)];

    let result = verify_seat_records(&plan, &records);
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::RestrictedSeatViolation {
                seat_numbers: vec![1]
            }
        ))
    );
}

#[test]
fn test_verify_rejects_restricted_seat_without_passenger_record() {
    // No passenger list at all: the female requirement cannot be
    // satisfied, so the restricted seat is refused.
    let plan: ReservationPlan = plan_reservation(1, 1, &[101], Vec::new()).unwrap();
    let records: Vec<SeatRecord> = vec![available_seat(101, 1, true)];

    let result = verify_seat_records(&plan, &records);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::RestrictedSeatViolation { .. }
        ))
    ));
}

#[test]
fn test_verify_accepts_female_passenger_on_restricted_seat() {
    let passengers: Vec<Passenger> = vec![create_test_passenger(1, Gender::Female)];
    let plan: ReservationPlan = plan_reservation(1, 1, &[101], passengers).unwrap();
    let records: Vec<SeatRecord> = vec![available_seat(101, 1, true)];

    let grants: Vec<SeatGrant> = verify_seat_records(&plan, &records).unwrap();
    assert_eq!(grants[0].occupant, Some(Gender::Female));
}

#[test]
fn test_verify_checks_availability_before_restriction() {
    // A booked restricted seat reports the conflict, not the gender
    // rule: the caller should reselect rather than fix the passenger.
    let plan: ReservationPlan = plan_reservation(1, 1, &[101], Vec::new()).unwrap();
    let records: Vec<SeatRecord> = vec![SeatRecord {
        seat_id: 101,
        seat_number: 1,
        state: SeatState::Booked {
            occupant: Some(Gender::Female),
        },
        restricted: true,
    }];

    let result = verify_seat_records(&plan, &records);
    assert!(matches!(result, Err(CoreError::SeatsUnavailable { .. })));
}

#[test]
fn test_verify_grants_mixed_selection_in_lock_order() {
    let passengers: Vec<Passenger> = vec![
        create_test_passenger(1, Gender::Female),
        create_test_passenger(6, Gender::Male),
    ];
    let plan: ReservationPlan = plan_reservation(1, 1, &[106, 101], passengers).unwrap();
    let records: Vec<SeatRecord> =
        vec![available_seat(101, 1, true), available_seat(106, 6, false)];

    let grants: Vec<SeatGrant> = verify_seat_records(&plan, &records).unwrap();
    assert_eq!(grants.len(), 2);
    assert_eq!(grants[0].seat_id, 101);
    assert_eq!(grants[1].seat_id, 106);
}
