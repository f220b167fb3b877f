// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Connection establishment, migration application, and foreign key
//! enforcement are also exercised implicitly by every test that calls
//! `InventoryStore::new_in_memory()`; these tests cover the explicit
//! initialization contracts.

use crate::InventoryStore;
use crate::tests::create_test_trip;

#[test]
fn test_in_memory_store_initializes() {
    let mut store: InventoryStore =
        InventoryStore::new_in_memory().expect("In-memory store should initialize");
    let trips = store.list_trips().expect("Listing should succeed");
    assert!(trips.is_empty());
}

#[test]
fn test_in_memory_stores_are_isolated() {
    let mut first: InventoryStore =
        InventoryStore::new_in_memory().expect("First store should initialize");
    let mut second: InventoryStore =
        InventoryStore::new_in_memory().expect("Second store should initialize");

    first
        .create_trip(&create_test_trip())
        .expect("Trip should be created");

    let trips = second.list_trips().expect("Listing should succeed");
    assert!(
        trips.is_empty(),
        "A trip created in one in-memory store must not be visible in another"
    );
}

#[test]
fn test_file_store_migrations_are_idempotent() {
    let path: String = crate::tests::concurrency_tests::unique_temp_db_path();

    {
        let mut store: InventoryStore =
            InventoryStore::new_with_file(&path).expect("File store should initialize");
        store
            .create_trip(&create_test_trip())
            .expect("Trip should be created");
    }

    // Reopening runs migrations again; data must survive.
    let mut reopened: InventoryStore =
        InventoryStore::new_with_file(&path).expect("Reopening should succeed");
    let trips = reopened.list_trips().expect("Listing should succeed");
    assert_eq!(trips.len(), 1);

    let _ = std::fs::remove_file(&path);
}
