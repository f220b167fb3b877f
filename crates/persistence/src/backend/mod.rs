// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! This module isolates backend-specific initialization, migration,
//! and helper functions that cannot be expressed in backend-agnostic
//! Diesel DSL.
//!
//! ## Backend Support
//!
//! - `sqlite` — the sole supported backend. Reservation correctness
//!   relies on `SQLite` transaction semantics: `BEGIN IMMEDIATE`
//!   acquires the write lock at transaction start, so two reservation
//!   transactions touching the same seat rows serialize, and the
//!   later one observes the earlier one's committed state.
//!
//! ## Backend-Agnostic Code
//!
//! All domain queries and mutations live in the `queries` and
//! `mutations` modules and use Diesel DSL exclusively. Backend code
//! is limited to:
//!
//! - Connection initialization
//! - Migration execution
//! - PRAGMA configuration (foreign keys, WAL, busy timeout)
//! - `last_insert_rowid()` retrieval

pub mod sqlite;
