// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries over the inventory tables.
//!
//! All queries use backend-agnostic Diesel DSL and operate on a
//! caller-provided connection, so the store can run them inside or
//! outside a transaction as the operation requires.

pub mod bookings;
pub mod seats;
pub mod trips;
