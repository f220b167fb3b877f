// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write operations on the inventory tables.
//!
//! Mutations never open their own transactions; the store wraps them
//! in the transaction shape each operation requires.

pub mod reservations;
pub mod trips;
