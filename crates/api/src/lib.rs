// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

//! API boundary layer for the seat reservation system.
//!
//! Transport-agnostic request/response types, handler functions, and
//! error translation. The server binary maps these onto HTTP; nothing
//! in this crate knows about axum or status codes. Domain, core, and
//! persistence errors are translated explicitly into [`ApiError`] so
//! internal error shapes never leak into the API contract.

pub mod error;
pub mod handlers;
pub mod passenger_policy;
pub mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
    translate_reservation_error, translate_trip_creation_error,
};
pub use passenger_policy::{PassengerPolicy, PassengerPolicyError};
