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

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::sync::Mutex;
use tracing::{error, info};
use transita_api::{
    ApiError,
    handlers::{create_trip, get_trip_details, list_trips, reserve_seats},
    request_response::{
        CreateTripRequest, CreateTripResponse, GetTripDetailsResponse, ListTripsResponse,
        PassengerRecord, ReserveSeatsRequest, ReserveSeatsResponse,
    },
};
use transita_persistence::InventoryStore;

/// Transita Server - HTTP server for the bus seat reservation system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Seed the database with sample trips on startup
    #[arg(long, default_value_t = false)]
    seed: bool,
}

/// Application state shared across handlers.
///
/// The store is wrapped in a Mutex for safe concurrent access from
/// handler tasks; reservation atomicity still comes from the database
/// transaction, not from this lock.
#[derive(Clone)]
struct AppState {
    /// The seat inventory store.
    store: Arc<Mutex<InventoryStore>>,
}

/// API request for creating a trip.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateTripApiRequest {
    /// Display name of the trip.
    name: String,
    /// Bus type or category label.
    bus_type: String,
    /// Origin city.
    origin: String,
    /// Destination city.
    destination: String,
    /// Scheduled departure time (RFC 3339).
    departs_at: String,
    /// Total number of seats to create.
    total_seats: u32,
    /// Fare per seat.
    price: u32,
    /// Comma-separated amenities list.
    #[serde(default)]
    amenities: String,
}

/// One passenger record in a booking request.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct PassengerApiRecord {
    /// The seat number this record applies to.
    seat_number: u32,
    /// Passenger name.
    name: String,
    /// Passenger age in years.
    age: u8,
    /// Declared gender ("Male" or "Female").
    gender: String,
    /// Optional meal choice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meal_choice: Option<String>,
}

/// API request for creating a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateBookingApiRequest {
    /// The trip to reserve on.
    trip_id: i64,
    /// The user the booking is made for. Defaults to 1 when omitted.
    #[serde(default = "default_user_id")]
    user_id: i64,
    /// The requested seat ids, in any order.
    seat_ids: Vec<i64>,
    /// Passenger records keyed by seat number.
    #[serde(default)]
    passengers: Vec<PassengerApiRecord>,
}

const fn default_user_id() -> i64 {
    1
}

/// Standard error response body.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } | ApiError::PassengerPolicyViolation { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Conflict { .. } => Self {
                status: StatusCode::CONFLICT,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for POST /admin/trips endpoint.
async fn handle_create_trip(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateTripApiRequest>,
) -> Result<(StatusCode, Json<CreateTripResponse>), HttpError> {
    info!(name = %req.name, total_seats = req.total_seats, "Handling create_trip request");

    let request: CreateTripRequest = CreateTripRequest {
        name: req.name,
        bus_type: req.bus_type,
        origin: req.origin,
        destination: req.destination,
        departs_at: req.departs_at,
        total_seats: req.total_seats,
        price: req.price,
        amenities: req.amenities,
    };

    let mut store = app_state.store.lock().await;
    let response: CreateTripResponse = create_trip(&mut store, request)?;
    drop(store);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET /trips endpoint.
async fn handle_list_trips(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListTripsResponse>, HttpError> {
    info!("Handling list_trips request");

    let mut store = app_state.store.lock().await;
    let response: ListTripsResponse = list_trips(&mut store)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/trips/{trip_id}` endpoint.
async fn handle_get_trip(
    AxumState(app_state): AxumState<AppState>,
    Path(trip_id): Path<i64>,
) -> Result<Json<GetTripDetailsResponse>, HttpError> {
    info!(trip_id, "Handling get_trip request");

    let mut store = app_state.store.lock().await;
    let response: GetTripDetailsResponse = get_trip_details(&mut store, trip_id)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST /bookings endpoint.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateBookingApiRequest>,
) -> Result<(StatusCode, Json<ReserveSeatsResponse>), HttpError> {
    info!(
        trip_id = req.trip_id,
        user_id = req.user_id,
        seats = req.seat_ids.len(),
        "Handling create_booking request"
    );

    let request: ReserveSeatsRequest = ReserveSeatsRequest {
        trip_id: req.trip_id,
        user_id: req.user_id,
        seat_ids: req.seat_ids,
        passengers: req
            .passengers
            .into_iter()
            .map(|p| PassengerRecord {
                seat_number: p.seat_number,
                name: p.name,
                age: p.age,
                gender: p.gender,
                meal_choice: p.meal_choice,
            })
            .collect(),
    };

    let mut store = app_state.store.lock().await;
    let response: ReserveSeatsResponse = reserve_seats(&mut store, request)?;
    drop(store);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/admin/trips", post(handle_create_trip))
        .route("/trips", get(handle_list_trips))
        .route("/trips/{trip_id}", get(handle_get_trip))
        .route("/bookings", post(handle_create_booking))
        .with_state(app_state)
}

/// Seeds the database with sample trips for manual testing.
///
/// Skipped when trips already exist, so reseeding a file database is
/// safe.
fn seed_database(store: &mut InventoryStore) -> Result<(), Box<dyn std::error::Error>> {
    if !store.list_trips()?.is_empty() {
        info!("Database already seeded");
        return Ok(());
    }

    let departures: [(i64, &str, &str, &str, &str, u32, u32); 3] = [
        (1, "Mumbai Express", "AC Seater", "Mumbai", "Pune", 40, 450),
        (
            2,
            "Delhi Superfast",
            "AC Seater",
            "Delhi",
            "Jaipur",
            36,
            550,
        ),
        (
            3,
            "Bangalore Sleeper",
            "AC Sleeper",
            "Bangalore",
            "Chennai",
            50,
            700,
        ),
    ];

    for (days_out, name, bus_type, origin, destination, total_seats, price) in departures {
        let departs_at: String = (OffsetDateTime::now_utc() + time::Duration::days(days_out))
            .format(&Rfc3339)?;
        let response: CreateTripResponse = create_trip(
            store,
            CreateTripRequest {
                name: String::from(name),
                bus_type: String::from(bus_type),
                origin: String::from(origin),
                destination: String::from(destination),
                departs_at,
                total_seats,
                price,
                amenities: String::from("WiFi,Water Bottle,Charging Point"),
            },
        )?;
        info!(trip_id = response.trip_id, name, total_seats, "Seeded trip");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Transita Server");

    // Initialize the store (in-memory or file-based based on CLI argument)
    let mut store: InventoryStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        InventoryStore::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        InventoryStore::new_in_memory()?
    };

    if args.seed {
        seed_database(&mut store)?;
    }

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with an in-memory store.
    fn create_test_app_state() -> AppState {
        let store: InventoryStore =
            InventoryStore::new_in_memory().expect("Failed to create in-memory store");
        AppState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    fn create_test_trip_request() -> CreateTripApiRequest {
        CreateTripApiRequest {
            name: String::from("Mumbai Express"),
            bus_type: String::from("AC Seater"),
            origin: String::from("Mumbai"),
            destination: String::from("Pune"),
            departs_at: String::from("2026-09-01T08:00:00Z"),
            total_seats: 40,
            price: 450,
            amenities: String::from("WiFi,Water Bottle"),
        }
    }

    async fn post_json(app: Router, uri: &str, body: &impl Serialize) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn get_uri(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    /// Creates a trip through the router and returns its id.
    async fn create_trip_via_router(app: &Router) -> i64 {
        let response =
            post_json(app.clone(), "/admin/trips", &create_test_trip_request()).await;
        assert_eq!(response.status(), HttpStatusCode::CREATED);
        let created: CreateTripResponse = body_json(response).await;
        created.trip_id
    }

    /// Resolves seat numbers to seat ids through the trip detail route.
    async fn seat_ids_via_router(app: &Router, trip_id: i64, seat_numbers: &[u32]) -> Vec<i64> {
        let response = get_uri(app.clone(), &format!("/trips/{trip_id}")).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let details: GetTripDetailsResponse = body_json(response).await;
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

    #[tokio::test]
    async fn test_create_trip_returns_created() {
        let app: Router = build_router(create_test_app_state());

        let response = post_json(app, "/admin/trips", &create_test_trip_request()).await;
        assert_eq!(response.status(), HttpStatusCode::CREATED);

        let created: CreateTripResponse = body_json(response).await;
        assert_eq!(created.name, "Mumbai Express");
        assert_eq!(created.total_seats, 40);
    }

    #[tokio::test]
    async fn test_create_trip_rejects_invalid_input() {
        let app: Router = build_router(create_test_app_state());

        let mut request: CreateTripApiRequest = create_test_trip_request();
        request.total_seats = 0;
        let response = post_json(app, "/admin/trips", &request).await;
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);

        let error_response: ErrorResponse = body_json(response).await;
        assert!(error_response.error);
    }

    #[tokio::test]
    async fn test_list_trips_reports_availability() {
        let app: Router = build_router(create_test_app_state());
        create_trip_via_router(&app).await;

        let response = get_uri(app, "/trips").await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let listing: ListTripsResponse = body_json(response).await;
        assert_eq!(listing.trips.len(), 1);
        assert_eq!(listing.trips[0].available_seats, 40);
    }

    #[tokio::test]
    async fn test_get_trip_returns_not_found_for_unknown_id() {
        let app: Router = build_router(create_test_app_state());

        let response = get_uri(app, "/trips/999").await;
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_booking_returns_created() {
        let app: Router = build_router(create_test_app_state());
        let trip_id: i64 = create_trip_via_router(&app).await;
        let seat_ids: Vec<i64> = seat_ids_via_router(&app, trip_id, &[10, 11]).await;

        let request: CreateBookingApiRequest = CreateBookingApiRequest {
            trip_id,
            user_id: 1,
            seat_ids: seat_ids.clone(),
            passengers: vec![],
        };
        let response = post_json(app, "/bookings", &request).await;
        assert_eq!(response.status(), HttpStatusCode::CREATED);

        let booking: ReserveSeatsResponse = body_json(response).await;
        assert_eq!(booking.seat_ids, seat_ids);
        assert_eq!(booking.status, "CONFIRMED");
    }

    #[tokio::test]
    async fn test_create_booking_conflict_for_taken_seat() {
        let app: Router = build_router(create_test_app_state());
        let trip_id: i64 = create_trip_via_router(&app).await;
        let seat_ids: Vec<i64> = seat_ids_via_router(&app, trip_id, &[10]).await;

        let request: CreateBookingApiRequest = CreateBookingApiRequest {
            trip_id,
            user_id: 1,
            seat_ids,
            passengers: vec![],
        };
        let first = post_json(app.clone(), "/bookings", &request).await;
        assert_eq!(first.status(), HttpStatusCode::CREATED);

        let second = post_json(app, "/bookings", &request).await;
        assert_eq!(second.status(), HttpStatusCode::CONFLICT);

        let error_response: ErrorResponse = body_json(second).await;
        assert!(error_response.error);
        assert!(error_response.message.contains("not available"));
    }

    #[tokio::test]
    async fn test_create_booking_rejects_male_on_restricted_seat() {
        let app: Router = build_router(create_test_app_state());
        let trip_id: i64 = create_trip_via_router(&app).await;
        let seat_ids: Vec<i64> = seat_ids_via_router(&app, trip_id, &[2]).await;

        let request: CreateBookingApiRequest = CreateBookingApiRequest {
            trip_id,
            user_id: 1,
            seat_ids,
            passengers: vec![PassengerApiRecord {
                seat_number: 2,
                name: String::from("Rahul Verma"),
                age: 34,
                gender: String::from("Male"),
                meal_choice: None,
            }],
        };
        let response = post_json(app, "/bookings", &request).await;
        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_booking_allows_female_on_restricted_seat() {
        let app: Router = build_router(create_test_app_state());
        let trip_id: i64 = create_trip_via_router(&app).await;
        let seat_ids: Vec<i64> = seat_ids_via_router(&app, trip_id, &[2]).await;

        let request: CreateBookingApiRequest = CreateBookingApiRequest {
            trip_id,
            user_id: 1,
            seat_ids,
            passengers: vec![PassengerApiRecord {
                seat_number: 2,
                name: String::from("Priya Sharma"),
                age: 29,
                gender: String::from("Female"),
                meal_choice: None,
            }],
        };
        let response = post_json(app.clone(), "/bookings", &request).await;
        assert_eq!(response.status(), HttpStatusCode::CREATED);

        let details_response = get_uri(app, &format!("/trips/{trip_id}")).await;
        let details: GetTripDetailsResponse = body_json(details_response).await;
        let seat = details
            .seats
            .iter()
            .find(|s| s.seat_number == 2)
            .expect("Seat 2 should exist");
        assert_eq!(seat.status, "BOOKED");
        assert_eq!(seat.occupant_gender.as_deref(), Some("Female"));
    }

    #[tokio::test]
    async fn test_create_booking_rejects_empty_selection() {
        let app: Router = build_router(create_test_app_state());
        let trip_id: i64 = create_trip_via_router(&app).await;

        let request: CreateBookingApiRequest = CreateBookingApiRequest {
            trip_id,
            user_id: 1,
            seat_ids: vec![],
            passengers: vec![],
        };
        let response = post_json(app, "/bookings", &request).await;
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_booking_not_found_for_unknown_trip() {
        let app: Router = build_router(create_test_app_state());

        let request: CreateBookingApiRequest = CreateBookingApiRequest {
            trip_id: 999,
            user_id: 1,
            seat_ids: vec![1],
            passengers: vec![],
        };
        let response = post_json(app, "/bookings", &request).await;
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_booking_defaults_user_id() {
        let app: Router = build_router(create_test_app_state());
        let trip_id: i64 = create_trip_via_router(&app).await;
        let seat_ids: Vec<i64> = seat_ids_via_router(&app, trip_id, &[15]).await;

        let body: serde_json::Value = serde_json::json!({
            "trip_id": trip_id,
            "seat_ids": seat_ids,
        });
        let response = post_json(app, "/bookings", &body).await;
        assert_eq!(response.status(), HttpStatusCode::CREATED);

        let booking: ReserveSeatsResponse = body_json(response).await;
        assert_eq!(booking.user_id, 1);
    }
}
