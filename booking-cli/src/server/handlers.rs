//! Request handlers for the booking API.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use booking::{
    Customer, CustomerId, Database, PartyCount, Reservation, ReservationId, ReservationView,
    Restaurant, RestaurantId,
};

use super::error::{ApiError, ApiResult};
use super::extract::{ApiJson, ApiPath};
use super::state::AppState;

/// Body of `POST /api/customers`.
#[derive(Debug, Deserialize)]
pub struct CreateCustomer {
    name: String,
}

/// Body of `POST /api/restaurants`.
#[derive(Debug, Deserialize)]
pub struct CreateRestaurant {
    #[serde(default)]
    name: Option<String>,
}

/// Body of `POST /api/customers/{customer_id}/reservations`.
#[derive(Debug, Deserialize)]
pub struct CreateReservation {
    restaurant_id: RestaurantId,
    party_count: i64,
    #[serde(default)]
    date: Option<DateTime<Utc>>,
}

/// GET /api/customers
pub async fn list_customers(State(state): State<AppState>) -> ApiResult<Json<Vec<Customer>>> {
    let customers = state.with_connection(Database::fetch_customers).await?;
    Ok(Json(customers))
}

/// POST /api/customers
pub async fn create_customer(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCustomer>,
) -> ApiResult<(StatusCode, Json<Customer>)> {
    log::info!("creating customer with name: {}", payload.name);
    let customer = state
        .with_connection(move |conn| Database::create_customer(conn, &payload.name))
        .await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /api/restaurants
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Restaurant>>> {
    let restaurants = state.with_connection(Database::fetch_restaurants).await?;
    Ok(Json(restaurants))
}

/// POST /api/restaurants
pub async fn create_restaurant(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateRestaurant>,
) -> ApiResult<(StatusCode, Json<Restaurant>)> {
    let restaurant = state
        .with_connection(move |conn| Database::create_restaurant(conn, payload.name.as_deref()))
        .await?;
    Ok((StatusCode::CREATED, Json(restaurant)))
}

/// GET /api/reservations
pub async fn list_reservations(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ReservationView>>> {
    let views = state.with_connection(Database::fetch_reservations).await?;
    Ok(Json(views))
}

/// POST /api/customers/{customer_id}/reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    ApiPath(customer_id): ApiPath<CustomerId>,
    ApiJson(payload): ApiJson<CreateReservation>,
) -> ApiResult<(StatusCode, Json<Reservation>)> {
    let party_count = PartyCount::try_from(payload.party_count)
        .map_err(|e| ApiError::bad_request(format!("invalid party_count: {e}")))?;
    let request = Reservation::builder(customer_id, payload.restaurant_id, party_count)
        .date(payload.date)
        .build();

    let reservation = state
        .with_connection(move |conn| Database::create_reservation(conn, &request))
        .await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// DELETE /api/customers/{customer_id}/reservations/{id}
pub async fn delete_reservation(
    State(state): State<AppState>,
    ApiPath((customer_id, id)): ApiPath<(CustomerId, ReservationId)>,
) -> ApiResult<StatusCode> {
    state
        .with_connection(move |conn| Database::destroy_reservation(conn, &id, &customer_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
