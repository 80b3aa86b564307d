//! Restaurant handlers.

use crate::error::AppError;
use crate::extractors::JsonOrQuery;
use crate::models::{NewRestaurant, Reservation, Restaurant};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/restaurants",
    tag = "restaurants",
    responses((status = 200, description = "All restaurants", body = [Restaurant]))
)]
pub async fn list_restaurants(State(state): State<AppState>) -> Result<Json<Vec<Restaurant>>, AppError> {
    Ok(Json(state.store.list_restaurants().await?))
}

#[utoipa::path(
    post,
    path = "/restaurants",
    tag = "restaurants",
    request_body = NewRestaurant,
    responses(
        (status = 201, description = "Restaurant created", body = Restaurant),
        (status = 400, description = "Empty name or capacity not positive")
    )
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    JsonOrQuery(body): JsonOrQuery<NewRestaurant>,
) -> Result<(StatusCode, Json<Restaurant>), AppError> {
    let restaurant = state.store.create_restaurant(&body).await?;
    tracing::info!(id = %restaurant.id, capacity = restaurant.capacity, "restaurant created");
    Ok((StatusCode::CREATED, Json(restaurant)))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}/reservations",
    tag = "restaurants",
    params(("id" = Uuid, Path, description = "Restaurant id")),
    responses((status = 200, description = "Reservations at the restaurant", body = [Reservation]))
)]
pub async fn list_restaurant_reservations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Reservation>>, AppError> {
    Ok(Json(state.store.list_reservations_by_restaurant(id).await?))
}
