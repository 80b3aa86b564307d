//! Reservation handlers: list, create, replace, delete.

use crate::error::AppError;
use crate::extractors::JsonOrQuery;
use crate::models::{NewReservation, Reservation, ReservationUpdate};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/reservations",
    tag = "reservations",
    responses((status = 200, description = "All reservations", body = [Reservation]))
)]
pub async fn list_reservations(State(state): State<AppState>) -> Result<Json<Vec<Reservation>>, AppError> {
    Ok(Json(state.store.list_reservations().await?))
}

#[utoipa::path(
    post,
    path = "/reservations",
    tag = "reservations",
    request_body = NewReservation,
    responses(
        (status = 201, description = "Reservation created", body = Reservation),
        (status = 400, description = "Unknown restaurant or customer, or party count not positive")
    )
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    JsonOrQuery(body): JsonOrQuery<NewReservation>,
) -> Result<(StatusCode, Json<Reservation>), AppError> {
    let reservation = state.store.create_reservation(&body).await?;
    tracing::info!(
        id = %reservation.id,
        restaurant_id = %reservation.restaurant_id,
        customer_id = %reservation.customer_id,
        "reservation created"
    );
    Ok((StatusCode::CREATED, Json(reservation)))
}

#[utoipa::path(
    put,
    path = "/reservations/{id}",
    tag = "reservations",
    request_body = ReservationUpdate,
    params(("id" = Uuid, Path, description = "Reservation id")),
    responses(
        (status = 200, description = "Reservation updated", body = Reservation),
        (status = 404, description = "No reservation with this id")
    )
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonOrQuery(body): JsonOrQuery<ReservationUpdate>,
) -> Result<Json<Reservation>, AppError> {
    let reservation = state
        .store
        .update_reservation(id, &body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("reservation {}", id)))?;
    Ok(Json(reservation))
}

#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    tag = "reservations",
    params(("id" = Uuid, Path, description = "Reservation id")),
    responses((status = 204, description = "Reservation removed, or it did not exist"))
)]
pub async fn delete_reservation(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, AppError> {
    // Idempotent: a missing row is also 204.
    let removed = state.store.delete_reservation(id).await?;
    tracing::debug!(%id, removed, "reservation delete");
    Ok(StatusCode::NO_CONTENT)
}
