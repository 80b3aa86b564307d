//! Customer handlers: list, create, and the customer's reservations.

use crate::error::AppError;
use crate::extractors::JsonOrQuery;
use crate::models::{Customer, NewCustomer, Reservation};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    responses((status = 200, description = "All customers", body = [Customer]))
)]
pub async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, AppError> {
    Ok(Json(state.store.list_customers().await?))
}

#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    request_body = NewCustomer,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Missing or empty name")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    JsonOrQuery(body): JsonOrQuery<NewCustomer>,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    let customer = state.store.create_customer(&body).await?;
    tracing::info!(id = %customer.id, "customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

#[utoipa::path(
    get,
    path = "/customers/{id}/reservations",
    tag = "customers",
    params(("id" = Uuid, Path, description = "Customer id")),
    responses((status = 200, description = "Reservations held by the customer", body = [Reservation]))
)]
pub async fn list_customer_reservations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Reservation>>, AppError> {
    Ok(Json(state.store.list_reservations_by_customer(id).await?))
}
