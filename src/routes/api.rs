//! Resource routes for customers, restaurants and reservations.

use crate::handlers::{
    create_customer, create_reservation, create_restaurant, delete_reservation, list_customer_reservations,
    list_customers, list_reservations, list_restaurant_reservations, list_restaurants, update_reservation,
};
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route("/customers/:id/reservations", get(list_customer_reservations))
        .route("/restaurants", get(list_restaurants).post(create_restaurant))
        .route("/restaurants/:id/reservations", get(list_restaurant_reservations))
        .route("/reservations", get(list_reservations).post(create_reservation))
        .route("/reservations/:id", put(update_reservation).delete(delete_reservation))
        .with_state(state)
}
