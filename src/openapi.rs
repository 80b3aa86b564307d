//! OpenAPI document for the resource routes.

use crate::handlers;
use crate::models::{Customer, NewCustomer, NewReservation, NewRestaurant, Reservation, ReservationUpdate, Restaurant};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Reservation Planner", description = "Restaurants, customers and their reservations"),
    paths(
        handlers::customer::list_customers,
        handlers::customer::create_customer,
        handlers::customer::list_customer_reservations,
        handlers::restaurant::list_restaurants,
        handlers::restaurant::create_restaurant,
        handlers::restaurant::list_restaurant_reservations,
        handlers::reservation::list_reservations,
        handlers::reservation::create_reservation,
        handlers::reservation::update_reservation,
        handlers::reservation::delete_reservation,
    ),
    components(schemas(Customer, NewCustomer, Restaurant, NewRestaurant, Reservation, NewReservation, ReservationUpdate))
)]
pub struct ApiDoc;
