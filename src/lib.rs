//! Reservation planner: REST backend for restaurants, customers and reservations on PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError, StoreError};
pub use migration::{ensure_database_exists, ensure_schema, initialize_schema};
pub use models::{Customer, NewCustomer, NewReservation, NewRestaurant, Reservation, ReservationUpdate, Restaurant};
pub use routes::{api_routes, app, common_routes};
pub use state::AppState;
pub use store::{PgStore, Store};
