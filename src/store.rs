//! Data-access contract. Handlers only see `dyn Store`; `PgStore` is the PostgreSQL implementation.

mod postgres;

pub use postgres::PgStore;

use crate::error::StoreError;
use crate::models::{Customer, NewCustomer, NewReservation, NewRestaurant, Reservation, ReservationUpdate, Restaurant};
use async_trait::async_trait;
use uuid::Uuid;

/// One method per statement. Every call is a single round trip; nothing here spans a transaction.
#[async_trait]
pub trait Store: Send + Sync {
    /// Cheap round trip used by readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn create_customer(&self, new: &NewCustomer) -> Result<Customer, StoreError>;
    async fn create_restaurant(&self, new: &NewRestaurant) -> Result<Restaurant, StoreError>;
    /// Fails with `StoreError::Reference` when either referenced row is missing.
    async fn create_reservation(&self, new: &NewReservation) -> Result<Reservation, StoreError>;

    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError>;
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, StoreError>;
    async fn list_reservations(&self) -> Result<Vec<Reservation>, StoreError>;
    async fn list_reservations_by_restaurant(&self, restaurant_id: Uuid) -> Result<Vec<Reservation>, StoreError>;
    async fn list_reservations_by_customer(&self, customer_id: Uuid) -> Result<Vec<Reservation>, StoreError>;

    /// `None` when no reservation has this id.
    async fn update_reservation(&self, id: Uuid, changes: &ReservationUpdate) -> Result<Option<Reservation>, StoreError>;
    /// Returns whether a row was removed. Deleting an absent id is not an error; the HTTP
    /// layer answers 204 either way and only logs the flag.
    async fn delete_reservation(&self, id: Uuid) -> Result<bool, StoreError>;
}
