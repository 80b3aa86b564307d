//! Rows of the three tables and the payloads that create or change them.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Reservation {
    pub id: Uuid,
    pub time: NaiveDateTime,
    pub date: NaiveDate,
    pub party_count: i32,
    pub restaurant_id: Uuid,
    pub customer_id: Uuid,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewCustomer {
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewRestaurant {
    pub name: String,
    pub capacity: i32,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewReservation {
    pub time: NaiveDateTime,
    /// Defaults to the store's current date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(alias = "people")]
    pub party_count: i32,
    pub restaurant_id: Uuid,
    pub customer_id: Uuid,
}

/// Replacement values for an existing reservation. The date is kept.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ReservationUpdate {
    pub time: NaiveDateTime,
    #[serde(alias = "people")]
    pub party_count: i32,
    pub restaurant_id: Uuid,
    pub customer_id: Uuid,
}
