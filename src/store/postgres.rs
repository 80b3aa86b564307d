//! `Store` over a PostgreSQL pool. Each method checks out a connection for one statement.

use super::Store;
use crate::error::StoreError;
use crate::models::{Customer, NewCustomer, NewReservation, NewRestaurant, Reservation, ReservationUpdate, Restaurant};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

const RESERVATION_COLUMNS: &str = r#"id, "time", date, party_count, restaurant_id, customer_id"#;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn reservations_where(&self, column: &str, value: Uuid) -> Result<Vec<Reservation>, StoreError> {
        let sql = format!("SELECT {} FROM reservations WHERE {} = $1", RESERVATION_COLUMNS, column);
        tracing::debug!(sql = %sql, %value, "query");
        let rows = sqlx::query_as::<_, Reservation>(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn create_customer(&self, new: &NewCustomer) -> Result<Customer, StoreError> {
        let sql = "INSERT INTO customers (id, name) VALUES ($1, $2) RETURNING id, name";
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Customer>(sql)
            .bind(Uuid::new_v4())
            .bind(&new.name)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create_restaurant(&self, new: &NewRestaurant) -> Result<Restaurant, StoreError> {
        let sql = "INSERT INTO restaurants (id, name, capacity) VALUES ($1, $2, $3) RETURNING id, name, capacity";
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Restaurant>(sql)
            .bind(Uuid::new_v4())
            .bind(&new.name)
            .bind(new.capacity)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create_reservation(&self, new: &NewReservation) -> Result<Reservation, StoreError> {
        let sql = format!(
            r#"INSERT INTO reservations (id, "time", date, party_count, restaurant_id, customer_id)
               VALUES ($1, $2, COALESCE($3, CURRENT_DATE), $4, $5, $6)
               RETURNING {}"#,
            RESERVATION_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Reservation>(&sql)
            .bind(Uuid::new_v4())
            .bind(new.time)
            .bind(new.date)
            .bind(new.party_count)
            .bind(new.restaurant_id)
            .bind(new.customer_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        let sql = "SELECT id, name FROM customers";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Customer>(sql).fetch_all(&self.pool).await?)
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, StoreError> {
        let sql = "SELECT id, name, capacity FROM restaurants";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Restaurant>(sql).fetch_all(&self.pool).await?)
    }

    async fn list_reservations(&self) -> Result<Vec<Reservation>, StoreError> {
        let sql = format!("SELECT {} FROM reservations", RESERVATION_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Reservation>(&sql).fetch_all(&self.pool).await?)
    }

    async fn list_reservations_by_restaurant(&self, restaurant_id: Uuid) -> Result<Vec<Reservation>, StoreError> {
        self.reservations_where("restaurant_id", restaurant_id).await
    }

    async fn list_reservations_by_customer(&self, customer_id: Uuid) -> Result<Vec<Reservation>, StoreError> {
        self.reservations_where("customer_id", customer_id).await
    }

    async fn update_reservation(&self, id: Uuid, changes: &ReservationUpdate) -> Result<Option<Reservation>, StoreError> {
        let sql = format!(
            r#"UPDATE reservations
               SET "time" = $2, party_count = $3, restaurant_id = $4, customer_id = $5
               WHERE id = $1
               RETURNING {}"#,
            RESERVATION_COLUMNS
        );
        tracing::debug!(sql = %sql, %id, "query");
        let row = sqlx::query_as::<_, Reservation>(&sql)
            .bind(id)
            .bind(changes.time)
            .bind(changes.party_count)
            .bind(changes.restaurant_id)
            .bind(changes.customer_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_reservation(&self, id: Uuid) -> Result<bool, StoreError> {
        let sql = "DELETE FROM reservations WHERE id = $1";
        tracing::debug!(sql = %sql, %id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
