//! Schema lifecycle: create the database, create missing tables, or drop and recreate everything.
//! Tables are created parents first (restaurants, customers, reservations) and dropped in reverse.

use crate::error::StoreError;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const DROP_TABLES: &[&str] = &[
    "DROP TABLE IF EXISTS reservations",
    "DROP TABLE IF EXISTS customers",
    "DROP TABLE IF EXISTS restaurants",
];

const CREATE_TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS restaurants (
        id UUID PRIMARY KEY,
        name VARCHAR(255) NOT NULL CHECK (name <> ''),
        capacity INTEGER NOT NULL CHECK (capacity > 0)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS customers (
        id UUID PRIMARY KEY,
        name VARCHAR(255) NOT NULL CHECK (name <> '')
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS reservations (
        id UUID PRIMARY KEY,
        "time" TIMESTAMP NOT NULL,
        date DATE NOT NULL DEFAULT CURRENT_DATE,
        party_count INTEGER NOT NULL CHECK (party_count > 0),
        restaurant_id UUID NOT NULL REFERENCES restaurants (id) ON DELETE RESTRICT,
        customer_id UUID NOT NULL REFERENCES customers (id) ON DELETE RESTRICT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS reservations_restaurant_id_idx ON reservations (restaurant_id)",
    "CREATE INDEX IF NOT EXISTS reservations_customer_id_idx ON reservations (customer_id)",
];

/// Drop all three tables and recreate them. Destroys every row. Runs in one transaction,
/// so a failure leaves the previous schema in place.
pub async fn initialize_schema(pool: &PgPool) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;
    for sql in DROP_TABLES.iter().chain(CREATE_TABLES) {
        sqlx::query(sql).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!("schema reset: tables dropped and recreated");
    Ok(())
}

/// Create any missing tables and indexes. Existing data is left alone.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;
    for sql in CREATE_TABLES {
        sqlx::query(sql).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let (admin, db_name) = admin_options(database_url)?;
    let Some(db_name) = db_name else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

/// Connect options for the `postgres` maintenance database, plus the target database name
/// when it is one that may need creating.
fn admin_options(database_url: &str) -> Result<(PgConnectOptions, Option<String>), StoreError> {
    let opts = PgConnectOptions::from_str(database_url)
        .map_err(|e| StoreError::Connection(format!("invalid DATABASE_URL: {}", e)))?;
    let db_name = opts
        .get_database()
        .map(str::to_string)
        .filter(|name| !name.is_empty() && name != "postgres");
    Ok((opts.database("postgres"), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_database_name_from_url() {
        let (admin, name) = admin_options("postgres://localhost:5432/the_acme_reservation_planner").unwrap();
        assert_eq!(name.as_deref(), Some("the_acme_reservation_planner"));
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "localhost");
        assert_eq!(admin.get_port(), 5432);
    }

    #[test]
    fn slashes_in_query_options_are_not_the_path() {
        let (admin, name) = admin_options("postgres://u@db/acme?application_name=/svc/api").unwrap();
        assert_eq!(name.as_deref(), Some("acme"));
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "db");

        let (_, name) = admin_options("postgres://u@db/acme?sslmode=prefer&sslrootcert=/etc/ssl/ca.pem").unwrap();
        assert_eq!(name.as_deref(), Some("acme"));
    }

    #[test]
    fn url_without_database_path_never_yields_host_as_name() {
        let (admin, name) = admin_options("postgres://localhost:5432").unwrap();
        assert_ne!(name.as_deref(), Some("localhost:5432"));
        assert_eq!(admin.get_host(), "localhost");
    }

    #[test]
    fn maintenance_database_is_never_created() {
        let (_, name) = admin_options("postgres://localhost/postgres").unwrap();
        assert!(name.is_none());
    }

    #[test]
    fn rejects_unparseable_url() {
        assert!(matches!(admin_options("not a url"), Err(StoreError::Connection(_))));
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("acme"), "\"acme\"");
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn drops_children_before_parents() {
        assert!(DROP_TABLES[0].ends_with("reservations"));
        let reservations = CREATE_TABLES.iter().position(|s| s.contains("TABLE IF NOT EXISTS reservations")).unwrap();
        let restaurants = CREATE_TABLES.iter().position(|s| s.contains("TABLE IF NOT EXISTS restaurants")).unwrap();
        assert!(restaurants < reservations);
    }
}
