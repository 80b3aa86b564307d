//! Server binary: read settings, prepare the database, serve the API.

use reservation_planner::{app, ensure_database_exists, ensure_schema, initialize_schema, AppState, PgStore, Settings};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("reservation_planner=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    ensure_database_exists(&settings.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&settings.database_url)
        .await?;

    if settings.reset_schema {
        tracing::warn!("RESET_SCHEMA set: dropping all tables");
        initialize_schema(&pool).await?;
    } else {
        ensure_schema(&pool).await?;
    }

    let state = AppState::new(PgStore::new(pool));
    let listener = TcpListener::bind(settings.listen_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
