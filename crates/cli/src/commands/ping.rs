//! Connectivity diagnostics for the three backends.
//!
//! Loads the same configuration the API server uses, then round-trips one
//! trivial command against each store.

use mongodb::bson::doc;

use multibase_api::config::{ApiConfig, ConfigError};
use multibase_api::{db, documents, kv};

/// Errors that can occur while pinging the backends.
#[derive(Debug, thiserror::Error)]
pub enum PingError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Ping `PostgreSQL`, MongoDB and Redis in turn.
///
/// # Errors
///
/// Returns `PingError` naming the first backend that failed.
pub async fn run() -> Result<(), PingError> {
    let config = ApiConfig::from_env()?;

    tracing::info!("Pinging PostgreSQL...");
    let pool = db::create_pool(&config.database_url).await?;
    sqlx::query("SELECT 1").fetch_one(&pool).await?;
    tracing::info!("PostgreSQL ok");

    tracing::info!("Pinging MongoDB...");
    let mongo = documents::connect(&config.mongo_url, &config.mongo_db).await?;
    mongo.run_command(doc! { "ping": 1 }).await?;
    tracing::info!("MongoDB ok");

    tracing::info!("Pinging Redis...");
    let mut conn = kv::connect(&config.redis_url).await?;
    let _pong: String = redis::cmd("PING").query_async(&mut conn).await?;
    tracing::info!("Redis ok");

    Ok(())
}
