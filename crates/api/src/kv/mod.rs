//! Key-value operations for Redis, the blob entity store.
//!
//! ## Keys
//!
//! - `cart_{user_id}` - One JSON cart blob per user
//!
//! Redis is the primary store here, not a cache; cart state lives nowhere
//! else.

pub mod carts;

use redis::aio::ConnectionManager;
use secrecy::ExposeSecret;
use thiserror::Error;

pub use carts::{CartStore, cart_key};

/// Errors that can occur during key-value store operations.
#[derive(Debug, Error)]
pub enum KvError {
    /// Backend error from redis.
    #[error("key-value store error: {0}")]
    Backend(#[from] redis::RedisError),

    /// A stored blob failed to encode or decode.
    #[error("blob codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// Requested value was not found (or is not visible).
    #[error("not found")]
    NotFound,
}

/// Connect to Redis and return a multiplexed connection manager.
///
/// The manager is cheaply cloneable and reconnects on its own; one instance
/// serves the whole process.
///
/// # Arguments
///
/// * `redis_url` - Redis connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `redis::RedisError` if the connection cannot be established.
pub async fn connect(
    redis_url: &secrecy::SecretString,
) -> Result<ConnectionManager, redis::RedisError> {
    let client = redis::Client::open(redis_url.expose_secret())?;
    ConnectionManager::new(client).await
}
