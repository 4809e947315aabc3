//! Application state shared across handlers.

use std::sync::Arc;

use mongodb::Database;
use redis::aio::ConnectionManager;
use sqlx::PgPool;

use crate::config::ApiConfig;

/// Application state shared across all handlers.
///
/// Holds the three store handles, opened once at startup. This struct is
/// cheaply cloneable via `Arc`; repositories borrow the handles per request
/// rather than reaching for globals.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    pool: PgPool,
    documents: Database,
    kv: ConnectionManager,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - API configuration
    /// * `pool` - `PostgreSQL` connection pool
    /// * `documents` - MongoDB database handle
    /// * `kv` - Redis connection manager
    #[must_use]
    pub fn new(
        config: ApiConfig,
        pool: PgPool,
        documents: Database,
        kv: ConnectionManager,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                documents,
                kv,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the `PostgreSQL` connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the MongoDB database handle.
    #[must_use]
    pub fn documents(&self) -> &Database {
        &self.inner.documents
    }

    /// Get a reference to the Redis connection manager.
    #[must_use]
    pub fn kv(&self) -> &ConnectionManager {
        &self.inner.kv
    }
}
