//! Connection pool handle.

use std::str::FromStr;
use std::time::Duration;

use ad_core::{Error, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::config::StoreConfig;
use crate::session::Session;

/// Process-wide datastore handle.
///
/// Created once at startup and closed once at shutdown. Cloning is cheap
/// and shares the underlying pool.
#[derive(Clone)]
pub struct AdStore {
    pool: SqlitePool,
    config: StoreConfig,
}

impl AdStore {
    /// Opens the connection pool.
    pub async fn connect(config: StoreConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| Error::database(format!("invalid database url: {}", e)))?
            .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs));

        // Each connection to `:memory:` is its own database, so keep exactly
        // one connection alive for the whole process.
        pool_options = if config.is_in_memory() {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            pool_options.max_connections(config.max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| Error::database(format!("failed to connect: {}", e)))?;

        info!(
            url = %config.url,
            max_connections = config.max_connections,
            "Opened datastore pool"
        );

        Ok(Self { pool, config })
    }

    /// Opens a new unit-of-work session. No connection is taken until the
    /// session is first used.
    pub fn session(&self) -> Session {
        Session::new(self.pool.clone())
    }

    /// Closes the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed datastore pool");
    }

    /// Returns the inner pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}
