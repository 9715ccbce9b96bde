//! Datastore health checks.

use crate::client::AdStore;
use crate::schema::all_tables;
use ad_core::{Error, Result};
use tracing::{debug, error};

/// Check datastore connection health.
pub async fn check_connection(store: &AdStore) -> bool {
    match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(store.pool())
        .await
    {
        Ok(_) => {
            debug!("Datastore connection healthy");
            true
        }
        Err(e) => {
            error!("Datastore health check failed: {}", e);
            false
        }
    }
}

/// Initialize database schema.
pub async fn init_schema(store: &AdStore) -> Result<()> {
    for ddl in all_tables() {
        sqlx::query(ddl)
            .execute(store.pool())
            .await
            .map_err(|e| Error::database(format!("Failed to execute DDL: {}", e)))?;
    }

    debug!("Datastore schema initialized");
    Ok(())
}
