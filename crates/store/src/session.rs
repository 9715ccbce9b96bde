//! Per-request unit of work.
//!
//! A [`Session`] lazily opens one transaction on first use and keeps it
//! until [`Session::commit`] or [`Session::close`]. Reads and writes made
//! through the same session therefore see a consistent view, and every
//! request commits at most once.

use ad_core::{Ad, Error, NewAd, Result, CONFLICT_MESSAGE, NOT_FOUND_MESSAGE};
use sqlx::sqlite::{Sqlite, SqlitePool};
use sqlx::{FromRow, Transaction};
use tracing::{debug, warn};

#[derive(Debug, FromRow)]
struct AdRow {
    id: i64,
    title: String,
    content: String,
    owner: String,
}

impl From<AdRow> for Ad {
    fn from(row: AdRow) -> Self {
        Ad {
            id: row.id,
            title: row.title,
            content: row.content,
            owner: row.owner,
        }
    }
}

/// Datastore session scoped to a single request.
pub struct Session {
    pool: SqlitePool,
    tx: Option<Transaction<'static, Sqlite>>,
    committed: bool,
}

impl Session {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            tx: None,
            committed: false,
        }
    }

    /// Returns the open transaction, beginning one if needed.
    async fn tx(&mut self) -> Result<&mut Transaction<'static, Sqlite>> {
        if self.committed {
            return Err(Error::internal("session already committed"));
        }
        if self.tx.is_none() {
            let tx = self.pool.begin().await.map_err(map_sqlx_error)?;
            debug!("Session transaction started");
            self.tx = Some(tx);
        }
        self.tx
            .as_mut()
            .ok_or_else(|| Error::internal("session transaction missing"))
    }

    /// Fetch an ad by id.
    pub async fn get(&mut self, id: i64) -> Result<Option<Ad>> {
        let tx = self.tx().await?;
        let row = sqlx::query_as::<_, AdRow>(
            "SELECT id, title, content, owner FROM ads WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Ad::from))
    }

    /// Fetch every ad in the table's scan order.
    pub async fn list(&mut self) -> Result<Vec<Ad>> {
        let tx = self.tx().await?;
        let rows = sqlx::query_as::<_, AdRow>("SELECT id, title, content, owner FROM ads")
            .fetch_all(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Ad::from).collect())
    }

    /// Insert a new ad and return it with its assigned id.
    ///
    /// Not durable until [`Session::commit`].
    pub async fn add(&mut self, ad: NewAd) -> Result<Ad> {
        let tx = self.tx().await?;
        let row = sqlx::query_as::<_, AdRow>(
            "INSERT INTO ads (id, title, content, owner) VALUES (?, ?, ?, ?) \
             RETURNING id, title, content, owner",
        )
        .bind(ad.id)
        .bind(ad.title)
        .bind(ad.content)
        .bind(ad.owner)
        .fetch_one(&mut **tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    /// Overwrite the mutable fields of an existing ad.
    pub async fn update(&mut self, ad: &Ad) -> Result<()> {
        let tx = self.tx().await?;
        let result = sqlx::query("UPDATE ads SET title = ?, content = ?, owner = ? WHERE id = ?")
            .bind(&ad.title)
            .bind(&ad.content)
            .bind(&ad.owner)
            .bind(ad.id)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found(NOT_FOUND_MESSAGE));
        }
        Ok(())
    }

    /// Delete an ad by id.
    pub async fn delete(&mut self, id: i64) -> Result<()> {
        let tx = self.tx().await?;
        let result = sqlx::query("DELETE FROM ads WHERE id = ?")
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found(NOT_FOUND_MESSAGE));
        }
        Ok(())
    }

    /// Commit pending writes. A session commits at most once.
    pub async fn commit(&mut self) -> Result<()> {
        if self.committed {
            return Err(Error::internal("session already committed"));
        }
        self.committed = true;

        if let Some(tx) = self.tx.take() {
            tx.commit().await.map_err(map_sqlx_error)?;
            debug!("Session committed");
        }
        Ok(())
    }

    /// Release the session, rolling back anything left uncommitted.
    pub async fn close(&mut self) {
        if let Some(tx) = self.tx.take() {
            match tx.rollback().await {
                Ok(()) => debug!("Session closed, uncommitted work rolled back"),
                Err(e) => warn!(error = %e, "Session rollback failed"),
            }
        }
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Whether the session currently holds a connection.
    pub fn is_active(&self) -> bool {
        self.tx.is_some()
    }
}

/// Map driver errors onto the service error taxonomy.
fn map_sqlx_error(err: sqlx::Error) -> Error {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            Error::conflict(CONFLICT_MESSAGE)
        }
        _ => Error::database(err.to_string()),
    }
}
