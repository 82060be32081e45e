//! # crew-db
//!
//! libSQL store operations for crewdeck: profiles, projects, and project
//! memberships. The store is the source of truth; everything the client
//! crates hold in memory is a transient view rebuilt from here.
//!
//! Uses the `libsql` crate — works against a local file, `:memory:` (tests),
//! or a remote database over `libsql://`.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod test_support;

use error::StoreError;
use libsql::Builder;

/// Central database handle for all crewdeck store operations.
///
/// Wraps a libSQL database and connection. Provides ID generation; the
/// typed operations live on [`service::CrewStore`].
pub struct CrewDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl CrewDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations
    /// fail.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| StoreError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let crew_db = Self { db, conn };
        crew_db.run_migrations().await?;
        Ok(crew_db)
    }

    /// Open a remote database over `libsql://`.
    ///
    /// Runs migrations on open, same as the local path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, StoreError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;

        let crew_db = Self { db, conn };
        crew_db.run_migrations().await?;
        Ok(crew_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"prj-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the
    /// prefix.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, StoreError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
