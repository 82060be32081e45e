//! Service layer wrapping the raw database handle.
//!
//! `CrewStore` wraps `CrewDb`; all repo methods are implemented as
//! `impl CrewStore` blocks in `repos/*`.

use crate::CrewDb;
use crate::error::StoreError;

/// Typed store operations over a crewdeck database.
pub struct CrewStore {
    db: CrewDb,
}

impl CrewStore {
    /// Open a store over a local database (`":memory:"` for tests).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        Ok(Self {
            db: CrewDb::open_local(path).await?,
        })
    }

    /// Open a store over a remote `libsql://` database.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the connection cannot be established.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, StoreError> {
        Ok(Self {
            db: CrewDb::open_remote(url, auth_token).await?,
        })
    }

    /// Create from an existing `CrewDb` (for testing).
    #[must_use]
    pub const fn from_db(db: CrewDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &CrewDb {
        &self.db
    }
}
