//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. All statements use `IF NOT EXISTS` for idempotent
//! re-running.

use crate::CrewDb;
use crate::error::StoreError;

/// Initial schema: 3 tables, 4 indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_schema.sql");

impl CrewDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| StoreError::Migration(format!("001_schema: {e}")))?;
        Ok(())
    }
}
