//! Membership repository.
//!
//! Removal is always a soft-delete: the row keeps its history and only the
//! activity flag changes. Nothing here enforces uniqueness of an active
//! (project, profile) pair — the assignment picker's candidate filter is the
//! only duplicate guard.

use crew_core::entities::Membership;
use crew_core::ids::PREFIX_MEMBERSHIP;

use crate::error::StoreError;
use crate::helpers::{get_opt_bool, parse_datetime};
use crate::service::CrewStore;

fn row_to_membership(row: &libsql::Row) -> Result<Membership, StoreError> {
    Ok(Membership {
        id: row.get::<String>(0)?,
        org_id: row.get::<String>(1)?,
        project_id: row.get::<String>(2)?,
        profile_id: row.get::<String>(3)?,
        is_active: get_opt_bool(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

const MEMBER_COLUMNS: &str = "id, org_id, project_id, profile_id, is_active, created_at";

impl CrewStore {
    /// Active membership rows for a project, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or a row cannot be decoded.
    pub async fn active_members(&self, project_id: &str) -> Result<Vec<Membership>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {MEMBER_COLUMNS} FROM project_members
                     WHERE project_id = ?1 AND (is_active IS NULL OR is_active <> 0)
                     ORDER BY created_at ASC, id ASC"
                ),
                [project_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_membership(&row)?);
        }
        Ok(results)
    }

    /// Insert an active membership row and return it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the insert fails or the returned row cannot
    /// be read.
    pub async fn insert_member(
        &self,
        org_id: &str,
        project_id: &str,
        profile_id: &str,
    ) -> Result<Membership, StoreError> {
        let id = self.db().generate_id(PREFIX_MEMBERSHIP).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "INSERT INTO project_members (id, org_id, project_id, profile_id, is_active)
                     VALUES (?1, ?2, ?3, ?4, 1)
                     RETURNING {MEMBER_COLUMNS}"
                ),
                libsql::params![id.as_str(), org_id, project_id, profile_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        row_to_membership(&row)
    }

    /// Soft-delete a membership row by its own ID.
    ///
    /// The row survives with `is_active = false`; history is preserved and
    /// nothing references a vanished row. Patching a non-existent ID is not
    /// an error, matching the store's update semantics.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the update fails.
    pub async fn deactivate_member(&self, member_id: &str) -> Result<(), StoreError> {
        self.db()
            .conn()
            .execute(
                "UPDATE project_members SET is_active = 0 WHERE id = ?1",
                [member_id],
            )
            .await?;
        Ok(())
    }
}
