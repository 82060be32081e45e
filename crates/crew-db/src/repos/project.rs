//! Project repository.
//!
//! Two read paths: the privileged org-wide list, and the membership join
//! used for contractors. The join filters membership activity store-side;
//! dropping admin-retired projects is the caller's second filter.

use crew_core::entities::Project;
use crew_core::ids::PREFIX_PROJECT;

use crate::error::StoreError;
use crate::helpers::{get_opt_bool, get_opt_string, parse_datetime};
use crate::service::CrewStore;

pub(crate) fn row_to_project(row: &libsql::Row) -> Result<Project, StoreError> {
    Ok(Project {
        id: row.get::<String>(0)?,
        org_id: row.get::<String>(1)?,
        name: row.get::<String>(2)?,
        parent_id: get_opt_string(row, 3)?,
        is_active: get_opt_bool(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

const PROJECT_COLUMNS: &str = "id, org_id, name, parent_id, is_active, created_at";

impl CrewStore {
    /// Insert a new project and return the stored row.
    ///
    /// The caller validates the name; the store fills `is_active` (default
    /// active) and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the insert fails or the returned row cannot
    /// be read.
    pub async fn create_project(&self, org_id: &str, name: &str) -> Result<Project, StoreError> {
        let id = self.db().generate_id(PREFIX_PROJECT).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "INSERT INTO projects (id, org_id, name)
                     VALUES (?1, ?2, ?3)
                     RETURNING {PROJECT_COLUMNS}"
                ),
                libsql::params![id.as_str(), org_id, name],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        row_to_project(&row)
    }

    /// All projects for an org, ordered by name ascending.
    ///
    /// No activity or membership filtering — this is the privileged view.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or a row cannot be decoded.
    pub async fn org_projects(&self, org_id: &str) -> Result<Vec<Project>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {PROJECT_COLUMNS} FROM projects
                     WHERE org_id = ?1
                     ORDER BY name ASC"
                ),
                [org_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_project(&row)?);
        }
        Ok(results)
    }

    /// Projects the given profile holds an active membership in, ordered by
    /// name ascending.
    ///
    /// Membership activity is filtered here; the returned projects may still
    /// include admin-retired ones (membership rows are not cleaned up when a
    /// project is retired), which the caller drops.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or a row cannot be decoded.
    pub async fn member_projects(
        &self,
        org_id: &str,
        profile_id: &str,
    ) -> Result<Vec<Project>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT p.id, p.org_id, p.name, p.parent_id, p.is_active, p.created_at
                 FROM project_members m
                 JOIN projects p ON p.id = m.project_id
                 WHERE m.org_id = ?1 AND m.profile_id = ?2
                   AND (m.is_active IS NULL OR m.is_active <> 0)
                 ORDER BY p.name ASC",
                libsql::params![org_id, profile_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_project(&row)?);
        }
        Ok(results)
    }
}
