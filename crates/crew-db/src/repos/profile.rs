//! Profile repository.
//!
//! Profiles are created and deactivated by the org's admin tooling; the core
//! logic only reads them. `create_profile` exists for that tooling (and for
//! seeding) — it is not part of the visibility flow.

use crew_core::entities::Profile;
use crew_core::enums::Role;
use crew_core::ids::PREFIX_PROFILE;

use crate::error::StoreError;
use crate::helpers::{get_opt_bool, get_opt_string, parse_datetime, parse_enum};
use crate::service::CrewStore;

fn row_to_profile(row: &libsql::Row) -> Result<Profile, StoreError> {
    Ok(Profile {
        id: row.get::<String>(0)?,
        org_id: row.get::<String>(1)?,
        full_name: get_opt_string(row, 2)?,
        role: parse_enum(&row.get::<String>(3)?)?,
        is_active: get_opt_bool(row, 4)?,
        manager_id: get_opt_string(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

const PROFILE_COLUMNS: &str = "id, org_id, full_name, role, is_active, manager_id, created_at";

impl CrewStore {
    /// Insert a new profile and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the insert fails or the returned row cannot
    /// be read.
    pub async fn create_profile(
        &self,
        org_id: &str,
        full_name: Option<&str>,
        role: Role,
        manager_id: Option<&str>,
    ) -> Result<Profile, StoreError> {
        let id = self.db().generate_id(PREFIX_PROFILE).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "INSERT INTO profiles (id, org_id, full_name, role, manager_id)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     RETURNING {PROFILE_COLUMNS}"
                ),
                libsql::params![id.as_str(), org_id, full_name, role.as_str(), manager_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        row_to_profile(&row)
    }

    /// Look up a single profile by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn profile(&self, id: &str) -> Result<Option<Profile>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    /// The active-profile directory for an org, ordered by role then name.
    ///
    /// A profile is active unless its flag is explicitly false.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or a row cannot be decoded.
    pub async fn active_directory(&self, org_id: &str) -> Result<Vec<Profile>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {PROFILE_COLUMNS} FROM profiles
                     WHERE org_id = ?1 AND (is_active IS NULL OR is_active <> 0)
                     ORDER BY role ASC, full_name ASC"
                ),
                [org_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_profile(&row)?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use crew_core::enums::Role;

    use crate::test_support::helpers::{null_out_activity, seed_profile, test_store};

    #[tokio::test]
    async fn create_and_get_profile() {
        let store = test_store().await;
        let created = seed_profile(&store, "org-1", "Avery Chen", Role::Admin).await;

        let fetched = store.profile(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.full_name.as_deref(), Some("Avery Chen"));
        assert_eq!(fetched.role, Role::Admin);
        // Store default: explicitly active
        assert_eq!(fetched.is_active, Some(true));
    }

    #[tokio::test]
    async fn missing_profile_is_none() {
        let store = test_store().await;
        assert!(store.profile("prf-missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn directory_is_org_scoped_and_ordered() {
        let store = test_store().await;
        seed_profile(&store, "org-1", "Zoe", Role::Contractor).await;
        seed_profile(&store, "org-1", "Avery", Role::Admin).await;
        seed_profile(&store, "org-1", "Morgan", Role::Manager).await;
        seed_profile(&store, "org-1", "Blake", Role::Contractor).await;
        seed_profile(&store, "org-2", "Outsider", Role::Admin).await;

        let directory = store.active_directory("org-1").await.unwrap();
        let names: Vec<_> = directory
            .iter()
            .map(|p| p.full_name.as_deref().unwrap())
            .collect();
        // role ascending (admin < contractor < manager as stored text),
        // then full_name ascending within a role
        assert_eq!(names, ["Avery", "Blake", "Zoe", "Morgan"]);
    }

    #[tokio::test]
    async fn directory_excludes_explicitly_inactive_only() {
        let store = test_store().await;
        let active = seed_profile(&store, "org-1", "Active", Role::Contractor).await;
        let gone = seed_profile(&store, "org-1", "Gone", Role::Contractor).await;
        let unset = seed_profile(&store, "org-1", "Unset", Role::Contractor).await;

        store
            .db()
            .conn()
            .execute(
                "UPDATE profiles SET is_active = 0 WHERE id = ?1",
                [gone.id.as_str()],
            )
            .await
            .unwrap();
        null_out_activity(&store, "profiles", &unset.id).await;

        let directory = store.active_directory("org-1").await.unwrap();
        let ids: Vec<_> = directory.iter().map(|p| p.id.as_str()).collect();
        assert!(ids.contains(&active.id.as_str()));
        // NULL counts as active
        assert!(ids.contains(&unset.id.as_str()));
        assert!(!ids.contains(&gone.id.as_str()));

        let unset_row = directory.iter().find(|p| p.id == unset.id).unwrap();
        assert_eq!(unset_row.is_active, None);
        assert!(unset_row.is_effectively_active());
    }
}
