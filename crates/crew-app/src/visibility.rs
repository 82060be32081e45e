//! Role-driven project visibility.
//!
//! "Model B": contractors only see projects they hold an active membership
//! in, while admins and managers see every project in the org. The two query
//! paths share one contract so the fetch and error plumbing is written once.

use crew_core::entities::Project;
use crew_core::enums::Role;
use crew_db::error::StoreError;
use crew_db::service::CrewStore;

/// Which project-visibility path applies to a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityScope {
    /// Admins and managers: all org projects, no membership filtering.
    Privileged,
    /// Contractors: only projects with an active membership for the viewer.
    MembershipScoped,
}

impl VisibilityScope {
    #[must_use]
    pub const fn for_privilege(privileged: bool) -> Self {
        if privileged {
            Self::Privileged
        } else {
            Self::MembershipScoped
        }
    }

    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        Self::for_privilege(role.is_privileged())
    }

    /// Resolve the ordered set of projects visible to the viewer.
    ///
    /// The membership-scoped path applies a second filter after the join:
    /// membership rows are not cleaned up when a project is retired, so the
    /// join can return projects whose `is_active` is explicitly false, and a
    /// contractor must not act on those.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the underlying fetch fails.
    pub async fn resolve(
        self,
        store: &CrewStore,
        org_id: &str,
        profile_id: &str,
    ) -> Result<Vec<Project>, StoreError> {
        match self {
            Self::Privileged => store.org_projects(org_id).await,
            Self::MembershipScoped => {
                let joined = store.member_projects(org_id, profile_id).await?;
                Ok(joined
                    .into_iter()
                    .filter(Project::is_effectively_active)
                    .collect())
            }
        }
    }
}
