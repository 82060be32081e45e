use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::active::effectively_active;

/// Join of a profile and a project. Removal is a soft-delete: the row
/// survives with `is_active = false`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Membership {
    pub id: String,
    pub org_id: String,
    pub project_id: String,
    pub profile_id: String,
    /// Nullable: only an explicit `false` counts as revoked.
    pub is_active: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl Membership {
    /// Active unless the flag is explicitly `false`.
    #[must_use]
    pub const fn is_effectively_active(&self) -> bool {
        effectively_active(self.is_active)
    }
}
