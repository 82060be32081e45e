use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::active::effectively_active;
use crate::enums::Role;

/// A person within an organization. Created and deactivated externally;
/// crewdeck only reads active profiles within the viewer's org.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub org_id: String,
    pub full_name: Option<String>,
    pub role: Role,
    /// Nullable: only an explicit `false` counts as deactivated.
    pub is_active: Option<bool>,
    /// Back-reference to this person's manager. Not used by the core logic.
    pub manager_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Active unless the flag is explicitly `false`.
    #[must_use]
    pub const fn is_effectively_active(&self) -> bool {
        effectively_active(self.is_active)
    }

    /// Display name, falling back to the profile ID.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.id)
    }
}
