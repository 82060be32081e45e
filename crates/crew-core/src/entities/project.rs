use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::active::effectively_active;

/// A project scoped to an organization. Never hard-deleted; retiring a
/// project sets `is_active = false` externally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub org_id: String,
    /// Non-empty, trimmed at creation.
    pub name: String,
    /// Nullable hierarchy hook, carried through but unused.
    pub parent_id: Option<String>,
    /// Nullable: only an explicit `false` counts as retired.
    pub is_active: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Active unless the flag is explicitly `false`.
    #[must_use]
    pub const fn is_effectively_active(&self) -> bool {
        effectively_active(self.is_active)
    }
}
