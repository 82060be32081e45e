//! Role enum for crewdeck profiles.
//!
//! Uses `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! matching the TEXT values stored in the `profiles.role` column.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a profile within its organization.
///
/// Admins and managers are "privileged": they see every project in the org.
/// Contractors only see projects they hold an active membership in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Contractor,
}

impl Role {
    /// Whether this role sees all org projects regardless of membership.
    #[must_use]
    pub const fn is_privileged(self) -> bool {
        matches!(self, Self::Admin | Self::Manager)
    }

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Contractor => "contractor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
