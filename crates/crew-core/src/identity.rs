use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Lightweight resolved viewer identity for cross-crate passing.
///
/// Produced by the host's identity provider, consumed by `crew-app` and
/// `crew-cli`. Contains only data fields — no auth logic. An identity with
/// a missing `org_id` or a missing `role` is "unresolved": visibility
/// resolution treats it as a no-op.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewerIdentity {
    /// Profile ID of the signed-in viewer.
    pub profile_id: String,
    /// Organization the viewer belongs to. `None` = not yet resolved.
    pub org_id: Option<String>,
    /// Display name, if the profile carries one.
    pub full_name: Option<String>,
    /// Role within the organization. `None` = not yet resolved.
    pub role: Option<Role>,
}

impl ViewerIdentity {
    /// Whether this viewer sees all org projects regardless of membership.
    ///
    /// An unresolved role is NOT privileged.
    #[must_use]
    pub fn is_privileged(&self) -> bool {
        self.role.is_some_and(Role::is_privileged)
    }
}
