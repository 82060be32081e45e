//! General application configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Fallback organization for commands invoked without `--org` or a
    /// signed-in viewer.
    #[serde(default)]
    pub default_org: String,
}
