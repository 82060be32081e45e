//! Store (libSQL) configuration.

use serde::{Deserialize, Serialize};

/// Default local database path, relative to the working directory.
fn default_path() -> String {
    ".crewdeck/crew.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Local database file path. Used unless a remote URL is configured.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://crew.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl StoreConfig {
    /// Whether a remote store is fully configured (URL and token).
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }
}
