//! Hosted database (Turso/libSQL) configuration.

use serde::{Deserialize, Serialize};

/// Default sync interval in seconds.
const fn default_sync_interval_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Remote database URL (e.g., `libsql://camara.turso.io`). Empty means
    /// local-only mode.
    #[serde(default)]
    pub url: String,

    /// Database auth token for the remote replica.
    #[serde(default)]
    pub auth_token: String,

    /// Local replica path for embedded replica mode. Defaults to
    /// `.plenario/plenario-synced.db` when empty.
    #[serde(default)]
    pub local_replica_path: String,

    /// Sync interval for embedded replicas, in seconds.
    #[serde(default = "default_sync_interval_secs")]
    pub sync_interval_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            auth_token: String::new(),
            local_replica_path: String::new(),
            sync_interval_secs: default_sync_interval_secs(),
        }
    }
}

impl DatabaseConfig {
    /// Check if the remote database has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_local_only() {
        let config = DatabaseConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.sync_interval_secs, 60);
    }

    #[test]
    fn configured_when_url_and_token_set() {
        let config = DatabaseConfig {
            url: "libsql://camara.turso.io".into(),
            auth_token: "token123".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }
}
