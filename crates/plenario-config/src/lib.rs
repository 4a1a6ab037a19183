//! # plenario-config
//!
//! Layered configuration loading for Plenário using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PLENARIO_*` prefix, `__` as separator)
//! 2. Project-level `.plenario/config.toml`
//! 3. User-level `~/.config/plenario/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PLENARIO_DATABASE__URL` -> `database.url`,
//! `PLENARIO_DRAFTING__API_KEY` -> `drafting.api_key`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use plenario_config::PlenarioConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = PlenarioConfig::load_with_dotenv().expect("config");
//!
//! if config.database.is_configured() {
//!     println!("Remote database: {}", config.database.url);
//! }
//! ```

mod database;
mod drafting;
mod error;
mod general;

pub use database::DatabaseConfig;
pub use drafting::DraftingConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlenarioConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub drafting: DraftingConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PlenarioConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if figment extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI and
    /// tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if figment extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".plenario/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("PLENARIO_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("plenario").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}
