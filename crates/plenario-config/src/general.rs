//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

/// Default number of Membro seats a new committee gets.
const fn default_membro_seats() -> u8 {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Chamber display name, e.g. "Câmara Municipal de Itaquara".
    #[serde(default)]
    pub chamber_name: String,

    /// Current legislature period label, e.g. "2025-2028".
    #[serde(default)]
    pub legislature: String,

    /// Default result limit for list/search commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Default Membro seat count for new committees.
    #[serde(default = "default_membro_seats")]
    pub default_membro_seats: u8,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            chamber_name: String::new(),
            legislature: String::new(),
            default_limit: default_limit(),
            default_membro_seats: default_membro_seats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.chamber_name.is_empty());
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.default_membro_seats, 3);
    }
}
