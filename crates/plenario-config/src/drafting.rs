//! AI-assisted drafting configuration (OpenAI-compatible endpoint).

use serde::{Deserialize, Serialize};

/// Default chat-completions endpoint.
fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

/// Default model name.
fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DraftingConfig {
    /// Chat-completions endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key for the drafting provider.
    #[serde(default)]
    pub api_key: String,

    /// Model name sent with each request.
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for DraftingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
            model: default_model(),
        }
    }
}

impl DraftingConfig {
    /// Check if drafting has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.endpoint.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = DraftingConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.model, "gpt-4o-mini");
    }

    #[test]
    fn configured_when_api_key_set() {
        let config = DraftingConfig {
            api_key: "sk-test".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }
}
