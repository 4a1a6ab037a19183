//! OpenAI-compatible HTTP drafter.
//!
//! Works against the OpenAI API, Azure OpenAI, or a local Ollama instance;
//! anything that speaks the chat-completions shape.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use plenario_config::DraftingConfig;

use crate::{Drafter, DraftRequest, DraftResponse, DraftingError};

/// Completion requests are capped so a hung endpoint cannot stall the caller.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

/// Chat-completions client for drafting.
pub struct HttpDrafter {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl HttpDrafter {
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("reqwest client should build"),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build from the `[drafting]` config section.
    ///
    /// # Errors
    ///
    /// Returns `DraftingError::NotConfigured` when the API key is missing.
    pub fn from_config(config: &DraftingConfig) -> Result<Self, DraftingError> {
        if !config.is_configured() {
            return Err(DraftingError::NotConfigured);
        }
        Ok(Self::new(
            config.endpoint.clone(),
            config.api_key.clone(),
            config.model.clone(),
        ))
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: String,
}

#[async_trait::async_trait]
impl Drafter for HttpDrafter {
    async fn draft(&self, request: &DraftRequest) -> Result<DraftResponse, DraftingError> {
        info!(
            kind = ?request.kind,
            context_len = request.context.len(),
            model = %self.model,
            "sending drafting request"
        );

        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.kind.system_prompt().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.user_message(),
                },
            ],
            temperature: 0.3,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| DraftingError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            warn!(status, body = %text, "drafting API returned error");
            return Err(DraftingError::Api {
                status,
                body: text.chars().take(200).collect(),
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DraftingError::Http(format!("Failed to parse API response: {e}")))?;

        let text = chat_response
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(DraftingError::EmptyResponse)?;

        debug!(draft_len = text.len(), "drafting complete");

        Ok(DraftResponse {
            text,
            model: self.model.clone(),
        })
    }
}
