//! # plenario-drafting
//!
//! AI-assisted text drafting for the chamber: ata summaries and document
//! justifications, via an OpenAI-compatible chat-completions endpoint.
//!
//! Drafting is read-only with respect to chamber state. A failed draft is
//! surfaced as a [`DraftingError`] and never touches the database.

mod http;
mod mock;

pub use http::HttpDrafter;
pub use mock::MockDrafter;

use thiserror::Error;

/// Errors from drafting operations.
#[derive(Debug, Error)]
pub enum DraftingError {
    /// Drafting is not configured (no API key).
    #[error("Drafting is not configured: set drafting.api_key")]
    NotConfigured,

    /// The HTTP request itself failed.
    #[error("Drafting request failed: {0}")]
    Http(String),

    /// The provider returned a non-success status.
    #[error("Drafting API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The provider returned no usable text.
    #[error("Drafting API returned no content")]
    EmptyResponse,
}

/// What kind of text to draft. Selects the system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftKind {
    /// A formal ata summary from session notes.
    MinutesSummary,
    /// A justification section for a legislative document.
    DocumentJustification,
}

impl DraftKind {
    /// The system prompt sent with requests of this kind.
    #[must_use]
    pub const fn system_prompt(self) -> &'static str {
        match self {
            Self::MinutesSummary => {
                "Você é o secretário legislativo de uma câmara municipal. \
                 A partir das anotações fornecidas, redija o corpo de uma ata de sessão \
                 em português formal, em terceira pessoa e no pretérito, relatando a \
                 abertura, as deliberações na ordem em que ocorreram e o encerramento. \
                 Não invente fatos que não estejam nas anotações."
            }
            Self::DocumentJustification => {
                "Você é um assessor legislativo de uma câmara municipal. \
                 A partir da ementa e do contexto fornecidos, redija a justificativa \
                 de um documento legislativo em português formal, expondo o interesse \
                 público e a fundamentação da proposta em dois a quatro parágrafos."
            }
        }
    }
}

/// A drafting request: the kind picks the prompt, the context carries the
/// source material (session notes, document subject), and optional extra
/// instructions ride along in the user message.
#[derive(Debug, Clone)]
pub struct DraftRequest {
    pub kind: DraftKind,
    pub context: String,
    pub instructions: Option<String>,
}

impl DraftRequest {
    #[must_use]
    pub fn new(kind: DraftKind, context: impl Into<String>) -> Self {
        Self {
            kind,
            context: context.into(),
            instructions: None,
        }
    }

    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// The full user message: context plus any extra instructions.
    #[must_use]
    pub fn user_message(&self) -> String {
        match &self.instructions {
            Some(extra) => format!("{}\n\nInstruções adicionais: {extra}", self.context),
            None => self.context.clone(),
        }
    }
}

/// A drafted text and the model that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftResponse {
    pub text: String,
    pub model: String,
}

/// Text drafting provider. Implemented by [`HttpDrafter`] for real calls and
/// [`MockDrafter`] for tests.
#[async_trait::async_trait]
pub trait Drafter: Send + Sync {
    /// Draft text for the given request.
    ///
    /// # Errors
    ///
    /// Returns `DraftingError` if the provider is unreachable, rejects the
    /// request, or returns no content.
    async fn draft(&self, request: &DraftRequest) -> Result<DraftResponse, DraftingError>;
}
