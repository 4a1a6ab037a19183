//! Mock drafter for tests and offline development.

use tracing::info;

use crate::{Drafter, DraftKind, DraftRequest, DraftResponse, DraftingError};

/// Returns canned text without making API calls.
pub struct MockDrafter {
    fail: bool,
}

impl MockDrafter {
    #[must_use]
    pub const fn new() -> Self {
        Self { fail: false }
    }

    /// A mock that always fails, for exercising error paths.
    #[must_use]
    pub const fn failing() -> Self {
        Self { fail: true }
    }
}

impl Default for MockDrafter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Drafter for MockDrafter {
    async fn draft(&self, request: &DraftRequest) -> Result<DraftResponse, DraftingError> {
        info!(kind = ?request.kind, "[MOCK] drafting");

        if self.fail {
            return Err(DraftingError::Http("mock failure".to_string()));
        }

        let text = match request.kind {
            DraftKind::MinutesSummary => format!(
                "[MOCK] Ata redigida a partir de {} caracteres de anotações. \
                 Aos dias do corrente, reuniu-se a Câmara em sessão, tendo sido \
                 deliberadas as matérias constantes da pauta.",
                request.context.len()
            ),
            DraftKind::DocumentJustification => format!(
                "[MOCK] Justificativa redigida a partir da ementa fornecida \
                 ({} caracteres). A presente proposição atende ao interesse público.",
                request.context.len()
            ),
        };

        Ok(DraftResponse {
            text,
            model: "mock".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_draft_roundtrip() {
        let drafter = MockDrafter::new();
        let request = DraftRequest::new(DraftKind::MinutesSummary, "Anotações");

        let response = drafter.draft(&request).await.unwrap();
        assert!(response.text.contains("Ata"));
        assert_eq!(response.model, "mock");
    }

    #[tokio::test]
    async fn failing_mock_surfaces_error() {
        let drafter = MockDrafter::failing();
        let request = DraftRequest::new(DraftKind::DocumentJustification, "Ementa");

        assert!(matches!(
            drafter.draft(&request).await,
            Err(DraftingError::Http(_))
        ));
    }
}
