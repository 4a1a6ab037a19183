//! Agenda item update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AgendaItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<Option<String>>,
}

pub struct AgendaItemUpdateBuilder(AgendaItemUpdate);

impl AgendaItemUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(AgendaItemUpdate::default())
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn document_id(mut self, document_id: Option<String>) -> Self {
        self.0.document_id = Some(document_id);
        self
    }

    #[must_use]
    pub fn build(self) -> AgendaItemUpdate {
        self.0
    }
}
