//! Document update builder.
//!
//! Protocol identity (kind, number, year) never changes after protocoling.
//! Status moves go through `transition_document`.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Option<String>>,
}

pub struct DocumentUpdateBuilder(DocumentUpdate);

impl DocumentUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(DocumentUpdate::default())
    }

    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.0.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn body(mut self, body: Option<String>) -> Self {
        self.0.body = Some(body);
        self
    }

    #[must_use]
    pub fn author_id(mut self, author_id: Option<String>) -> Self {
        self.0.author_id = Some(author_id);
        self
    }

    #[must_use]
    pub fn build(self) -> DocumentUpdate {
        self.0
    }
}
