//! Minutes update builder. Drafts only; approved atas are immutable.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct MinutesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

pub struct MinutesUpdateBuilder(MinutesUpdate);

impl MinutesUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(MinutesUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.0.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn build(self) -> MinutesUpdate {
        self.0
    }
}
