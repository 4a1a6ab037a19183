//! Opinion update builder. Pending opinions only; recording concludes them.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct OpinionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rapporteur_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Option<String>>,
}

pub struct OpinionUpdateBuilder(OpinionUpdate);

impl OpinionUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(OpinionUpdate::default())
    }

    #[must_use]
    pub fn rapporteur_id(mut self, rapporteur_id: Option<String>) -> Self {
        self.0.rapporteur_id = Some(rapporteur_id);
        self
    }

    #[must_use]
    pub fn body(mut self, body: Option<String>) -> Self {
        self.0.body = Some(body);
        self
    }

    #[must_use]
    pub fn build(self) -> OpinionUpdate {
        self.0
    }
}
