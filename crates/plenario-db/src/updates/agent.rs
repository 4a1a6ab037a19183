//! Agent update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AgentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

pub struct AgentUpdateBuilder(AgentUpdate);

impl AgentUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(AgentUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: Option<String>) -> Self {
        self.0.email = Some(email);
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.0.phone = Some(phone);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Option<String>) -> Self {
        self.0.position = Some(position);
        self
    }

    #[must_use]
    pub const fn active(mut self, active: bool) -> Self {
        self.0.active = Some(active);
        self
    }

    #[must_use]
    pub fn build(self) -> AgentUpdate {
        self.0
    }
}
