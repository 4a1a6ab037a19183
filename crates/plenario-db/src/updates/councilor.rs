//! Councilor update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CouncilorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

pub struct CouncilorUpdateBuilder(CouncilorUpdate);

impl CouncilorUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CouncilorUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn nickname(mut self, nickname: Option<String>) -> Self {
        self.0.nickname = Some(nickname);
        self
    }

    #[must_use]
    pub fn party(mut self, party: impl Into<String>) -> Self {
        self.0.party = Some(party.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: Option<String>) -> Self {
        self.0.email = Some(email);
        self
    }

    #[must_use]
    pub const fn active(mut self, active: bool) -> Self {
        self.0.active = Some(active);
        self
    }

    #[must_use]
    pub fn build(self) -> CouncilorUpdate {
        self.0
    }
}
