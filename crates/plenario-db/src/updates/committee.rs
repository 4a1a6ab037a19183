//! Committee update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CommitteeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membro_seats: Option<u8>,
}

pub struct CommitteeUpdateBuilder(CommitteeUpdate);

impl CommitteeUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CommitteeUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub const fn membro_seats(mut self, membro_seats: u8) -> Self {
        self.0.membro_seats = Some(membro_seats);
        self
    }

    #[must_use]
    pub fn build(self) -> CommitteeUpdate {
        self.0
    }
}
