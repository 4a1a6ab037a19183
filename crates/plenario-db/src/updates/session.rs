//! Session update builder.
//!
//! The business key (number, kind, year) and the generated title are fixed at
//! scheduling time; only the date can be rescheduled here. Status moves go
//! through `transition_session`.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<DateTime<Utc>>,
}

pub struct SessionUpdateBuilder(SessionUpdate);

impl SessionUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(SessionUpdate::default())
    }

    #[must_use]
    pub const fn scheduled_for(mut self, scheduled_for: DateTime<Utc>) -> Self {
        self.0.scheduled_for = Some(scheduled_for);
        self
    }

    #[must_use]
    pub fn build(self) -> SessionUpdate {
        self.0
    }
}
