use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AgendaItemStatus;

/// One item on a session agenda (pauta), ordered by `position` (1-based).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AgendaItem {
    pub id: String,
    pub session_id: String,
    /// Document under deliberation, when the item refers to one.
    pub document_id: Option<String>,
    pub position: u32,
    pub description: String,
    pub status: AgendaItemStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
