use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MinutesStatus;

/// Session minutes (ata). One per session; drafts are editable until approved.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Minutes {
    pub id: String,
    pub session_id: String,
    pub title: String,
    pub body: String,
    pub status: MinutesStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
