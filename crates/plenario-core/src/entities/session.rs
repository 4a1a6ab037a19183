use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{SessionKind, SessionStatus};

/// A legislative session. (number, kind, year) is unique; the title is
/// generated from it on scheduling (see `titles::session_title`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub number: u32,
    pub year: i32,
    pub kind: SessionKind,
    pub status: SessionStatus,
    pub scheduled_for: DateTime<Utc>,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
