use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{DocumentKind, DocumentStatus};

/// A legislative document with a protocol number unique per (kind, year).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub kind: DocumentKind,
    pub number: i64,
    pub year: i32,
    pub subject: String,
    pub body: Option<String>,
    /// Authoring councilor, when the document originates from the plenary.
    pub author_id: Option<String>,
    pub status: DocumentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
