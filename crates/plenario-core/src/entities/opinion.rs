use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{OpinionStatus, OpinionVerdict};

/// A committee opinion (parecer) on a document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Opinion {
    pub id: String,
    pub committee_id: String,
    pub document_id: String,
    /// Rapporteur councilor, normally the committee's Relator.
    pub rapporteur_id: Option<String>,
    pub verdict: Option<OpinionVerdict>,
    pub body: Option<String>,
    pub status: OpinionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
