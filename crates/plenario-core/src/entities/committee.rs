use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CommitteeKind;

/// A standing or temporary committee (comissão) with fixed role seats.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Committee {
    pub id: String,
    pub name: String,
    pub kind: CommitteeKind,
    pub description: Option<String>,
    /// Number of indexed Membro seats besides Presidente and Relator.
    pub membro_seats: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A persisted committee seat assignment. Only filled seats are stored;
/// empty seats exist implicitly in the fixed seat list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CommitteeSeat {
    pub committee_id: String,
    /// Persisted seat key (`presidente`, `relator`, `membro_N`).
    pub role: String,
    pub councilor_id: String,
    pub assigned_at: DateTime<Utc>,
}
