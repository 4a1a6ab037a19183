use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::BoardRole;

/// A directing board (mesa diretora) for one legislature period.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Board {
    pub id: String,
    /// Period label, e.g. `"2025-2026"`.
    pub legislature: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A persisted board seat assignment (one of the six fixed seats).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BoardSeat {
    pub board_id: String,
    pub role: BoardRole,
    pub councilor_id: String,
    pub assigned_at: DateTime<Utc>,
}
