//! Response types returned as JSON by `pln` commands that aggregate state.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response from `pln overview`: the chamber dashboard counts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChamberOverview {
    pub scheduled_sessions: i64,
    pub sessions_in_progress: i64,
    pub documents_in_tramitacao: i64,
    pub pending_opinions: i64,
    pub pending_agenda_items: i64,
    pub draft_minutes: i64,
    pub active_councilors: i64,
}
