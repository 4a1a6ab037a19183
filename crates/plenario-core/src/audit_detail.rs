//! Typed audit detail payloads.
//!
//! Each audit action can carry a structured `detail` JSON blob. These types
//! pin down the most common detail shapes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Detail for `AuditAction::StatusChanged`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusChangedDetail {
    pub from: String,
    pub to: String,
    pub reason: Option<String>,
}

/// Detail for `AuditAction::SeatAssigned` and `AuditAction::SeatCleared`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeatDetail {
    pub role: String,
    pub councilor_id: Option<String>,
}

/// Detail for document protocol allocation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProtocolDetail {
    pub kind: String,
    pub number: i64,
    pub year: i32,
}
