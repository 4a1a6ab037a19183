use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A public agent (servidor) of the chamber.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Agent {
    pub id: String,
    pub name: String,
    /// Canonical punctuated CPF (`000.000.000-00`). Validated on create.
    pub cpf: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Position held in the chamber administration (cargo).
    pub position: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
