use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An elected council member (vereador).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Councilor {
    pub id: String,
    pub name: String,
    /// Ballot nickname, when different from the civil name.
    pub nickname: Option<String>,
    pub party: String,
    pub cpf: Option<String>,
    pub email: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
