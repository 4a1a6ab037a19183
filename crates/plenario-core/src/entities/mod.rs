//! Entity structs for all Plenário domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and the
//! `pln schema` dump.

mod agenda;
mod agent;
mod audit;
mod board;
mod committee;
mod councilor;
mod document;
mod minutes;
mod opinion;
mod session;
mod user;

pub use agenda::AgendaItem;
pub use agent::Agent;
pub use audit::AuditEntry;
pub use board::{Board, BoardSeat};
pub use committee::{Committee, CommitteeSeat};
pub use councilor::Councilor;
pub use document::Document;
pub use minutes::Minutes;
pub use opinion::Opinion;
pub use session::Session;
pub use user::User;
