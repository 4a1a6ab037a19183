mod agenda;
mod agent;
mod board;
mod committee;
mod councilor;
mod document;
mod draft;
mod minutes;
mod opinion;
mod session;
mod user;

pub use agenda::AgendaCommands;
pub use agent::AgentCommands;
pub use board::BoardCommands;
pub use committee::CommitteeCommands;
pub use councilor::CouncilorCommands;
pub use document::DocumentCommands;
pub use draft::DraftCommands;
pub use minutes::MinutesCommands;
pub use opinion::OpinionCommands;
pub use session::SessionCommands;
pub use user::UserCommands;
