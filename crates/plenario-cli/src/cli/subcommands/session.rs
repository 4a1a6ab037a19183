use clap::Subcommand;

/// Legislative session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SessionCommands {
    /// Schedule a session. The title is generated from (number, kind, year).
    Schedule {
        #[arg(long)]
        number: u32,
        /// ordinaria, extraordinaria or solene.
        #[arg(long)]
        kind: String,
        #[arg(long)]
        year: i32,
        /// Scheduled date/time (RFC 3339 or YYYY-MM-DD).
        #[arg(long)]
        date: String,
    },
    /// Get a session by ID.
    Get { id: String },
    /// List sessions.
    List {
        /// Filter by status (agendada, em_andamento, realizada, ...).
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Reschedule a session to a new date.
    Reschedule {
        id: String,
        /// New date/time (RFC 3339 or YYYY-MM-DD).
        #[arg(long)]
        date: String,
    },
    /// Move a session through its lifecycle (open, suspend, resume, ...).
    Transition {
        id: String,
        /// Target status (em_andamento, realizada, adiada, ...).
        #[arg(long)]
        to: String,
        #[arg(long)]
        reason: Option<String>,
    },
    /// Delete a session.
    Delete { id: String },
    /// Full-text search over session titles.
    Search {
        query: String,
        #[arg(long)]
        limit: Option<u32>,
    },
}
