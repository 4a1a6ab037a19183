use clap::Subcommand;

/// Minutes (ata) commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MinutesCommands {
    /// Open the draft ata for a session (one per session).
    Draft {
        /// Session ID.
        session: String,
        /// Initial body text.
        #[arg(long)]
        body: Option<String>,
    },
    /// Get an ata by ID.
    Get { id: String },
    /// Get the ata of a session.
    ForSession {
        /// Session ID.
        session: String,
    },
    /// List atas.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Update a draft ata's body.
    Update {
        id: String,
        #[arg(long)]
        body: String,
    },
    /// Approve an ata. Approved atas are immutable.
    Approve { id: String },
    /// Delete a draft ata.
    Delete { id: String },
}
