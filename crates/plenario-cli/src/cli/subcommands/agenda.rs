use clap::Subcommand;

/// Agenda (pauta) commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AgendaCommands {
    /// Append an item to a session's agenda.
    Add {
        /// Session ID.
        session: String,
        #[arg(long)]
        description: String,
        /// Linked document ID, when the item reads a protocoled document.
        #[arg(long)]
        document: Option<String>,
    },
    /// Get an agenda item by ID.
    Get { id: String },
    /// List a session's agenda in reading order.
    List {
        /// Session ID.
        session: String,
    },
    /// Update an item's description or linked document.
    Update {
        id: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        document: Option<String>,
    },
    /// Move an item to a new position, renumbering the rest.
    Move {
        id: String,
        #[arg(long)]
        position: u32,
    },
    /// Mark an item as concluded.
    Complete { id: String },
    /// Remove an item from the agenda.
    Remove { id: String },
}
