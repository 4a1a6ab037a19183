use clap::Subcommand;

/// Directing board commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BoardCommands {
    /// Create a board for a legislature period.
    Create {
        /// Legislature period, e.g. "2025-2026".
        #[arg(long)]
        legislature: String,
    },
    /// Get a board by ID.
    Get { id: String },
    /// List boards.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Delete a board.
    Delete { id: String },
    /// Show the board's six seats and occupants.
    Seats { id: String },
    /// Assign a councilor to a named seat (presidente, vice_presidente,
    /// primeiro_secretario, ...). Clears the councilor from any other seat.
    Assign {
        id: String,
        #[arg(long)]
        seat: String,
        #[arg(long)]
        councilor: String,
    },
    /// Clear a seat, keeping it in the seat list.
    Clear {
        id: String,
        #[arg(long)]
        seat: String,
    },
}
