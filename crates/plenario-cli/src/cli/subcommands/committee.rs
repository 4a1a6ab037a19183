use clap::Subcommand;

/// Committee commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CommitteeCommands {
    /// Create a committee.
    Create {
        #[arg(long)]
        name: String,
        /// permanente or temporaria.
        #[arg(long)]
        kind: String,
        #[arg(long)]
        description: Option<String>,
        /// Number of Membro seats (defaults to the configured value).
        #[arg(long)]
        membro_seats: Option<u8>,
    },
    /// Get a committee by ID.
    Get { id: String },
    /// List committees.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Update a committee.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        membro_seats: Option<u8>,
    },
    /// Delete a committee.
    Delete { id: String },
    /// Show the committee's seats and occupants.
    Seats { id: String },
    /// Assign a councilor to a seat (presidente, relator, membro_1, ...).
    ///
    /// The councilor is cleared from any other seat of the same committee.
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
