use clap::Subcommand;

/// Council member commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CouncilorCommands {
    /// Register a councilor.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        party: String,
        #[arg(long)]
        nickname: Option<String>,
        #[arg(long)]
        cpf: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Get a councilor by ID.
    Get { id: String },
    /// List councilors.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Update a councilor.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        party: Option<String>,
        #[arg(long)]
        nickname: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Set the active flag (true/false).
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a councilor.
    Delete { id: String },
}
