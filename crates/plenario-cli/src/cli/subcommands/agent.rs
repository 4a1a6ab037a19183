use clap::Subcommand;

/// Public agent commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AgentCommands {
    /// Register a public agent.
    Create {
        #[arg(long)]
        name: String,
        /// CPF, punctuated or bare; validated and stored canonically.
        #[arg(long)]
        cpf: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        position: Option<String>,
    },
    /// Get an agent by ID.
    Get { id: String },
    /// List agents.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Update an agent.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        position: Option<String>,
        /// Set the active flag (true/false).
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete an agent.
    Delete { id: String },
}
