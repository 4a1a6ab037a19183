use clap::Subcommand;

/// Portal user account commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Invite a user. Generates the invite token; delivery is external.
    Invite {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
    },
    /// Get a user by ID.
    Get { id: String },
    /// Look up a user by email.
    Find {
        #[arg(long)]
        email: String,
    },
    /// List users.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Activate an invited account with its invite token.
    Activate {
        id: String,
        #[arg(long)]
        token: String,
    },
    /// Deactivate an account. Final; there is no reactivation.
    Deactivate { id: String },
}
