use clap::Subcommand;

/// Committee opinion (parecer) commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OpinionCommands {
    /// Request an opinion from a committee on a document.
    Request {
        #[arg(long)]
        committee: String,
        #[arg(long)]
        document: String,
        /// Rapporteur councilor ID.
        #[arg(long)]
        rapporteur: Option<String>,
    },
    /// Get an opinion by ID.
    Get { id: String },
    /// List opinions.
    List {
        /// Filter by document ID.
        #[arg(long)]
        document: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Update a pending opinion's rapporteur or body.
    Update {
        id: String,
        #[arg(long)]
        rapporteur: Option<String>,
        #[arg(long)]
        body: Option<String>,
    },
    /// Record the committee's verdict, concluding the opinion.
    Record {
        id: String,
        /// favoravel or contrario.
        #[arg(long)]
        verdict: String,
        #[arg(long)]
        body: String,
    },
    /// Withdraw a pending opinion request.
    Withdraw { id: String },
}
