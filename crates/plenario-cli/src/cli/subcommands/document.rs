use clap::Subcommand;

/// Legislative document commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DocumentCommands {
    /// Protocol a document: allocates the next number for (kind, year).
    Protocol {
        /// mocao, projeto_de_lei, oficio or requerimento.
        #[arg(long)]
        kind: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        body: Option<String>,
        /// Authoring councilor ID.
        #[arg(long)]
        author: Option<String>,
    },
    /// Get a document by ID.
    Get { id: String },
    /// Find a document by protocol (kind, number, year).
    Find {
        #[arg(long)]
        kind: String,
        #[arg(long)]
        number: i64,
        #[arg(long)]
        year: i32,
    },
    /// List documents.
    List {
        /// Filter by status (protocolado, em_tramitacao, aprovado, ...).
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Update a document's subject, body or author.
    Update {
        id: String,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        body: Option<String>,
        #[arg(long)]
        author: Option<String>,
    },
    /// Move a document through tramitação.
    Transition {
        id: String,
        /// Target status (em_tramitacao, aprovado, rejeitado, arquivado).
        #[arg(long)]
        to: String,
        #[arg(long)]
        reason: Option<String>,
    },
    /// Delete a document.
    Delete { id: String },
    /// Full-text search over subjects and bodies.
    Search {
        query: String,
        #[arg(long)]
        limit: Option<u32>,
    },
}
