use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AgendaCommands, AgentCommands, BoardCommands, CommitteeCommands, CouncilorCommands,
    DocumentCommands, DraftCommands, MinutesCommands, OpinionCommands, SessionCommands,
    UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize a plenário project in the current directory.
    Init(InitArgs),
    /// Public agents (servidores).
    Agent {
        #[command(subcommand)]
        action: AgentCommands,
    },
    /// Council members (vereadores).
    Councilor {
        #[command(subcommand)]
        action: CouncilorCommands,
    },
    /// Standing committees and their role seats.
    Committee {
        #[command(subcommand)]
        action: CommitteeCommands,
    },
    /// Directing board (mesa diretora).
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },
    /// Legislative sessions.
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
    /// Session agendas (pautas).
    Agenda {
        #[command(subcommand)]
        action: AgendaCommands,
    },
    /// Session minutes (atas).
    Minutes {
        #[command(subcommand)]
        action: MinutesCommands,
    },
    /// Legislative documents with protocol numbers.
    Document {
        #[command(subcommand)]
        action: DocumentCommands,
    },
    /// Committee opinions (pareceres).
    Opinion {
        #[command(subcommand)]
        action: OpinionCommands,
    },
    /// Portal user accounts.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// View the audit trail.
    Audit(AuditArgs),
    /// Chamber dashboard counts.
    Overview,
    /// AI-assisted drafting of atas and justifications.
    Draft {
        #[command(subcommand)]
        action: DraftCommands,
    },
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Arguments for `pln init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Chamber name written into the generated config.
    #[arg(long)]
    pub chamber: Option<String>,
    /// Legislature period, e.g. "2025-2028".
    #[arg(long)]
    pub legislature: Option<String>,
}

/// Arguments for `pln audit`.
#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    /// Filter by entity type (session, document, committee, ...).
    #[arg(long)]
    pub entity_type: Option<String>,
    /// Filter by a specific entity ID.
    #[arg(long)]
    pub entity_id: Option<String>,
    /// Filter by action (created, status_changed, seat_assigned, ...).
    #[arg(long)]
    pub action: Option<String>,
    /// Filter by acting user.
    #[arg(long)]
    pub actor: Option<String>,
    /// Only entries at or after this timestamp (RFC 3339 or YYYY-MM-DD).
    #[arg(long)]
    pub since: Option<String>,
}

/// Arguments for `pln schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name, e.g. "session", "document", "overview".
    pub type_name: String,
}
