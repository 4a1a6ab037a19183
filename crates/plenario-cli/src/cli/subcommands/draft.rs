use clap::Subcommand;

/// AI-assisted drafting commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DraftCommands {
    /// Draft an ata body from session notes.
    Minutes {
        /// Session ID. The agenda is included as drafting context.
        session: String,
        /// Free-form notes taken during the session.
        #[arg(long)]
        notes: Option<String>,
        /// Extra instructions appended to the request.
        #[arg(long)]
        instructions: Option<String>,
        /// Write the drafted text into the session's ata (creating the
        /// draft if none exists).
        #[arg(long)]
        save: bool,
    },
    /// Draft a justification for a legislative document.
    Justification {
        /// Document ID. Its subject and body are the drafting context.
        document: String,
        #[arg(long)]
        instructions: Option<String>,
        /// Append the drafted justification to the document body.
        #[arg(long)]
        save: bool,
    },
}
