use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Agent { action } => commands::agent::handle(&action, ctx, flags).await,
        Commands::Councilor { action } => commands::councilor::handle(&action, ctx, flags).await,
        Commands::Committee { action } => commands::committee::handle(&action, ctx, flags).await,
        Commands::Board { action } => commands::board::handle(&action, ctx, flags).await,
        Commands::Session { action } => commands::session::handle(&action, ctx, flags).await,
        Commands::Agenda { action } => commands::agenda::handle(&action, ctx, flags).await,
        Commands::Minutes { action } => commands::minutes::handle(&action, ctx, flags).await,
        Commands::Document { action } => commands::document::handle(&action, ctx, flags).await,
        Commands::Opinion { action } => commands::opinion::handle(&action, ctx, flags).await,
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
        Commands::Audit(args) => commands::audit::handle(&args, ctx, flags).await,
        Commands::Overview => commands::overview::handle(ctx, flags).await,
        Commands::Draft { action } => commands::draft::handle(&action, ctx, flags).await,
        Commands::Init(_) | Commands::Schema(_) => {
            unreachable!("init/schema are pre-dispatched in main")
        }
    }
}
