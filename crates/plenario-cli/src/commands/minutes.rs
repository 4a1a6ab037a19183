use plenario_db::updates::minutes::MinutesUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MinutesCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pln minutes`.
pub async fn handle(
    action: &MinutesCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MinutesCommands::Draft { session, body } => {
            let minutes = ctx.service.draft_minutes(session, body.as_deref()).await?;
            output(&minutes, flags.format)
        }
        MinutesCommands::Get { id } => {
            let minutes = ctx.service.get_minutes(id).await?;
            output(&minutes, flags.format)
        }
        MinutesCommands::ForSession { session } => {
            let minutes = ctx.service.get_minutes_for_session(session).await?;
            output(&minutes, flags.format)
        }
        MinutesCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let minutes = ctx.service.list_minutes(limit).await?;
            output(&minutes, flags.format)
        }
        MinutesCommands::Update { id, body } => {
            let update = MinutesUpdateBuilder::new().body(body.as_str()).build();
            let minutes = ctx.service.update_minutes(id, update).await?;
            output(&minutes, flags.format)
        }
        MinutesCommands::Approve { id } => {
            let minutes = ctx.service.approve_minutes(id).await?;
            output(&minutes, flags.format)
        }
        MinutesCommands::Delete { id } => {
            ctx.service.delete_minutes(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
