use plenario_core::enums::{SessionKind, SessionStatus};
use plenario_db::updates::session::SessionUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SessionCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_datetime, parse_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `pln session`.
pub async fn handle(
    action: &SessionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SessionCommands::Schedule {
            number,
            kind,
            year,
            date,
        } => {
            let kind = parse_enum::<SessionKind>(kind, "kind")?;
            let scheduled_for = parse_datetime(date, "date")?;
            let session = ctx
                .service
                .schedule_session(*number, kind, *year, scheduled_for)
                .await?;
            output(&session, flags.format)
        }
        SessionCommands::Get { id } => {
            let session = ctx.service.get_session(id).await?;
            output(&session, flags.format)
        }
        SessionCommands::List { status, limit } => {
            let status = status
                .as_deref()
                .map(|value| parse_enum::<SessionStatus>(value, "status"))
                .transpose()?;
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let sessions = ctx.service.list_sessions(status, limit).await?;
            output(&sessions, flags.format)
        }
        SessionCommands::Reschedule { id, date } => {
            let scheduled_for = parse_datetime(date, "date")?;
            let update = SessionUpdateBuilder::new().scheduled_for(scheduled_for).build();
            let session = ctx.service.update_session(id, update).await?;
            output(&session, flags.format)
        }
        SessionCommands::Transition { id, to, reason } => {
            let new_status = parse_enum::<SessionStatus>(to, "status")?;
            let session = ctx
                .service
                .transition_session(id, new_status, reason.as_deref())
                .await?;
            output(&session, flags.format)
        }
        SessionCommands::Delete { id } => {
            ctx.service.delete_session(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        SessionCommands::Search { query, limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let sessions = ctx.service.search_sessions(query, limit).await?;
            output(&sessions, flags.format)
        }
    }
}
