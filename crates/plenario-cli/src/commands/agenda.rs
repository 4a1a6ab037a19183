use plenario_db::updates::agenda::AgendaItemUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AgendaCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pln agenda`.
pub async fn handle(
    action: &AgendaCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AgendaCommands::Add {
            session,
            description,
            document,
        } => {
            let item = ctx
                .service
                .add_agenda_item(session, description, document.as_deref())
                .await?;
            output(&item, flags.format)
        }
        AgendaCommands::Get { id } => {
            let item = ctx.service.get_agenda_item(id).await?;
            output(&item, flags.format)
        }
        AgendaCommands::List { session } => {
            let items = ctx.service.list_agenda(session).await?;
            output(&items, flags.format)
        }
        AgendaCommands::Update {
            id,
            description,
            document,
        } => {
            let mut builder = AgendaItemUpdateBuilder::new();
            if let Some(description) = description.as_deref() {
                builder = builder.description(description);
            }
            if let Some(document) = document.clone() {
                builder = builder.document_id(Some(document));
            }
            let item = ctx.service.update_agenda_item(id, builder.build()).await?;
            output(&item, flags.format)
        }
        AgendaCommands::Move { id, position } => {
            let item = ctx.service.move_agenda_item(id, *position).await?;
            output(&item, flags.format)
        }
        AgendaCommands::Complete { id } => {
            let item = ctx.service.complete_agenda_item(id).await?;
            output(&item, flags.format)
        }
        AgendaCommands::Remove { id } => {
            ctx.service.remove_agenda_item(id).await?;
            output(&serde_json::json!({ "removed": id }), flags.format)
        }
    }
}
