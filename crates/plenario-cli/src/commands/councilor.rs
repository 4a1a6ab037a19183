use plenario_db::updates::councilor::CouncilorUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CouncilorCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pln councilor`.
pub async fn handle(
    action: &CouncilorCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CouncilorCommands::Create {
            name,
            party,
            nickname,
            cpf,
            email,
        } => {
            let councilor = ctx
                .service
                .create_councilor(
                    name,
                    nickname.as_deref(),
                    party,
                    cpf.as_deref(),
                    email.as_deref(),
                )
                .await?;
            output(&councilor, flags.format)
        }
        CouncilorCommands::Get { id } => {
            let councilor = ctx.service.get_councilor(id).await?;
            output(&councilor, flags.format)
        }
        CouncilorCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let councilors = ctx.service.list_councilors(limit).await?;
            output(&councilors, flags.format)
        }
        CouncilorCommands::Update {
            id,
            name,
            party,
            nickname,
            email,
            active,
        } => {
            let mut builder = CouncilorUpdateBuilder::new();
            if let Some(name) = name.as_deref() {
                builder = builder.name(name);
            }
            if let Some(party) = party.as_deref() {
                builder = builder.party(party);
            }
            if let Some(nickname) = nickname.clone() {
                builder = builder.nickname(Some(nickname));
            }
            if let Some(email) = email.clone() {
                builder = builder.email(Some(email));
            }
            if let Some(active) = active {
                builder = builder.active(*active);
            }
            let councilor = ctx.service.update_councilor(id, builder.build()).await?;
            output(&councilor, flags.format)
        }
        CouncilorCommands::Delete { id } => {
            ctx.service.delete_councilor(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
