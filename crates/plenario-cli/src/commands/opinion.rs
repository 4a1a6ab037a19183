use plenario_core::enums::OpinionVerdict;
use plenario_db::updates::opinion::OpinionUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OpinionCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pln opinion`.
pub async fn handle(
    action: &OpinionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        OpinionCommands::Request {
            committee,
            document,
            rapporteur,
        } => {
            let opinion = ctx
                .service
                .request_opinion(committee, document, rapporteur.as_deref())
                .await?;
            output(&opinion, flags.format)
        }
        OpinionCommands::Get { id } => {
            let opinion = ctx.service.get_opinion(id).await?;
            output(&opinion, flags.format)
        }
        OpinionCommands::List { document, limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let opinions = ctx
                .service
                .list_opinions(document.as_deref(), limit)
                .await?;
            output(&opinions, flags.format)
        }
        OpinionCommands::Update {
            id,
            rapporteur,
            body,
        } => {
            let mut builder = OpinionUpdateBuilder::new();
            if let Some(rapporteur) = rapporteur.clone() {
                builder = builder.rapporteur_id(Some(rapporteur));
            }
            if let Some(body) = body.clone() {
                builder = builder.body(Some(body));
            }
            let opinion = ctx.service.update_opinion(id, builder.build()).await?;
            output(&opinion, flags.format)
        }
        OpinionCommands::Record { id, verdict, body } => {
            let verdict = parse_enum::<OpinionVerdict>(verdict, "verdict")?;
            let opinion = ctx.service.record_opinion(id, verdict, body).await?;
            output(&opinion, flags.format)
        }
        OpinionCommands::Withdraw { id } => {
            ctx.service.delete_opinion(id).await?;
            output(&serde_json::json!({ "withdrawn": id }), flags.format)
        }
    }
}
