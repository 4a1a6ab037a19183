use plenario_db::updates::agent::AgentUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AgentCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pln agent`.
pub async fn handle(
    action: &AgentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AgentCommands::Create {
            name,
            cpf,
            email,
            phone,
            position,
        } => {
            let agent = ctx
                .service
                .create_agent(
                    name,
                    cpf,
                    email.as_deref(),
                    phone.as_deref(),
                    position.as_deref(),
                )
                .await?;
            output(&agent, flags.format)
        }
        AgentCommands::Get { id } => {
            let agent = ctx.service.get_agent(id).await?;
            output(&agent, flags.format)
        }
        AgentCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let agents = ctx.service.list_agents(limit).await?;
            output(&agents, flags.format)
        }
        AgentCommands::Update {
            id,
            name,
            email,
            phone,
            position,
            active,
        } => {
            let mut builder = AgentUpdateBuilder::new();
            if let Some(name) = name.as_deref() {
                builder = builder.name(name);
            }
            if let Some(email) = email.clone() {
                builder = builder.email(Some(email));
            }
            if let Some(phone) = phone.clone() {
                builder = builder.phone(Some(phone));
            }
            if let Some(position) = position.clone() {
                builder = builder.position(Some(position));
            }
            if let Some(active) = active {
                builder = builder.active(*active);
            }
            let agent = ctx.service.update_agent(id, builder.build()).await?;
            output(&agent, flags.format)
        }
        AgentCommands::Delete { id } => {
            ctx.service.delete_agent(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
