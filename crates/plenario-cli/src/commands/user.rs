use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pln user`.
pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::Invite { email, name } => {
            let user = ctx.service.invite_user(email, name).await?;
            output(&user, flags.format)
        }
        UserCommands::Get { id } => {
            let user = ctx.service.get_user(id).await?;
            output(&user, flags.format)
        }
        UserCommands::Find { email } => {
            let user = ctx.service.get_user_by_email(email).await?;
            output(&user, flags.format)
        }
        UserCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let users = ctx.service.list_users(limit).await?;
            output(&users, flags.format)
        }
        UserCommands::Activate { id, token } => {
            let user = ctx.service.activate_user(id, token).await?;
            output(&user, flags.format)
        }
        UserCommands::Deactivate { id } => {
            let user = ctx.service.deactivate_user(id).await?;
            output(&user, flags.format)
        }
    }
}
