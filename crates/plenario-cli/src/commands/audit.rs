use plenario_core::enums::{AuditAction, EntityType};
use plenario_db::repos::audit::AuditFilter;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AuditArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_datetime, parse_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `pln audit`.
pub async fn handle(args: &AuditArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(None, flags.limit, 50);
    let filter = AuditFilter {
        entity_type: args
            .entity_type
            .as_deref()
            .map(|value| parse_enum::<EntityType>(value, "entity-type"))
            .transpose()?,
        entity_id: args.entity_id.clone(),
        action: args
            .action
            .as_deref()
            .map(|value| parse_enum::<AuditAction>(value, "action"))
            .transpose()?,
        actor_id: args.actor.clone(),
        since: args
            .since
            .as_deref()
            .map(|value| parse_datetime(value, "since"))
            .transpose()?,
        limit: Some(limit),
    };

    let entries = ctx.service.query_audit(&filter).await?;
    output(&entries, flags.format)
}
