use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pln overview`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let overview = ctx.service.chamber_overview().await?;
    output(&overview, flags.format)
}
