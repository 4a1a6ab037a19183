use plenario_core::enums::BoardRole;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BoardCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pln board`.
pub async fn handle(
    action: &BoardCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        BoardCommands::Create { legislature } => {
            let board = ctx.service.create_board(legislature).await?;
            output(&board, flags.format)
        }
        BoardCommands::Get { id } => {
            let board = ctx.service.get_board(id).await?;
            output(&board, flags.format)
        }
        BoardCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let boards = ctx.service.list_boards(limit).await?;
            output(&boards, flags.format)
        }
        BoardCommands::Delete { id } => {
            ctx.service.delete_board(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        BoardCommands::Seats { id } => {
            let seats = ctx.service.list_board_seats(id).await?;
            output(&seats, flags.format)
        }
        BoardCommands::Assign {
            id,
            seat,
            councilor,
        } => {
            let role = parse_enum::<BoardRole>(seat, "seat")?;
            let mut map = ctx.service.board_seat_map(id).await?;
            map.assign(role, councilor.clone())?;
            ctx.service.assign_board_seats(id, &map).await?;
            let seats = ctx.service.list_board_seats(id).await?;
            output(&seats, flags.format)
        }
        BoardCommands::Clear { id, seat } => {
            let role = parse_enum::<BoardRole>(seat, "seat")?;
            let mut map = ctx.service.board_seat_map(id).await?;
            map.clear(role)?;
            ctx.service.assign_board_seats(id, &map).await?;
            let seats = ctx.service.list_board_seats(id).await?;
            output(&seats, flags.format)
        }
    }
}
