use plenario_core::enums::CommitteeKind;
use plenario_core::seats::CommitteeSeatKey;
use plenario_db::updates::committee::CommitteeUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CommitteeCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pln committee`.
pub async fn handle(
    action: &CommitteeCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CommitteeCommands::Create {
            name,
            kind,
            description,
            membro_seats,
        } => {
            let kind = parse_enum::<CommitteeKind>(kind, "kind")?;
            let membro_seats =
                (*membro_seats).unwrap_or(ctx.config.general.default_membro_seats);
            let committee = ctx
                .service
                .create_committee(name, kind, description.as_deref(), membro_seats)
                .await?;
            output(&committee, flags.format)
        }
        CommitteeCommands::Get { id } => {
            let committee = ctx.service.get_committee(id).await?;
            output(&committee, flags.format)
        }
        CommitteeCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let committees = ctx.service.list_committees(limit).await?;
            output(&committees, flags.format)
        }
        CommitteeCommands::Update {
            id,
            name,
            description,
            membro_seats,
        } => {
            let mut builder = CommitteeUpdateBuilder::new();
            if let Some(name) = name.as_deref() {
                builder = builder.name(name);
            }
            if let Some(description) = description.clone() {
                builder = builder.description(Some(description));
            }
            if let Some(membro_seats) = membro_seats {
                builder = builder.membro_seats(*membro_seats);
            }
            let committee = ctx.service.update_committee(id, builder.build()).await?;
            output(&committee, flags.format)
        }
        CommitteeCommands::Delete { id } => {
            ctx.service.delete_committee(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        CommitteeCommands::Seats { id } => {
            let seats = ctx.service.list_committee_seats(id).await?;
            output(&seats, flags.format)
        }
        CommitteeCommands::Assign {
            id,
            seat,
            councilor,
        } => {
            let key = parse_seat_key(seat)?;
            let mut map = ctx.service.committee_seat_map(id).await?;
            map.assign(key, councilor.clone())?;
            ctx.service.assign_committee_seats(id, &map).await?;
            let seats = ctx.service.list_committee_seats(id).await?;
            output(&seats, flags.format)
        }
        CommitteeCommands::Clear { id, seat } => {
            let key = parse_seat_key(seat)?;
            let mut map = ctx.service.committee_seat_map(id).await?;
            map.clear(key)?;
            ctx.service.assign_committee_seats(id, &map).await?;
            let seats = ctx.service.list_committee_seats(id).await?;
            output(&seats, flags.format)
        }
    }
}

fn parse_seat_key(raw: &str) -> anyhow::Result<CommitteeSeatKey> {
    CommitteeSeatKey::parse(raw).ok_or_else(|| {
        anyhow::anyhow!("invalid seat '{raw}': expected presidente, relator or membro_<n>")
    })
}

#[cfg(test)]
mod tests {
    use plenario_core::seats::CommitteeSeatKey;

    use super::parse_seat_key;

    #[test]
    fn parses_named_and_indexed_seats() {
        assert_eq!(
            parse_seat_key("presidente").expect("should parse"),
            CommitteeSeatKey::Presidente
        );
        assert_eq!(
            parse_seat_key("membro_2").expect("should parse"),
            CommitteeSeatKey::Membro(2)
        );
    }

    #[test]
    fn rejects_unknown_seat() {
        assert!(parse_seat_key("secretario").is_err());
    }
}
