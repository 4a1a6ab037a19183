use plenario_db::error::DatabaseError;
use plenario_db::updates::document::DocumentUpdateBuilder;
use plenario_db::updates::minutes::MinutesUpdateBuilder;
use plenario_drafting::{DraftKind, DraftRequest, Drafter, HttpDrafter};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DraftCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pln draft`.
///
/// Drafting never mutates chamber state on failure: the API call happens
/// first, and only a successful draft is written back under `--save`.
pub async fn handle(
    action: &DraftCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let drafter = HttpDrafter::from_config(&ctx.config.drafting)?;

    match action {
        DraftCommands::Minutes {
            session,
            notes,
            instructions,
            save,
        } => {
            let context = minutes_context(ctx, session, notes.as_deref()).await?;
            let mut request = DraftRequest::new(DraftKind::MinutesSummary, context);
            if let Some(extra) = instructions.clone() {
                request = request.with_instructions(extra);
            }
            let draft = drafter.draft(&request).await?;

            if *save {
                let minutes = save_minutes_body(ctx, session, &draft.text).await?;
                return output(&minutes, flags.format);
            }

            output(
                &serde_json::json!({ "text": draft.text, "model": draft.model }),
                flags.format,
            )
        }
        DraftCommands::Justification {
            document,
            instructions,
            save,
        } => {
            let doc = ctx.service.get_document(document).await?;
            let mut context = format!("Ementa: {}", doc.subject);
            if let Some(body) = &doc.body {
                context.push_str("\n\nTexto atual: ");
                context.push_str(body);
            }

            let mut request = DraftRequest::new(DraftKind::DocumentJustification, context);
            if let Some(extra) = instructions.clone() {
                request = request.with_instructions(extra);
            }
            let draft = drafter.draft(&request).await?;

            if *save {
                let body = match &doc.body {
                    Some(existing) => format!("{existing}\n\nJustificativa:\n{}", draft.text),
                    None => format!("Justificativa:\n{}", draft.text),
                };
                let update = DocumentUpdateBuilder::new().body(Some(body)).build();
                let updated = ctx.service.update_document(document, update).await?;
                return output(&updated, flags.format);
            }

            output(
                &serde_json::json!({ "text": draft.text, "model": draft.model }),
                flags.format,
            )
        }
    }
}

/// Drafting context for an ata: the session title, its agenda in reading
/// order, and any free-form notes.
async fn minutes_context(
    ctx: &AppContext,
    session_id: &str,
    notes: Option<&str>,
) -> anyhow::Result<String> {
    let session = ctx.service.get_session(session_id).await?;
    let agenda = ctx.service.list_agenda(session_id).await?;

    let mut context = format!("Sessão: {}\n", session.title);
    if !agenda.is_empty() {
        context.push_str("Pauta:\n");
        for item in &agenda {
            context.push_str(&format!("{}. {}\n", item.position, item.description));
        }
    }
    if let Some(notes) = notes {
        context.push_str("\nAnotações:\n");
        context.push_str(notes);
    }
    Ok(context)
}

/// Write drafted text into the session's ata, opening the draft when the
/// session has none yet.
async fn save_minutes_body(
    ctx: &AppContext,
    session_id: &str,
    text: &str,
) -> anyhow::Result<plenario_core::entities::Minutes> {
    match ctx.service.get_minutes_for_session(session_id).await {
        Ok(existing) => {
            let update = MinutesUpdateBuilder::new().body(text).build();
            ctx.service
                .update_minutes(&existing.id, update)
                .await
                .map_err(Into::into)
        }
        Err(DatabaseError::NoResult) => ctx
            .service
            .draft_minutes(session_id, Some(text))
            .await
            .map_err(Into::into),
        Err(error) => Err(error.into()),
    }
}
