use plenario_core::enums::{DocumentKind, DocumentStatus};
use plenario_db::updates::document::DocumentUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DocumentCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pln document`.
pub async fn handle(
    action: &DocumentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DocumentCommands::Protocol {
            kind,
            year,
            subject,
            body,
            author,
        } => {
            let kind = parse_enum::<DocumentKind>(kind, "kind")?;
            let document = ctx
                .service
                .protocol_document(kind, *year, subject, body.as_deref(), author.as_deref())
                .await?;
            output(&document, flags.format)
        }
        DocumentCommands::Get { id } => {
            let document = ctx.service.get_document(id).await?;
            output(&document, flags.format)
        }
        DocumentCommands::Find { kind, number, year } => {
            let kind = parse_enum::<DocumentKind>(kind, "kind")?;
            let document = ctx
                .service
                .get_document_by_protocol(kind, *number, *year)
                .await?;
            output(&document, flags.format)
        }
        DocumentCommands::List { status, limit } => {
            let status = status
                .as_deref()
                .map(|value| parse_enum::<DocumentStatus>(value, "status"))
                .transpose()?;
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let documents = ctx.service.list_documents(status, limit).await?;
            output(&documents, flags.format)
        }
        DocumentCommands::Update {
            id,
            subject,
            body,
            author,
        } => {
            let mut builder = DocumentUpdateBuilder::new();
            if let Some(subject) = subject.as_deref() {
                builder = builder.subject(subject);
            }
            if let Some(body) = body.clone() {
                builder = builder.body(Some(body));
            }
            if let Some(author) = author.clone() {
                builder = builder.author_id(Some(author));
            }
            let document = ctx.service.update_document(id, builder.build()).await?;
            output(&document, flags.format)
        }
        DocumentCommands::Transition { id, to, reason } => {
            let new_status = parse_enum::<DocumentStatus>(to, "status")?;
            let document = ctx
                .service
                .transition_document(id, new_status, reason.as_deref())
                .await?;
            output(&document, flags.format)
        }
        DocumentCommands::Delete { id } => {
            ctx.service.delete_document(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        DocumentCommands::Search { query, limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let documents = ctx.service.search_documents(query, limit).await?;
            output(&documents, flags.format)
        }
    }
}
