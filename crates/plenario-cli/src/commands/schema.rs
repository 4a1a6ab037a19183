use plenario_core::entities::{
    Agent, AuditEntry, Board, Committee, Councilor, Document, Minutes, Opinion, Session, User,
};
use plenario_core::responses::ChamberOverview;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;

/// Handle `pln schema`: dump the JSON schema of a registered type.
pub fn handle(args: &SchemaArgs, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_for_name(&args.type_name)?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn schema_for_name(name: &str) -> anyhow::Result<schemars::Schema> {
    let schema = match name {
        "agent" => schemars::schema_for!(Agent),
        "councilor" => schemars::schema_for!(Councilor),
        "committee" => schemars::schema_for!(Committee),
        "board" => schemars::schema_for!(Board),
        "session" => schemars::schema_for!(Session),
        "agenda_item" => schemars::schema_for!(plenario_core::entities::AgendaItem),
        "minutes" => schemars::schema_for!(Minutes),
        "document" => schemars::schema_for!(Document),
        "opinion" => schemars::schema_for!(Opinion),
        "user" => schemars::schema_for!(User),
        "audit_entry" => schemars::schema_for!(AuditEntry),
        "overview" => schemars::schema_for!(ChamberOverview),
        other => anyhow::bail!(
            "unknown type '{other}': expected one of agent, councilor, committee, board, \
             session, agenda_item, minutes, document, opinion, user, audit_entry, overview"
        ),
    };
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::schema_for_name;

    #[test]
    fn known_types_produce_schemas() {
        for name in [
            "agent",
            "councilor",
            "committee",
            "board",
            "session",
            "agenda_item",
            "minutes",
            "document",
            "opinion",
            "user",
            "audit_entry",
            "overview",
        ] {
            let schema = schema_for_name(name).expect("schema should build");
            let value = serde_json::to_value(&schema).expect("schema should serialize");
            assert!(value.is_object(), "schema for '{name}' should be an object");
        }
    }

    #[test]
    fn unknown_type_errors() {
        let err = schema_for_name("pauta").expect_err("should fail");
        assert!(err.to_string().contains("unknown type 'pauta'"));
    }
}
