use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::output::output;

#[derive(Serialize)]
struct InitResponse {
    project_root: String,
    database: String,
    config: String,
    created: bool,
}

#[derive(Serialize)]
struct StarterConfig<'a> {
    general: GeneralSection<'a>,
}

#[derive(Serialize)]
struct GeneralSection<'a> {
    chamber_name: &'a str,
    legislature: &'a str,
}

/// Starter `config.toml`: a serialized `[general]` section plus commented-out
/// templates for the optional sections. Serialized rather than templated so
/// quotes and backslashes in names survive the round trip.
fn starter_config(chamber: &str, legislature: &str) -> anyhow::Result<String> {
    let general = toml::to_string(&StarterConfig {
        general: GeneralSection {
            chamber_name: chamber,
            legislature,
        },
    })
    .context("failed to serialize starter config")?;
    Ok(format!(
        "{general}\n\
         # [database]\n# url = \"libsql://<db>.turso.io\"\n# auth_token = \"...\"\n\n\
         # [drafting]\n# endpoint = \"https://api.openai.com/v1/chat/completions\"\n\
         # api_key = \"...\"\n# model = \"gpt-4o-mini\"\n"
    ))
}

/// Handle `pln init`: create the `.plenario` directory, write a starter
/// config, and open the database once so migrations run.
pub async fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = match &flags.project {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir().context("failed to read current directory")?,
    };

    let plenario_dir = root.join(".plenario");
    let created = !plenario_dir.is_dir();
    std::fs::create_dir_all(&plenario_dir)
        .with_context(|| format!("failed to create {}", plenario_dir.display()))?;

    let config_path = plenario_dir.join("config.toml");
    if !config_path.exists() {
        let chamber = args.chamber.as_deref().unwrap_or("Câmara Municipal");
        let legislature = args.legislature.as_deref().unwrap_or("");
        let config = starter_config(chamber, legislature)?;
        std::fs::write(&config_path, config)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
    }

    let db_path = plenario_dir.join("plenario.db");
    plenario_db::ChamberDb::open_local(&db_path.to_string_lossy())
        .await
        .context("failed to create chamber database")?;

    output(
        &InitResponse {
            project_root: root.display().to_string(),
            database: db_path.display().to_string(),
            config: config_path.display().to_string(),
            created,
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use super::starter_config;

    #[test]
    fn starter_config_survives_quoted_chamber_name() {
        let rendered =
            starter_config("Câmara Municipal \"Antônio Prado\"", "2025-2026").unwrap();
        let parsed: toml::Value = toml::from_str(&rendered).expect("starter config should parse");
        assert_eq!(
            parsed["general"]["chamber_name"].as_str(),
            Some("Câmara Municipal \"Antônio Prado\"")
        );
        assert_eq!(parsed["general"]["legislature"].as_str(), Some("2025-2026"));
    }

    #[test]
    fn starter_config_leaves_optional_sections_commented() {
        let rendered = starter_config("Câmara Municipal", "").unwrap();
        let parsed: toml::Value = toml::from_str(&rendered).unwrap();
        assert!(parsed.get("database").is_none());
        assert!(parsed.get("drafting").is_none());
        assert!(rendered.contains("# [drafting]"));
    }
}
