use std::path::PathBuf;

use anyhow::Context;

use crate::cli::GlobalFlags;

/// Load layered configuration, honoring a project-level `.env` when
/// `--project` points somewhere other than the current directory.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<plenario_config::PlenarioConfig> {
    load_project_dotenv(flags)?;
    plenario_config::PlenarioConfig::load_with_dotenv().map_err(anyhow::Error::from)
}

fn load_project_dotenv(flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(project) = &flags.project else {
        return Ok(());
    };

    let project_path = PathBuf::from(project);
    let root = if project_path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == ".plenario")
    {
        project_path
            .parent()
            .map_or(project_path.clone(), std::path::Path::to_path_buf)
    } else {
        project_path
    };

    let env_path = root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }

    Ok(())
}
