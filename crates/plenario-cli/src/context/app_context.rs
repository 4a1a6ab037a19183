use std::path::PathBuf;

use anyhow::Context;
use plenario_config::PlenarioConfig;
use plenario_db::service::ChamberService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: ChamberService,
    pub config: PlenarioConfig,
    pub project_root: PathBuf,
}

impl AppContext {
    /// Initialize all shared resources using the discovered project root.
    ///
    /// When the `[database]` section is configured the service opens a Turso
    /// embedded replica; if that fails it falls back to the local file so the
    /// chamber keeps working offline.
    pub async fn init(project_root: PathBuf, config: PlenarioConfig) -> anyhow::Result<Self> {
        let plenario_dir = project_root.join(".plenario");
        let db_path = plenario_dir.join("plenario.db");
        let synced_path = plenario_dir.join("plenario-synced.db");

        let db_path_str = db_path.to_string_lossy();
        let synced_path_str = synced_path.to_string_lossy();

        let service = if config.database.is_configured() {
            let replica_path: &str = if config.database.local_replica_path.is_empty() {
                &synced_path_str
            } else {
                &config.database.local_replica_path
            };

            match ChamberService::new_synced(
                replica_path,
                &config.database.url,
                &config.database.auth_token,
            )
            .await
            {
                Ok(service) => service,
                Err(error) => {
                    tracing::warn!(
                        %error,
                        "failed to open synced chamber database; falling back to local"
                    );
                    ChamberService::new_local(&db_path_str)
                        .await
                        .context("failed to open chamber database")?
                }
            }
        } else {
            ChamberService::new_local(&db_path_str)
                .await
                .context("failed to open chamber database")?
        };

        // Audit attribution for every mutation issued through this process.
        let service = match std::env::var("PLENARIO_ACTOR") {
            Ok(actor) if !actor.is_empty() => service.with_actor(actor),
            _ => service,
        };

        Ok(Self {
            service,
            config,
            project_root,
        })
    }
}
