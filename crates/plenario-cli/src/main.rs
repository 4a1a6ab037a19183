use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("pln error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    // init and schema run before any project context exists.
    match &cli.command {
        cli::Commands::Init(args) => return commands::init::handle(args, &flags).await,
        cli::Commands::Schema(args) => return commands::schema::handle(args, &flags),
        _ => {}
    }

    let config = bootstrap::load_config(&flags)?;
    let project_root = resolve_project_root(flags.project.as_deref())?;

    let ctx = context::AppContext::init(project_root, config)
        .await
        .context("failed to initialize plenário application context")?;

    let result = commands::dispatch::dispatch(cli.command, &ctx, &flags).await;

    // Push local writes back to the cloud replica before exiting. A failed
    // sync is not a failed command; the replica catches up on the next run.
    if ctx.service.is_synced_replica() {
        if let Err(error) = ctx.service.sync().await {
            tracing::warn!(%error, "failed to sync replica after command");
        }
    }

    result
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PLENARIO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);

        if explicit
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name == ".plenario")
        {
            return explicit
                .parent()
                .map(std::path::Path::to_path_buf)
                .context("invalid --project path: '.plenario' directory has no parent");
        }

        if explicit.is_dir() {
            return Ok(explicit);
        }

        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    context::find_project_root(&start)
        .context("not a plenário project (no .plenario directory found). Run 'pln init' first.")
}
