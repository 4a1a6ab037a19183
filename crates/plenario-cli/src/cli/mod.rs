use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `pln` binary.
#[derive(Debug, Parser)]
#[command(
    name = "pln",
    version,
    about = "Plenário - administrative portal of a municipal legislative chamber"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to auto-detect via .plenario)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "pln", "--format", "table", "--limit", "10", "--verbose", "overview",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Overview));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["pln", "overview", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Overview));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["pln", "--format", "xml", "overview"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_accepts_all_supported_values() {
        for value in ["json", "table", "raw"] {
            let cli = Cli::try_parse_from(["pln", "--format", value, "overview"])
                .expect("cli should parse");
            assert!(matches!(cli.command, Commands::Overview));
        }
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["pln", "--project", "/tmp/camara", "overview"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.project.as_deref(), Some("/tmp/camara"));
    }

    #[test]
    fn session_schedule_parses() {
        let cli = Cli::try_parse_from([
            "pln",
            "session",
            "schedule",
            "--number",
            "23",
            "--kind",
            "ordinaria",
            "--year",
            "2025",
            "--date",
            "2025-08-12T19:00:00Z",
        ])
        .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Session { .. }));
    }

    #[test]
    fn committee_assign_parses() {
        let cli = Cli::try_parse_from([
            "pln",
            "committee",
            "assign",
            "com-12345678",
            "--seat",
            "relator",
            "--councilor",
            "ver-12345678",
        ])
        .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Committee { .. }));
    }
}
