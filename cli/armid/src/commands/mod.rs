//! CLI commands.

mod check;
mod format;
mod kinds;
mod normalize;
mod parse;

use anyhow::Result;
use armid::{Grammar, Registry};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// armid - parse, normalize, and check hierarchical resource identifiers.
#[derive(Debug, Parser)]
#[command(name = "armid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json). Defaults to ARMID_OUTPUT, then table.
    #[arg(long, global = true)]
    output: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse an identifier and show its fields.
    Parse(parse::ParseCommand),

    /// Rewrite identifiers into canonical casing.
    Normalize(normalize::NormalizeCommand),

    /// Strictly validate identifiers read from files or stdin.
    Check(check::CheckCommand),

    /// Build an identifier from field values.
    Format(format::FormatCommand),

    /// List the known resource kinds.
    Kinds,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let format = match self.output.as_deref() {
            Some(name) => OutputFormat::from_name(name).ok_or_else(|| {
                anyhow::anyhow!("--output must be 'table' or 'json', got '{name}'")
            })?,
            None => config.output,
        };

        let ctx = CommandContext {
            registry: Registry::builtin(),
            format,
        };

        match self.command {
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::Normalize(cmd) => cmd.run(&ctx),
            Commands::Check(cmd) => cmd.run(&ctx),
            Commands::Format(cmd) => cmd.run(&ctx),
            Commands::Kinds => kinds::run(&ctx),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub registry: &'static Registry,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Look up a grammar by kind name.
    pub fn require_kind(&self, kind: &str) -> Result<&'static Grammar, CliError> {
        self.registry
            .get(kind)
            .ok_or_else(|| CliError::UnknownKind(kind.to_string()))
    }
}
