//! Rewrite identifiers into canonical casing.

use anyhow::Result;
use armid::IdError;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tracing::warn;

use crate::error::CliError;
use crate::output::{print_json, OutputFormat};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct NormalizeCommand {
    /// Identifiers to normalize.
    #[arg(required = true)]
    ids: Vec<String>,

    /// Normalize as this kind instead of detecting it.
    #[arg(long)]
    kind: Option<String>,
}

#[derive(Debug, Serialize)]
struct Normalized {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl NormalizeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let grammar = self.kind.as_deref().map(|kind| ctx.require_kind(kind)).transpose()?;

        let results: Vec<Normalized> = self
            .ids
            .iter()
            .map(|input| {
                let outcome: Result<String, IdError> = match grammar {
                    Some(grammar) => grammar
                        .parse_insensitively(input)
                        .map(|captures| grammar.format_captures(&captures)),
                    None => ctx.registry.normalize(input),
                };
                match outcome {
                    Ok(id) => Normalized {
                        input: input.clone(),
                        id: Some(id),
                        error: None,
                    },
                    Err(e) => {
                        warn!(input = %input, error = %e, "could not normalize identifier");
                        Normalized {
                            input: input.clone(),
                            id: None,
                            error: Some(e.to_string()),
                        }
                    }
                }
            })
            .collect();

        match ctx.format {
            OutputFormat::Json => print_json(&results),
            OutputFormat::Table => {
                for result in &results {
                    match (&result.id, &result.error) {
                        (Some(id), _) => println!("{id}"),
                        (None, Some(error)) => {
                            eprintln!("{} {}: {}", "Failed:".red().bold(), result.input, error)
                        }
                        (None, None) => {}
                    }
                }
            }
        }

        let failed = results.iter().filter(|r| r.error.is_some()).count();
        if failed > 0 {
            return Err(CliError::CheckFailed {
                failed,
                total: results.len(),
            }
            .into());
        }
        Ok(())
    }
}
