//! Build an identifier from field values.

use anyhow::Result;
use armid::Grammar;
use clap::Args;
use serde_json::json;

use crate::error::CliError;
use crate::output::{print_json, OutputFormat};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct FormatCommand {
    /// Resource kind, e.g. Vault.
    kind: String,

    /// Field values as FIELD=VALUE, e.g. SubscriptionId=1234.
    #[arg(required = true)]
    fields: Vec<String>,
}

impl FormatCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let grammar = ctx.require_kind(&self.kind)?;
        let id = build(grammar, &self.fields)?;

        match ctx.format {
            OutputFormat::Json => print_json(&json!({ "kind": grammar.kind(), "id": id })),
            OutputFormat::Table => println!("{id}"),
        }
        Ok(())
    }
}

/// Splits `FIELD=VALUE` at the first `=`.
fn parse_assignment(raw: &str) -> Result<(&str, &str), CliError> {
    raw.split_once('=')
        .filter(|(field, _)| !field.is_empty())
        .ok_or_else(|| CliError::InvalidAssignment(raw.to_string()))
}

fn build(grammar: &'static Grammar, raw_fields: &[String]) -> Result<String, CliError> {
    let assignments = raw_fields
        .iter()
        .map(|raw| parse_assignment(raw))
        .collect::<Result<Vec<_>, _>>()?;

    for (field, _) in &assignments {
        if !grammar.capture_names().any(|name| name == *field) {
            return Err(CliError::UnknownField {
                kind: grammar.kind(),
                field: field.to_string(),
                expected: grammar.capture_names().collect(),
            });
        }
    }

    let captures = grammar.bind(assignments)?;
    Ok(grammar.format_captures(&captures))
}
