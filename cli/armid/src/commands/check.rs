//! Strictly validate identifiers read from files or stdin.
//!
//! Input is one identifier per line. Blank lines and lines starting with `#`
//! are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use armid::{Grammar, IdError, Registry};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_output, print_success, OutputFormat};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Files to read; `-` or none reads stdin.
    files: Vec<PathBuf>,

    /// Require every identifier to be of this kind.
    #[arg(long)]
    kind: Option<String>,
}

/// One rejected identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
struct Failure {
    #[tabled(rename = "Source")]
    source: String,

    #[tabled(rename = "Line")]
    line: usize,

    #[tabled(rename = "ID")]
    input: String,

    #[tabled(rename = "Error")]
    error: String,
}

/// Where identifiers are read from.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Stdin,
    File(&'a Path),
}

/// Inputs in command-line order; none given means stdin.
fn inputs(files: &[PathBuf]) -> Vec<Input<'_>> {
    if files.is_empty() {
        return vec![Input::Stdin];
    }
    files
        .iter()
        .map(|path| {
            if path.as_os_str() == "-" {
                Input::Stdin
            } else {
                Input::File(path)
            }
        })
        .collect()
}

#[derive(Debug, Default)]
struct Report {
    checked: usize,
    failures: Vec<Failure>,
}

impl CheckCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let grammar = self.kind.as_deref().map(|kind| ctx.require_kind(kind)).transpose()?;
        let mut report = Report::default();

        for input in inputs(&self.files) {
            match input {
                Input::Stdin => {
                    check_lines(ctx.registry, grammar, "<stdin>", io::stdin().lock(), &mut report)?;
                }
                Input::File(path) => {
                    let file = File::open(path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    let source = path.display().to_string();
                    check_lines(ctx.registry, grammar, &source, BufReader::new(file), &mut report)?;
                }
            }
        }

        if report.failures.is_empty() {
            match ctx.format {
                OutputFormat::Json => print_output::<Failure>(&[], ctx.format),
                OutputFormat::Table => {
                    print_success(&format!("{} identifiers are canonical", report.checked))
                }
            }
            return Ok(());
        }

        if ctx.format == OutputFormat::Table {
            eprintln!("{}", "Rejected identifiers:".red().bold());
        }
        print_output(&report.failures, ctx.format);

        Err(CliError::CheckFailed {
            failed: report.failures.len(),
            total: report.checked,
        }
        .into())
    }
}

fn check_one(registry: &Registry, grammar: Option<&Grammar>, input: &str) -> Result<(), IdError> {
    match grammar {
        Some(grammar) => grammar.parse_strict(input).map(|_| ()),
        None => registry.identify(input).map(|_| ()),
    }
}

fn check_lines(
    registry: &Registry,
    grammar: Option<&Grammar>,
    source: &str,
    reader: impl BufRead,
    report: &mut Report,
) -> Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read {source}"))?;
        let input = line.trim();
        if input.is_empty() || input.starts_with('#') {
            continue;
        }

        report.checked += 1;
        if let Err(e) = check_one(registry, grammar, input) {
            debug!(source, line = index + 1, error = %e, "rejected identifier");
            report.failures.push(Failure {
                source: source.to_string(),
                line: index + 1,
                input: input.to_string(),
                error: e.to_string(),
            });
        }
    }
    Ok(())
}
