//! Error handling and display for the CLI.

use armid::IdError;
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown resource kind: {0}")]
    UnknownKind(String),

    #[error("{kind} has no field '{field}' (expected one of: {})", .expected.join(", "))]
    UnknownField {
        kind: &'static str,
        field: String,
        expected: Vec<&'static str>,
    },

    #[error("Expected FIELD=VALUE, got '{0}'")]
    InvalidAssignment(String),

    #[error("{0}")]
    Id(#[from] IdError),

    #[error("{failed} of {total} identifiers failed")]
    CheckFailed { failed: usize, total: usize },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = err.downcast_ref::<CliError>().and_then(hint) {
        eprintln!("\n{}", hint.yellow());
    }
}

fn hint(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::UnknownKind(_) | CliError::Id(IdError::Unrecognized(_)) => {
            Some("Hint: Run `armid kinds` to list the known resource kinds.")
        }
        CliError::Id(IdError::Ambiguous(_)) => Some("Hint: Pass --kind to choose one."),
        CliError::Id(IdError::LiteralMismatch { .. }) => Some(
            "Hint: The ID is not in canonical casing. Run `armid normalize` to rewrite it.",
        ),
        _ => None,
    }
}
