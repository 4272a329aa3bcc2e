//! Parse an identifier and show its fields.

use anyhow::Result;
use armid::{Identified, Matching};
use clap::Args;

use crate::error::CliError;
use crate::output::print_identified;

use super::CommandContext;

#[derive(Debug, Args)]
pub struct ParseCommand {
    /// The identifier to parse.
    id: String,

    /// Parse as this kind instead of detecting it.
    #[arg(long)]
    kind: Option<String>,

    /// Match literal segments case-insensitively (normalizes casing; does not validate).
    #[arg(long)]
    insensitive: bool,
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let found = self.resolve(ctx)?;
        print_identified(&found, ctx.format);
        Ok(())
    }

    fn resolve(&self, ctx: &CommandContext) -> Result<Identified, CliError> {
        let matching = if self.insensitive {
            Matching::Insensitive
        } else {
            Matching::Strict
        };

        match &self.kind {
            Some(kind) => {
                let grammar = ctx.require_kind(kind)?;
                let captures = grammar.parse(&self.id, matching)?;
                Ok(Identified { grammar, captures })
            }
            None => Ok(ctx.registry.resolve(&self.id, matching)?),
        }
    }
}
