//! List the known resource kinds.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

#[derive(Debug, Serialize, Tabled)]
struct KindRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,

    #[tabled(rename = "Template")]
    template: String,
}

pub fn run(ctx: &CommandContext) -> Result<()> {
    let rows: Vec<KindRow> = ctx
        .registry
        .grammars()
        .map(|grammar| KindRow {
            kind: grammar.kind(),
            template: grammar.template(),
        })
        .collect();

    print_output(&rows, ctx.format);
    Ok(())
}
