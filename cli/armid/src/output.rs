//! Output formatting for CLI commands.

use armid::Identified;
use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Parses `table` or `json`, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("table") {
            Some(Self::Table)
        } else if name.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// Print rows in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => print_json(data),
    }
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "null".to_string());
    println!("{}", json);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

/// One field of a resolved identifier.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct FieldRow {
    #[tabled(rename = "Field")]
    pub field: &'static str,

    #[tabled(rename = "Value")]
    pub value: String,
}

/// JSON view of a resolved identifier.
#[derive(Debug, Clone, Serialize)]
pub struct IdentifiedView {
    pub kind: &'static str,
    pub id: String,
    pub description: String,
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl From<&Identified> for IdentifiedView {
    fn from(found: &Identified) -> Self {
        let fields = found
            .captures
            .iter()
            .map(|(field, value)| (field.to_string(), serde_json::Value::from(value)))
            .collect();

        Self {
            kind: found.kind(),
            id: found.id(),
            description: found.describe(),
            fields,
        }
    }
}

/// Print a resolved identifier.
pub fn print_identified(found: &Identified, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{} {}", "Kind:".bold(), found.kind());
            println!("{} {}", "ID:".bold(), found.id());
            let rows: Vec<FieldRow> = found
                .captures
                .iter()
                .map(|(field, value)| FieldRow {
                    field,
                    value: value.to_string(),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        OutputFormat::Json => print_json(&IdentifiedView::from(found)),
    }
}
