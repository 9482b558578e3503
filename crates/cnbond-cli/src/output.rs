//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// A key-value pair for display, shared by the price and futures commands.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Formats and prints a list of key-value rows according to `format`.
pub fn print_rows(rows: &[KeyValue], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => print_table(rows),
        OutputFormat::Json => print_json(rows),
        OutputFormat::Csv => print_csv(rows)?,
        OutputFormat::Minimal => print_minimal(rows),
    }
    Ok(())
}

fn print_table(rows: &[KeyValue]) {
    if rows.is_empty() {
        println!("No results.");
        return;
    }
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();
    println!("{table}");
}

fn print_json(rows: &[KeyValue]) {
    let map: std::collections::HashMap<&str, &str> =
        rows.iter().map(|r| (r.key.as_str(), r.value.as_str())).collect();
    match serde_json::to_string_pretty(&map) {
        Ok(json) => println!("{json}"),
        Err(e) => print_error(&e.to_string()),
    }
}

fn print_csv(rows: &[KeyValue]) -> CliResult<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn print_minimal(rows: &[KeyValue]) {
    for row in rows {
        println!("{}", row.value);
    }
}

/// Prints an error message to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}
