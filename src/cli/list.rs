use std::path::Path;

use clap::{Parser, ValueEnum};
use incidentlog::{domain::Incident, storage::record, Store};
use serde::Serialize;
use tracing::instrument;

use super::terminal::{is_narrow, Paint};

/// Command arguments for `incident list`.
#[derive(Debug, Parser)]
#[command(about = "List incidents, optionally filtered by area or type")]
pub struct List {
    /// Show only incidents whose area contains this text (case-insensitive)
    #[arg(long, value_name = "TEXT", conflicts_with = "kind")]
    area: Option<String>,

    /// Show only incidents whose type contains this text (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    kind: Option<String>,

    /// Output format (default: table)
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Suppress headers and format rows for scripting
    #[arg(long)]
    quiet: bool,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Serialize)]
struct SerializableRow<'a> {
    id: u32,
    area: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    time: &'a str,
}

impl<'a> From<&'a Incident> for SerializableRow<'a> {
    fn from(incident: &'a Incident) -> Self {
        Self {
            id: incident.id().get(),
            area: incident.area(),
            kind: incident.kind(),
            time: incident.time(),
        }
    }
}

impl List {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, path: &Path) -> anyhow::Result<()> {
        let store = Store::open(path)?;

        if store.is_empty() {
            if !self.quiet {
                println!("No incidents have been reported yet.");
            }
            return Ok(());
        }

        let (rows, description) = match (&self.area, &self.kind) {
            (Some(needle), _) => (
                store.filter_by_area(needle),
                Some(format!("with area containing '{needle}'")),
            ),
            (_, Some(needle)) => (
                store.filter_by_kind(needle),
                Some(format!("of type containing '{needle}'")),
            ),
            (None, None) => (store.incidents().iter().collect(), None),
        };

        if rows.is_empty() {
            // Zero matches is a result, not an error.
            if !self.quiet {
                let description = description.unwrap_or_default();
                println!("No incidents found {description}.");
            }
            return Ok(());
        }

        match self.output {
            OutputFormat::Json => output_json(&rows)?,
            OutputFormat::Table => {
                if self.quiet {
                    output_quiet(&rows);
                } else {
                    output_table(&rows, description.as_deref());
                }
            }
        }

        Ok(())
    }
}

fn output_json(rows: &[&Incident]) -> anyhow::Result<()> {
    let rows: Vec<SerializableRow> = rows.iter().copied().map(SerializableRow::from).collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn output_quiet(rows: &[&Incident]) {
    for incident in rows {
        println!("{}", record::format_line(incident));
    }
}

fn output_table(rows: &[&Incident], description: Option<&str>) {
    if let Some(description) = description {
        println!("Incidents {description}:");
        println!();
    }

    if is_narrow() {
        // Stacked output for narrow terminals
        for incident in rows {
            println!("#{} {}", incident.id(), incident.area().success());
            println!(
                "    {} at {}",
                incident.kind().warning(),
                incident.time().info()
            );
        }
        return;
    }

    println!(
        "{:<5} | {:<30} | {:<30} | {:<8}",
        "ID", "Area", "Incident Type", "Time"
    );
    println!("{}", "-".repeat(82).dim());

    for incident in rows {
        println!(
            "{:<5} | {} | {} | {}",
            incident.id(),
            format!("{:<30}", incident.area()).success(),
            format!("{:<30}", incident.kind()).warning(),
            format!("{:<8}", incident.time()).info()
        );
    }
}
