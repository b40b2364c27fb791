use std::{collections::BTreeMap, path::Path};

use clap::Parser;
use incidentlog::Store;
use tracing::instrument;

use super::terminal::Paint;

/// Command arguments for `incident status`.
#[derive(Debug, Parser, Default)]
#[command(about = "Show incident counts and journal health")]
pub struct Status {
    /// Output format (table, json)
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Suppress headers and format for scripting
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Status {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, path: &Path) -> anyhow::Result<()> {
        let store = Store::open(path)?;

        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for incident in store.incidents() {
            *counts.entry(incident.kind().to_string()).or_insert(0) += 1;
        }

        if store.is_empty() && store.skipped() == 0 {
            println!("No incidents have been reported yet. Record one with 'incident report'.");
            return Ok(());
        }

        match self.output {
            OutputFormat::Json => output_json(&store, &counts)?,
            OutputFormat::Table => {
                if self.quiet {
                    output_quiet(&store);
                } else {
                    output_table(&store, &counts);
                }
            }
        }

        Ok(())
    }
}

fn output_json(store: &Store, counts: &BTreeMap<String, usize>) -> anyhow::Result<()> {
    use serde_json::json;

    let kinds: Vec<_> = counts
        .iter()
        .map(|(kind, count)| {
            json!({
                "type": kind,
                "count": count,
            })
        })
        .collect();

    let output = json!({
        "types": kinds,
        "total": store.len(),
        "capacity": store.capacity(),
        "skipped_lines": store.skipped(),
        "journal": store.path().display().to_string(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_quiet(store: &Store) {
    println!(
        "total={} capacity={} skipped={}",
        store.len(),
        store.capacity(),
        store.skipped()
    );
}

fn output_table(store: &Store, counts: &BTreeMap<String, usize>) {
    println!("Incident counts");
    println!("{}", "───────────────".dim());

    println!("{:<30} Count", "Type");
    for (kind, count) in counts {
        println!("{kind:<30} {count}");
    }
    println!("{:<30} {} / {}", "Total", store.len(), store.capacity());

    println!();
    println!("Journal: {}", store.path().display().to_string().dim());

    if store.skipped() > 0 {
        println!(
            "Skipped {} malformed journal lines ⚠️",
            store.skipped().to_string().warning()
        );
    }

    if store.len() >= store.capacity() {
        println!(
            "{}",
            "The log is full; no further incidents can be recorded.".failure()
        );
    }
}
