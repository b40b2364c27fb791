use std::path::Path;

use clap::Parser;
use dialoguer::Input;
use incidentlog::{
    domain::{EventTime, FieldText, InvalidFieldError, InvalidTimeError},
    storage::{Durability, Store},
};
use tracing::instrument;

use super::terminal::Paint;

/// Parse a free-form field at the CLI boundary.
fn parse_field(s: &str) -> Result<FieldText, String> {
    s.parse().map_err(|e: InvalidFieldError| e.to_string())
}

/// Parse an `HH:MM` time at the CLI boundary.
fn parse_time(s: &str) -> Result<EventTime, String> {
    s.parse().map_err(|e: InvalidTimeError| e.to_string())
}

/// Command arguments for `incident report`.
#[derive(Debug, Parser)]
#[command(about = "Record a new incident")]
pub struct Report {
    /// The area where the incident occurred (e.g. a street name)
    #[arg(long, short, value_parser = parse_field)]
    area: Option<FieldText>,

    /// The type of incident (e.g. pothole, broken streetlight)
    #[arg(long, short, value_name = "TYPE", value_parser = parse_field)]
    kind: Option<FieldText>,

    /// The time the incident occurred (HH:MM, 24-hour clock)
    #[arg(long, short, value_parser = parse_time)]
    time: Option<EventTime>,
}

impl Report {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, path: &Path) -> anyhow::Result<()> {
        let mut store = Store::open(path)?;

        // Anything not supplied as a flag is prompted for, with the same
        // validation the flag parsers apply.
        let area = match self.area {
            Some(area) => area,
            None => prompt_field("Area where the incident occurred")?,
        };
        let kind = match self.kind {
            Some(kind) => kind,
            None => prompt_field("Type of incident")?,
        };
        let time = match self.time {
            Some(time) => time,
            None => prompt_time()?,
        };

        let appended = store.append(area, kind, time)?;

        if let Durability::MemoryOnly(e) = &appended.durability {
            println!(
                "{}",
                format!(
                    "Warning: could not write to {}: {e}. The incident is kept for this session \
                     only.",
                    store.path().display()
                )
                .warning()
            );
        }

        println!(
            "{}",
            format!("Incident recorded with ID {}", appended.id).success()
        );

        Ok(())
    }
}

fn prompt_field(prompt: &str) -> anyhow::Result<FieldText> {
    let raw: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| input.parse::<FieldText>().map(|_| ()))
        .interact_text()?;

    Ok(raw.parse::<FieldText>()?)
}

fn prompt_time() -> anyhow::Result<EventTime> {
    let raw: String = Input::new()
        .with_prompt("Time the incident occurred (HH:MM, 24-hour clock)")
        .validate_with(|input: &String| input.parse::<EventTime>().map(|_| ()))
        .interact_text()?;

    Ok(raw.parse::<EventTime>()?)
}
