use std::path::PathBuf;

mod list;
mod report;
mod status;
mod terminal;

use clap::ArgAction;
use incidentlog::storage::DEFAULT_JOURNAL;
use list::List;
use report::Report;
use status::Status;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the incident journal file
    #[arg(short, long, default_value = DEFAULT_JOURNAL, global = true)]
    store: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Status(Status::default()))
            .run(self.store)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Show the journal status (default)
    Status(Status),

    /// Record a new incident
    Report(Report),

    /// List incidents, optionally filtered by area or type
    List(List),
}

impl Command {
    fn run(self, store: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Status(command) => command.run(&store)?,
            Self::Report(command) => command.run(&store)?,
            Self::List(command) => command.run(&store)?,
        }
        Ok(())
    }
}
