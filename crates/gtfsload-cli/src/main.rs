//! gtfsload - fixture and batch-plan generator for GTFS GraphQL load tests.

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gtfsload_core::plan::PlanMode;

mod commands;

/// Generates GraphQL load-test fixtures and batch plans for GTFS APIs
#[derive(Parser, Debug)]
#[command(name = "gtfsload")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one fixture document to stdout
    Emit {
        /// Fixture name (see `gtfsload list`)
        name: String,

        /// Pretty-print for inspection instead of the compact harness form
        #[arg(long)]
        pretty: bool,
    },
    /// List the builtin fixtures
    List {
        /// Also show each fixture's variable map
        #[arg(long)]
        variables: bool,
    },
    /// Write every fixture document into a directory
    Export {
        /// Directory receiving one <name>_graphql.json file per fixture
        #[arg(short, long, default_value = "fixtures", env = "GTFSLOAD_OUT_DIR")]
        out_dir: PathBuf,
    },
    /// Build the batch CSV test plan from a directory of feed archives
    Plan {
        /// How the harness should acquire each archive
        #[arg(long, value_enum, default_value = "upload")]
        mode: ModeArg,

        /// Directory scanned for feed archives (*.zip)
        #[arg(long, default_value = "fixtures/feeds", env = "GTFSLOAD_FEEDS_DIR")]
        feeds_dir: PathBuf,

        /// S3 bucket the fetch URLs point at
        #[arg(long, required_if_eq("mode", "fetch"))]
        bucket: Option<String>,

        /// Output CSV path, `-` for stdout
        #[arg(short, long, default_value = "s3-batch.csv")]
        out: PathBuf,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Plan acquisition mode as spelled on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Upload,
    Fetch,
}

impl From<ModeArg> for PlanMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Upload => PlanMode::Upload,
            ModeArg::Fetch => PlanMode::Fetch,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr: stdout carries fixture documents and CSV plans.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Emit { name, pretty } => commands::emit(&name, pretty),
        Command::List { variables } => commands::list(variables),
        Command::Export { out_dir } => commands::export(&out_dir),
        Command::Plan {
            mode,
            feeds_dir,
            bucket,
            out,
        } => commands::plan(mode.into(), &feeds_dir, bucket.as_deref(), &out),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "gtfsload", &mut io::stdout());
            Ok(())
        }
    }
}
