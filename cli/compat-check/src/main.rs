//! compat-check — plan upgrade/downgrade read-compatibility checks between
//! releases listed in a compatibility table.

mod commands;
mod config;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use compat_matrix::ReportOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "compat-check", version, about = "Version read-compatibility check planner")]
struct Cli {
    /// Compatibility table (default: nearest rpc_compat.json / rpc_compat.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one check per (reader, writer) pair (default)
    Plan {
        /// Print placeholder download lines for every version first
        #[arg(long)]
        fetch: bool,
        /// Prefix joined with the reader version to form the binary path
        #[arg(long, default_value = "./redpanda-")]
        binary_prefix: String,
        /// Directory holding one corpus per version
        #[arg(long, default_value = "corpus")]
        corpus_dir: String,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Show the compatibility matrix as a grid
    Matrix {
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Validate the table and summarize it
    Validate,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only the plan.
/// `RUST_LOG` overrides the verbosity flag; `COMPAT_LOG_FORMAT=json` switches
/// to JSON lines.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("compat_check={level},compat_matrix={level}").into());
    let json = std::env::var("COMPAT_LOG_FORMAT").is_ok_and(|f| f == "json");

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let table_path = config::resolve_table_path(cli.config.as_deref(), &cwd)?;
    tracing::info!(path = %table_path.display(), "using compatibility table");

    match cli.command {
        None => commands::plan::run(&table_path, &ReportOptions::default(), false, None),

        Some(Commands::Plan {
            fetch,
            binary_prefix,
            corpus_dir,
            format,
        }) => {
            let opts = ReportOptions {
                binary_prefix,
                corpus_dir,
            };
            commands::plan::run(&table_path, &opts, fetch, format.as_deref())
        }

        Some(Commands::Matrix { format }) => commands::matrix::run(&table_path, format.as_deref()),

        Some(Commands::Validate) => commands::validate::run(&table_path),
    }
}
