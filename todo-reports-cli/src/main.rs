//! todo-reports CLI - write per-user task reports

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use todo_reports_core::config::ConfigOverrides;

mod commands;
mod output;

use commands::generate;

/// Fetch users and todos, then write one task report per user
#[derive(Parser)]
#[command(name = "todo-reports", version, about, long_about = None)]
struct Cli {
    /// Settings file (defaults to ./settings.json when present)
    #[arg(long, env = "TODO_REPORTS_CONFIG")]
    config: Option<PathBuf>,

    /// URL of the todos collection
    #[arg(long)]
    todos_url: Option<String>,

    /// URL of the users collection
    #[arg(long)]
    users_url: Option<String>,

    /// Directory the reports are written to
    #[arg(long, short)]
    output_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Fetch and render without writing any files
    #[arg(long)]
    dry_run: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error("An error occurred!");
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let overrides = ConfigOverrides {
        todos_url: cli.todos_url,
        users_url: cli.users_url,
        output_dir: cli.output_dir,
        timeout_secs: cli.timeout,
    };
    generate::run(cli.config.as_deref(), overrides, cli.dry_run)
}
