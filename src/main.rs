use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Tabular reinforcement learning harness.
#[derive(Parser)]
#[command(name = "tabula", version, about)]
struct Args {
    /// Path to the run-configuration file (KEY=value lines)
    config: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    match tabula::runner::run(&args.config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tabula: {}", err);
            ExitCode::FAILURE
        }
    }
}
