//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - installs the log subscriber
//! - loads `.env` and parses CLI arguments
//! - runs the report pipeline
//! - prints the report

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::cli::{Cli, INPUT_ENV};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `rstats` binary.
pub fn run() -> Result<(), AppError> {
    init_tracing()?;

    // A missing `.env` is fine; only RETURN_STATS_CSV is read from it.
    dotenvy::dotenv().ok();
    let env_input = std::env::var_os(INPUT_ENV).map(PathBuf::from);

    let config = Cli::parse().into_config(env_input);
    debug!(?config, "resolved configuration");

    let run = pipeline::run_report(&config)?;
    println!("{}", crate::report::format_report(&run.report));

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default).
fn init_tracing() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::new(4, format!("Failed to install log subscriber: {e}")))
}
