//! Taskline
//!
//! An interactive command-line task list manager. Tasks live in memory
//! for the session and persist to a JSON file between runs: loaded once
//! at startup, written back on the save-and-exit menu option.

use std::fs::OpenOptions;
use std::io::{self, ErrorKind};
use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use taskline::cli::Cli;
use taskline::config::Config;
use taskline::error::TaskError;
use taskline::persist;
use taskline::session;
use taskline::store::TaskStore;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    // Load configuration, then apply CLI overrides
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };
    if let Some(data) = &cli.data {
        config.data_path = data.clone();
    }
    config.ensure_data_dir()?;

    info!(data_path = %config.data_path.display(), "starting taskline");

    // A missing or unopenable file means a first run; a file that fails
    // to decode is discarded rather than half-loaded. Neither halts.
    let tasks = match persist::load(&config.data_path) {
        Ok(tasks) => tasks,
        Err(TaskError::Persistence(e)) => {
            if e.kind() != ErrorKind::NotFound {
                warn!("could not open data file: {e}");
            }
            println!("No existing tasks found");
            Vec::new()
        }
        Err(e) => {
            warn!("could not decode data file: {e}");
            println!("Error loading tasks: {e}");
            Vec::new()
        }
    };

    let mut store = TaskStore::from_tasks(tasks);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(
        &mut store,
        &config.data_path,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )?;

    Ok(())
}
