//! CLI definitions for taskline.
//!
//! This module defines the CLI structure using clap's derive macros. The
//! program has no subcommands; running it starts the interactive session.

use clap::Parser;
use std::path::PathBuf;

/// Interactive task list manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the task data file (overrides config)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off (default), 1/stdout, 2/stderr, or filename
    #[arg(short, long, default_value = "0")]
    pub log: String,
}
