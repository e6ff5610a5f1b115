//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod output;

pub use commands::Commands;

/// skillrec - match declared skills against project requirements
#[derive(Parser, Debug)]
#[command(name = "skillrec", version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Silence all logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Explicit config file
    #[arg(long, global = true, env = "SKILLREC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
