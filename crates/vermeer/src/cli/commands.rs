//! CLI command definitions.

use clap::{Parser, Subcommand};

/// Vermeer - rate-limited Reddit posting agent
#[derive(Parser, Debug)]
#[command(name = "vermeer")]
#[command(about = "Rate-limited Reddit posting agent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute; defaults to a single tick
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate and print the account identity
    Whoami,

    /// Run exactly one tick and exit
    Oneshot,

    /// Run ticks indefinitely with inter-tick sleeps until interrupted
    Loop,
}
