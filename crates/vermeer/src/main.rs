//! Vermeer CLI binary.
//!
//! This binary provides command-line access to the posting agent:
//! - Verify credentials (`whoami`)
//! - Run a single tick (`oneshot`, the default)
//! - Run ticks indefinitely (`loop`)

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{run_loop, run_oneshot, run_whoami, Cli, Commands};

    // Load .env before settings are read
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command; no subcommand means one tick
    match cli.command.unwrap_or(Commands::Oneshot) {
        Commands::Whoami => run_whoami().await?,
        Commands::Oneshot => run_oneshot().await?,
        Commands::Loop => run_loop().await?,
    }

    Ok(())
}
