//! Command handlers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{error, info};
use vermeer_agent::Agent;
use vermeer_client::{Platform, RedditClient};
use vermeer_core::{AgentConfig, Pacing, Settings};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Authenticate and print the account identity.
pub async fn run_whoami() -> CliResult {
    let settings = Settings::from_env()?;
    let client = RedditClient::connect(&settings).await?;
    let me = client.me().await?;
    println!("Authenticated as: u/{}", me);
    Ok(())
}

async fn build_agent() -> Result<(Agent<RedditClient, StdRng>, Pacing), Box<dyn std::error::Error>>
{
    let settings = Settings::from_env()?;
    let config = AgentConfig::load()?;
    let pacing = config.pacing;
    let client = RedditClient::connect(&settings).await?;
    let agent = Agent::new(client, config, &settings, StdRng::from_entropy());
    Ok((agent, pacing))
}

/// Run exactly one tick and print its status token.
pub async fn run_oneshot() -> CliResult {
    let (mut agent, _) = build_agent().await?;
    let outcome = agent.tick().await?;
    println!("{}", outcome);
    Ok(())
}

/// Sleep for `duration`, returning true if interrupted.
async fn sleep_or_interrupt(duration: Duration) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(duration) => false,
        _ = tokio::signal::ctrl_c() => true,
    }
}

/// Run ticks indefinitely until interrupted.
///
/// A failed tick cools the loop down instead of crashing it; only startup
/// (missing credentials, failed authentication) can end loop mode with an
/// error.
pub async fn run_loop() -> CliResult {
    let (mut agent, pacing) = build_agent().await?;
    info!("Loop mode. Ctrl+C to stop.");

    loop {
        match agent.tick().await {
            Ok(outcome) => println!("{}", outcome),
            Err(e) => {
                error!(error = %e, "Tick failed, cooling down");
                let cooldown = rand::thread_rng()
                    .gen_range(pacing.cooldown_min_s..=pacing.cooldown_max_s);
                if sleep_or_interrupt(Duration::from_secs(cooldown)).await {
                    break;
                }
                continue;
            }
        }

        let nap = rand::thread_rng().gen_range(pacing.loop_nap_min_s..=pacing.loop_nap_max_s);
        info!("Sleeping ~{} min", nap / 60);
        if sleep_or_interrupt(Duration::from_secs(nap)).await {
            break;
        }
    }

    info!("Interrupted, exiting cleanly");
    Ok(())
}
