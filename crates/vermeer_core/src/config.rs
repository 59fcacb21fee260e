//! Agent configuration loaded from TOML.
//!
//! Configuration sources merge with user values taking precedence:
//! 1. Bundled defaults (`include_str!` from vermeer.toml)
//! 2. User override in the home directory (`~/.config/vermeer/vermeer.toml`)
//! 3. User override in the current directory (`./vermeer.toml`)

use crate::{Caps, QuietHours, WindowBounds};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use vermeer_error::{ConfigError, VermeerError, VermeerResult};

/// Static content pools for post titles, long-form bodies, and replies.
///
/// These are read-only inputs to content selection, not mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPools {
    /// Short greeting phrases used as post titles
    pub titles: Vec<String>,
    /// Decorative symbols optionally suffixed to a title
    pub flourishes: Vec<String>,
    /// Long-form greeting bodies
    pub long_greetings: Vec<String>,
    /// Short reply phrases for mention engagement
    pub replies: Vec<String>,
}

/// Anti-repetition recency windows, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecencyConfig {
    /// Days an image stays excluded after use
    pub image_days: i64,
    /// Days a long greeting or link stays excluded after use
    pub text_days: i64,
}

impl Default for RecencyConfig {
    fn default() -> Self {
        Self {
            image_days: 14,
            text_days: 7,
        }
    }
}

/// Mention engagement tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngagementConfig {
    /// Maximum mentions fetched per tick
    pub fetch_limit: u32,
    /// Probability of upvoting (vs replying to) a mention
    pub upvote_probability: f64,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            fetch_limit: 25,
            upvote_probability: 0.75,
        }
    }
}

/// Sleep ranges for pacing, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    /// Delay after a successful post, minimum
    pub post_delay_min_s: u64,
    /// Delay after a successful post, maximum
    pub post_delay_max_s: u64,
    /// Inter-tick nap in loop mode, minimum
    pub loop_nap_min_s: u64,
    /// Inter-tick nap in loop mode, maximum
    pub loop_nap_max_s: u64,
    /// Cool-down after a failed tick, minimum
    pub cooldown_min_s: u64,
    /// Cool-down after a failed tick, maximum
    pub cooldown_max_s: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            post_delay_min_s: 8,
            post_delay_max_s: 25,
            loop_nap_min_s: 25 * 60,
            loop_nap_max_s: 55 * 60,
            cooldown_min_s: 60,
            cooldown_max_s: 120,
        }
    }
}

/// Top-level agent configuration.
///
/// # Example
///
/// ```no_run
/// use vermeer_core::AgentConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AgentConfig::load()?;
/// println!("daily cap: {}", config.caps.posts_per_day);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Posting ceilings
    #[serde(default)]
    pub caps: Caps,
    /// Quiet-hour range
    #[serde(default)]
    pub quiet: QuietHours,
    /// Posting window boundaries
    #[serde(default)]
    pub windows: WindowBounds,
    /// Static content pools
    pub pools: ContentPools,
    /// Anti-repetition windows
    #[serde(default)]
    pub recency: RecencyConfig,
    /// Engagement tuning
    #[serde(default)]
    pub engagement: EngagementConfig,
    /// Sleep ranges
    #[serde(default)]
    pub pacing: Pacing,
}

impl AgentConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> VermeerResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                VermeerError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VermeerError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> VermeerResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../vermeer.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/vermeer/vermeer.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("vermeer").required(false));

        builder
            .build()
            .map_err(|e| {
                VermeerError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VermeerError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
