//! Configuration structures for the caption pipeline.
//!
//! This module provides TOML-based configuration for the Gemini client and
//! pipeline policies. The configuration system supports:
//! - Bundled defaults (include_str! from reelsmith.toml)
//! - User overrides (./reelsmith.toml or ~/.config/reelsmith/reelsmith.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use reelsmith_error::{ConfigError, ReelsmithError, ReelsmithResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    600
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_max_wait_secs() -> u64 {
    300
}

fn default_max_attempts() -> usize {
    4
}

fn default_initial_backoff_ms() -> u64 {
    500
}

fn default_max_backoff_secs() -> u64 {
    8
}

/// Gemini client configuration.
///
/// ```toml
/// [gemini]
/// model = "gemini-2.5-flash"
/// base_url = "https://generativelanguage.googleapis.com"
/// request_timeout_secs = 600
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// Model identifier used for generation requests.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL for the Gemini REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Per-request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Upload polling configuration.
///
/// ```toml
/// [upload]
/// poll_interval_ms = 1000
/// max_wait_secs = 300
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UploadConfig {
    /// Delay between processing-state polls in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Total time to wait for a terminal state, in seconds.
    #[serde(default = "default_max_wait_secs")]
    pub max_wait_secs: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            max_wait_secs: default_max_wait_secs(),
        }
    }
}

impl UploadConfig {
    /// Poll interval as a [`Duration`].
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Maximum wait as a [`Duration`].
    pub fn max_wait(&self) -> Duration {
        Duration::from_secs(self.max_wait_secs)
    }
}

/// Retry policy configuration for malformed model responses.
///
/// ```toml
/// [retry]
/// max_attempts = 4
/// initial_backoff_ms = 500
/// max_backoff_secs = 8
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Total generation attempts, counting the first.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    /// Backoff before the first re-attempt, in milliseconds.
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Upper bound on backoff delay, in seconds.
    #[serde(default = "default_max_backoff_secs")]
    pub max_backoff_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_secs: default_max_backoff_secs(),
        }
    }
}

impl RetryConfig {
    /// Initial backoff as a [`Duration`].
    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }

    /// Backoff ceiling as a [`Duration`].
    pub fn max_backoff(&self) -> Duration {
        Duration::from_secs(self.max_backoff_secs)
    }
}

/// Top-level Reelsmith configuration.
///
/// Loads settings from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from reelsmith.toml)
/// 2. User override (~/.config/reelsmith/reelsmith.toml, then ./reelsmith.toml)
///
/// # Example
///
/// ```no_run
/// use reelsmith_core::ReelsmithConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ReelsmithConfig::load()?;
/// println!("model: {}", config.gemini.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct ReelsmithConfig {
    /// Gemini client settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Upload polling settings.
    #[serde(default)]
    pub upload: UploadConfig,

    /// Generation retry settings.
    #[serde(default)]
    pub retry: RetryConfig,
}

impl ReelsmithConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ReelsmithResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ReelsmithError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ReelsmithError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (reelsmith.toml shipped with library)
    /// 2. User config in home directory (~/.config/reelsmith/reelsmith.toml)
    /// 3. User config in current directory (./reelsmith.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    #[instrument]
    pub fn load() -> ReelsmithResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../reelsmith.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/reelsmith/reelsmith.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("reelsmith").required(false));

        // Build and deserialize
        builder
            .build()
            .map_err(|e| {
                ReelsmithError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ReelsmithError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_match_struct_defaults() {
        let bundled: ReelsmithConfig =
            toml::from_str(include_str!("../../../reelsmith.toml")).unwrap();
        assert_eq!(bundled, ReelsmithConfig::default());
    }

    #[test]
    fn empty_config_fills_every_section() {
        let config: ReelsmithConfig = toml::from_str("").unwrap();
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.upload.poll_interval(), Duration::from_millis(1000));
        assert_eq!(config.retry.max_attempts, 4);
    }

    #[test]
    fn partial_section_keeps_remaining_defaults() {
        let config: ReelsmithConfig = toml::from_str(
            r#"
            [upload]
            max_wait_secs = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.upload.max_wait(), Duration::from_secs(10));
        assert_eq!(config.upload.poll_interval_ms, 1000);
    }
}
