//! Application configuration loaded from TOML.

use crate::games::tictactoe::MatchSettings;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "TICTACTOE_CONFIG";

/// Pauses inserted by the presentation layer between messages.
///
/// These are cosmetic: the engine has already advanced by the time they run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Hold on the "are you ready" message before round 1.
    ready_ms: u64,
    /// Delay before the board is revealed after the welcome message.
    reveal_ms: u64,
    /// Hold on a round winner message.
    round_win_ms: u64,
    /// Hold on a tie message.
    tie_ms: u64,
    /// Hold on the match winner message before returning to the menu.
    match_over_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            ready_ms: 4000,
            reveal_ms: 750,
            round_win_ms: 4250,
            tie_ms: 4000,
            match_over_ms: 5000,
        }
    }
}

impl PacingConfig {
    /// No pauses at all.
    pub fn instant() -> Self {
        Self {
            ready_ms: 0,
            reveal_ms: 0,
            round_win_ms: 0,
            tie_ms: 0,
            match_over_ms: 0,
        }
    }

    /// Hold on the welcome message.
    pub fn ready(&self) -> Duration {
        Duration::from_millis(self.ready_ms)
    }

    /// Delay before the board appears.
    pub fn reveal(&self) -> Duration {
        Duration::from_millis(self.reveal_ms)
    }

    /// Hold on a round winner message.
    pub fn round_win(&self) -> Duration {
        Duration::from_millis(self.round_win_ms)
    }

    /// Hold on a tie message.
    pub fn tie(&self) -> Duration {
        Duration::from_millis(self.tie_ms)
    }

    /// Hold on the match winner message.
    pub fn match_over(&self) -> Duration {
        Duration::from_millis(self.match_over_ms)
    }
}

/// Complete application configuration.
///
/// ```toml
/// [match]
/// winning_score = 3
/// opponent_name = "Maynard"
/// capitalize_names = true
///
/// [pacing]
/// round_win_ms = 4250
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Match rules.
    #[serde(rename = "match")]
    rules: MatchSettings,

    /// Presentation pacing.
    pacing: PacingConfig,
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            winning_score = *config.rules.winning_score(),
            opponent = %config.rules.opponent_name(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot reject on its own.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if *self.rules.winning_score() == 0 {
            return Err(ConfigError::new("winning_score must be at least 1"));
        }
        if self.rules.opponent_name().trim().is_empty() {
            return Err(ConfigError::new("opponent_name must not be empty"));
        }
        Ok(())
    }

    /// Replaces the match rules.
    pub fn with_rules(mut self, rules: MatchSettings) -> Self {
        self.rules = rules;
        self
    }

    /// Replaces the pacing.
    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
