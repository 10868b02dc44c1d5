//! Game configuration.
//!
//! Timing, dice and task-outcome ranges are configured once per session.
//! Defaults match the classic board; a JSON file can override any subset of
//! fields:
//!
//! ```
//! use path_duel::core::GameConfig;
//!
//! let config = GameConfig::from_json_str(r#"{ "tick_interval_ms": 100 }"#).unwrap();
//! assert_eq!(config.tick_interval_ms, 100);
//! assert_eq!(config.die_faces, 6);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::Language;

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Delay between two animation steps.
    pub tick_interval_ms: u64,

    /// Delay before entering `task`, a relocation, or `win`.
    pub transition_delay_ms: u64,

    /// How long the die spins before its value is revealed.
    pub roll_duration_ms: u64,

    /// Number of die faces (values `1..=die_faces`).
    pub die_faces: u8,

    /// Reward range for a completed star/trap task (inclusive).
    pub reward_min: u8,
    pub reward_max: u8,

    /// Penalty range for a failed star/trap task (inclusive).
    pub penalty_min: u8,
    pub penalty_max: u8,

    /// Language used for fallback content and at startup.
    pub default_language: Language,

    /// Fixed seed for deterministic sessions. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 250,
            transition_delay_ms: 600,
            roll_duration_ms: 800,
            die_faces: 6,
            reward_min: 0,
            reward_max: 3,
            penalty_min: 3,
            penalty_max: 6,
            default_language: Language::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.die_faces == 0 {
            return Err(ConfigError::Invalid("die_faces must be at least 1".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick_interval_ms must be positive".into()));
        }
        if self.reward_min > self.reward_max {
            return Err(ConfigError::Invalid(format!(
                "reward range {}..={} is empty",
                self.reward_min, self.reward_max
            )));
        }
        if self.penalty_min > self.penalty_max {
            return Err(ConfigError::Invalid(format!(
                "penalty range {}..={} is empty",
                self.penalty_min, self.penalty_max
            )));
        }
        Ok(())
    }

    /// Set the animation tick interval.
    #[must_use]
    pub fn with_tick_interval(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Set the delay used before every deferred transition.
    #[must_use]
    pub fn with_transition_delay(mut self, ms: u64) -> Self {
        self.transition_delay_ms = ms;
        self
    }

    /// Set the dice spin duration.
    #[must_use]
    pub fn with_roll_duration(mut self, ms: u64) -> Self {
        self.roll_duration_ms = ms;
        self
    }

    /// Set the number of die faces.
    #[must_use]
    pub fn with_die_faces(mut self, faces: u8) -> Self {
        self.die_faces = faces;
        self
    }

    /// Fix the session seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the default language.
    #[must_use]
    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }
}
