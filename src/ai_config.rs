//! Heuristic AI configuration.

use crate::games::ultimate::{HeuristicAi, Weights};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Search depth and evaluation weights for the heuristic AI.
///
/// Every field is optional in TOML and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AiConfig {
    /// Plies searched, counting the candidate move itself.
    #[serde(default = "default_depth")]
    depth: u8,

    /// Multiplier for the cell position table.
    #[serde(default = "default_position")]
    position: i32,

    /// Per local two-in-a-row gained or denied.
    #[serde(default = "default_local_threat")]
    local_threat: i32,

    /// Winning a local board.
    #[serde(default = "default_local_win")]
    local_win: i32,

    /// Per global two-in-a-row gained or denied.
    #[serde(default = "default_global_threat")]
    global_threat: i32,

    /// Winning the game.
    #[serde(default = "default_global_win")]
    global_win: i32,

    /// Sending the opponent to a completed board.
    #[serde(default = "default_open_play_penalty")]
    open_play_penalty: i32,
}

fn default_depth() -> u8 {
    2
}

fn default_position() -> i32 {
    Weights::default().position
}

fn default_local_threat() -> i32 {
    Weights::default().local_threat
}

fn default_local_win() -> i32 {
    Weights::default().local_win
}

fn default_global_threat() -> i32 {
    Weights::default().global_threat
}

fn default_global_win() -> i32 {
    Weights::default().global_win
}

fn default_open_play_penalty() -> i32 {
    Weights::default().open_play_penalty
}

impl AiConfig {
    /// Creates a configuration from a depth and weights.
    #[instrument]
    pub fn new(depth: u8, weights: Weights) -> Self {
        Self {
            depth,
            position: weights.position,
            local_threat: weights.local_threat,
            local_win: weights.local_win,
            global_threat: weights.global_threat,
            global_win: weights.global_win,
            open_play_penalty: weights.open_play_penalty,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading AI config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(depth = config.depth, "AI config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.depth == 0 {
            return Err(ConfigError::new("Search depth must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Evaluation weights.
    pub fn weights(&self) -> Weights {
        Weights {
            position: self.position,
            local_threat: self.local_threat,
            local_win: self.local_win,
            global_threat: self.global_threat,
            global_win: self.global_win,
            open_play_penalty: self.open_play_penalty,
        }
    }

    /// Builds the configured AI.
    pub fn to_ai(&self) -> HeuristicAi {
        HeuristicAi::new(self.depth, self.weights())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::new(default_depth(), Weights::default())
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AiConfig::from_toml("").unwrap();
        assert_eq!(config, AiConfig::default());
        assert_eq!(config.to_ai(), HeuristicAi::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = AiConfig::from_toml("depth = 1\nlocal_win = 40\n").unwrap();
        assert_eq!(*config.depth(), 1);
        assert_eq!(config.weights().local_win, 40);
        assert_eq!(config.weights().global_win, Weights::default().global_win);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let err = AiConfig::from_toml("depth = 0").unwrap_err();
        assert!(err.message.contains("depth"));
    }

    #[test]
    fn test_extreme_weights_still_search() {
        let config = AiConfig::from_toml("depth = 1\nposition = 2147483647\n").unwrap();
        let state = crate::games::ultimate::GameState::new();
        let mv = config.to_ai().best_move(&state).unwrap();
        assert!(state.legal_moves().contains(&mv));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(AiConfig::from_toml("depth = \"deep\"").is_err());
    }
}
