//! Match configuration.
//!
//! A `MatchConfig` is everything that varies from one match to the next. It
//! is passed explicitly to the turn engine; there is no process-wide state.

use serde::{Deserialize, Serialize};

use super::player::PlayerMap;
use super::rng::GameRng;

/// Configuration of a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seed for shuffles and the starting player.
    /// `None` draws a seed from the operating system.
    pub seed: Option<u64>,

    /// Display name of each player, sent to both players at start.
    pub player_names: PlayerMap<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            player_names: PlayerMap::from_array(["Ada".to_string(), "Charles".to_string()]),
        }
    }
}

impl MatchConfig {
    /// Create a new config with default names and an OS seed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed seed, making the match reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the players' display names.
    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = PlayerMap::from_array([first.into(), second.into()]);
        self
    }

    /// Create the match RNG described by this config.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.player_names[PlayerId::PLAYER_1], "Ada");
        assert_eq!(config.player_names[PlayerId::PLAYER_2], "Charles");
    }

    #[test]
    fn test_builder_pattern() {
        let config = MatchConfig::new().with_seed(123).with_player_names("Alice", "Bob");

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.player_names[PlayerId::PLAYER_2], "Bob");
        assert_eq!(config.rng().seed(), 123);
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
