//! Game and replication configuration.
//!
//! Both structs carry sensible defaults and `with_*` builders:
//!
//! ```
//! use wickinion::core::GameConfig;
//!
//! let config = GameConfig::default()
//!     .with_player_count(3)
//!     .with_kingdom("deck_top")
//!     .with_seed(7);
//!
//! assert_eq!(config.player_count, 3);
//! assert_eq!(config.kingdom.kingdom().name, "Deck Top");
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::cards::KingdomChoice;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 6;

/// Setup parameters for a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-6).
    pub player_count: usize,

    /// Kingdom preset to lay out.
    pub kingdom: KingdomChoice,

    /// Seed for every shuffle in the game.
    pub seed: u64,

    /// Cards drawn at setup and at the end of each turn.
    pub hand_size: usize,

    /// Single-screen play: any player may answer any pending decision.
    pub hot_seat: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            kingdom: KingdomChoice::default(),
            seed: 42,
            hand_size: 5,
            hot_seat: false,
        }
    }
}

impl GameConfig {
    pub fn with_player_count(mut self, count: usize) -> Self {
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&count),
            "Player count must be {}-{}",
            MIN_PLAYERS,
            MAX_PLAYERS
        );
        self.player_count = count;
        self
    }

    pub fn with_kingdom(mut self, key: impl Into<String>) -> Self {
        self.kingdom = KingdomChoice::new(key);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    pub fn hot_seat(mut self, enabled: bool) -> Self {
        self.hot_seat = enabled;
        self
    }
}

/// Authority-side replication timing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicationConfig {
    /// Coalescing window before a snapshot is broadcast.
    /// Every new mutation restarts the window.
    pub broadcast_debounce: Duration,

    /// Pause between end-of-turn cleanup and handing the turn over.
    /// Presentation pacing only; zero is valid.
    pub end_turn_delay: Duration,
}

impl Default for ReplicationConfig {
    fn default() -> Self {
        Self {
            broadcast_debounce: Duration::from_millis(50),
            end_turn_delay: Duration::from_millis(500),
        }
    }
}

impl ReplicationConfig {
    /// No debounce and no end-of-turn pause.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            broadcast_debounce: Duration::ZERO,
            end_turn_delay: Duration::ZERO,
        }
    }

    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.broadcast_debounce = window;
        self
    }

    pub fn with_end_turn_delay(mut self, delay: Duration) -> Self {
        self.end_turn_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.seed, 42);
        assert!(!config.hot_seat);
        assert_eq!(config.kingdom.kingdom().key, "first_game");
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_player_count(4)
            .with_seed(123)
            .with_hand_size(6)
            .hot_seat(true);

        assert_eq!(config.player_count, 4);
        assert_eq!(config.seed, 123);
        assert_eq!(config.hand_size, 6);
        assert!(config.hot_seat);
    }

    #[test]
    #[should_panic(expected = "Player count must be 2-6")]
    fn test_player_count_bounds() {
        let _ = GameConfig::default().with_player_count(7);
    }

    #[test]
    fn test_replication_defaults() {
        let config = ReplicationConfig::default();
        assert_eq!(config.broadcast_debounce, Duration::from_millis(50));
        assert_eq!(config.end_turn_delay, Duration::from_millis(500));

        let immediate = ReplicationConfig::immediate();
        assert!(immediate.broadcast_debounce.is_zero());
        assert!(immediate.end_turn_delay.is_zero());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_kingdom("improvements");
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);

        let replication = ReplicationConfig::default().with_debounce(Duration::from_millis(10));
        let json = serde_json::to_string(&replication).unwrap();
        let deserialized: ReplicationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(replication, deserialized);
    }
}
