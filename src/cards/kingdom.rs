//! Kingdom presets: the ten kingdom piles a game is played with.

use serde::{Deserialize, Serialize};

use super::definition::CardId;

/// A named set of ten kingdom cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kingdom {
    /// Lookup key (`"first_game"`).
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// The kingdom piles.
    pub cards: [CardId; 10],
}

/// Which kingdom preset to set up, by key.
///
/// Unknown keys fall back to the first preset rather than failing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KingdomChoice(pub String);

impl Default for KingdomChoice {
    fn default() -> Self {
        Self(PRESETS[0].key.to_string())
    }
}

impl KingdomChoice {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Resolve to a preset.
    #[must_use]
    pub fn kingdom(&self) -> &'static Kingdom {
        by_key(&self.0).unwrap_or(&PRESETS[0])
    }
}

pub static PRESETS: [Kingdom; 6] = [
    Kingdom {
        key: "first_game",
        name: "First Game",
        cards: [
            CardId::Cellar,
            CardId::Market,
            CardId::Merchant,
            CardId::Militia,
            CardId::Mine,
            CardId::Moat,
            CardId::Remodel,
            CardId::Smithy,
            CardId::Village,
            CardId::Workshop,
        ],
    },
    Kingdom {
        key: "size_distortion",
        name: "Size Distortion",
        cards: [
            CardId::Artisan,
            CardId::Bandit,
            CardId::Bureaucrat,
            CardId::Chapel,
            CardId::Festival,
            CardId::Gardens,
            CardId::Sentry,
            CardId::ThroneRoom,
            CardId::Witch,
            CardId::Workshop,
        ],
    },
    Kingdom {
        key: "deck_top",
        name: "Deck Top",
        cards: [
            CardId::Artisan,
            CardId::Bureaucrat,
            CardId::CouncilRoom,
            CardId::Festival,
            CardId::Harbinger,
            CardId::Laboratory,
            CardId::Moneylender,
            CardId::Sentry,
            CardId::Vassal,
            CardId::Village,
        ],
    },
    Kingdom {
        key: "sleight_of_hand",
        name: "Sleight of Hand",
        cards: [
            CardId::Cellar,
            CardId::CouncilRoom,
            CardId::Festival,
            CardId::Gardens,
            CardId::Library,
            CardId::Harbinger,
            CardId::Militia,
            CardId::Poacher,
            CardId::Smithy,
            CardId::ThroneRoom,
        ],
    },
    Kingdom {
        key: "improvements",
        name: "Improvements",
        cards: [
            CardId::Artisan,
            CardId::Cellar,
            CardId::Market,
            CardId::Merchant,
            CardId::Mine,
            CardId::Moat,
            CardId::Moneylender,
            CardId::Poacher,
            CardId::Remodel,
            CardId::Witch,
        ],
    },
    Kingdom {
        key: "silver_and_gold",
        name: "Silver & Gold",
        cards: [
            CardId::Bandit,
            CardId::Bureaucrat,
            CardId::Chapel,
            CardId::Harbinger,
            CardId::Laboratory,
            CardId::Merchant,
            CardId::Mine,
            CardId::Moneylender,
            CardId::ThroneRoom,
            CardId::Vassal,
        ],
    },
];

/// Find a preset by key.
#[must_use]
pub fn by_key(key: &str) -> Option<&'static Kingdom> {
    PRESETS.iter().find(|k| k.key == key)
}
