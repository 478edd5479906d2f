//! Card categories.
//!
//! A card carries one or more categories. Most cards have exactly one;
//! Moat is both an Action and a Reaction.

use serde::{Deserialize, Serialize};

/// Card category (what the card *is*).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Produces coin when played.
    Treasure,
    /// Played during the Action phase for its effect.
    Action,
    /// Responds to other players' attacks (Moat).
    Reaction,
    /// Worth victory points at game end.
    Victory,
    /// Worth negative victory points.
    Curse,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Treasure,
        Category::Action,
        Category::Reaction,
        Category::Victory,
        Category::Curse,
    ];

    /// Categories that are played for their effect during the Action phase.
    #[must_use]
    pub const fn is_playable_action(self) -> bool {
        matches!(self, Category::Action | Category::Reaction)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Treasure => "Treasure",
            Category::Action => "Action",
            Category::Reaction => "Reaction",
            Category::Victory => "Victory",
            Category::Curse => "Curse",
        };
        f.write_str(name)
    }
}
