//! Turn actions: the intents a player submits outside of decisions.
//!
//! Answers to pending decisions are a separate type,
//! [`Response`](crate::interaction::Response), because they are routed to
//! the interaction queue rather than the turn.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::CardId;

/// A turn action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the card at this hand position.
    PlayCard { hand_index: usize },
    /// Buy one card from the supply.
    BuyCard { card: CardId },
    /// Move every Treasure in hand to the play area at once.
    PlayAllTreasures,
    /// Leave the Action phase without playing a Treasure.
    EnterBuyPhase,
    /// Clean up and pass the turn.
    EndTurn,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlayCard { hand_index } => write!(f, "play card #{}", hand_index),
            Action::BuyCard { card } => write!(f, "buy {}", card),
            Action::PlayAllTreasures => f.write_str("play all treasures"),
            Action::EnterBuyPhase => f.write_str("enter buy phase"),
            Action::EndTurn => f.write_str("end turn"),
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number across the whole game.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
