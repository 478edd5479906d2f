//! Error types for the game engine and its replication layer.
//!
//! Every engine operation validates before it mutates, so an `Err` always
//! means "intent ignored, state unchanged". Callers decide whether to show a
//! transient notice (local play) or log and drop (authority).

use thiserror::Error;

use crate::cards::CardId;
use crate::core::{PlayerId, TurnPhase};
use crate::interaction::{CardFilter, InteractionId};
use crate::net::PeerId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    // === Illegal intents ===
    #[error("{player} acted out of turn (current: {current})")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    #[error("cannot do that during the {0:?} phase")]
    WrongPhase(TurnPhase),

    #[error("no actions remaining")]
    NoActions,

    #[error("no buys remaining")]
    NoBuys,

    #[error("insufficient coin: need {need}, have {have}")]
    InsufficientCoin { need: u32, have: u32 },

    #[error("supply pile is empty: {0}")]
    PileEmpty(CardId),

    #[error("card is not in the supply: {0}")]
    NotInSupply(CardId),

    #[error("unknown card: {0}")]
    UnknownCard(String),

    #[error("no card at hand index {0}")]
    InvalidHandIndex(usize),

    #[error("{0} cannot be played")]
    NotPlayable(CardId),

    #[error("no treasures in hand")]
    NoTreasures,

    #[error("a decision is pending")]
    InteractionPending,

    #[error("the game is over")]
    GameOver,

    // === Interaction resolution ===
    #[error("no decision is pending")]
    NoInteraction,

    #[error("stale or unknown interaction {0}")]
    StaleInteraction(InteractionId),

    #[error("{0} is not the player making this decision")]
    NotTarget(PlayerId),

    #[error("selected {got} cards, expected {min}..={}", .max.map_or_else(|| "any".to_string(), |m| m.to_string()))]
    SelectionCount {
        min: usize,
        max: Option<usize>,
        got: usize,
    },

    #[error("selection index {0} is out of range")]
    SelectionOutOfRange(usize),

    #[error("selection index {0} chosen twice")]
    DuplicateSelection(usize),

    #[error("{card} does not satisfy: {filter}")]
    FilterRejected { card: CardId, filter: CardFilter },

    #[error("response does not match the pending decision")]
    WrongResponse,

    // === Replication ===
    #[error("codec error: {0}")]
    Codec(String),

    #[error("unknown peer: {0}")]
    UnknownPeer(PeerId),

    #[error("peer disconnected: {0}")]
    Disconnected(PeerId),

    #[error("no seat has been assigned yet")]
    NotSeated,

    #[error("every seat is taken")]
    TableFull,
}

impl From<bincode::Error> for GameError {
    fn from(err: bincode::Error) -> Self {
        GameError::Codec(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
