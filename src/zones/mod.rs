//! Player zones and the shuffle/draw primitive.
//!
//! ## Key Types
//!
//! - `Zone`: Names one of a player's four card zones
//! - `pile::draw`: Draw with reshuffle-on-empty
//! - `pile::shuffle`: Fisher-Yates over the game RNG

pub mod pile;

pub use pile::{draw, shuffle, DrawOutcome};

use serde::{Deserialize, Serialize};

/// One of a player's card zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Ordered draw pile; top is the end.
    Deck,
    /// Cards in hand.
    Hand,
    /// Discard pile.
    Discard,
    /// Cards played this turn.
    PlayArea,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Deck, Zone::Hand, Zone::Discard, Zone::PlayArea];
}
