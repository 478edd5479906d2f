//! Players: identifiers, per-player storage, and each player's zones.
//!
//! ## PlayerId
//!
//! Type-safe player index. Player indices are stable for the whole game.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, indexable by
//! `PlayerId`.
//!
//! ## Player
//!
//! Four zones (deck, hand, discard, play area) plus the per-turn counters.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::{CardId, Category};
use crate::zones::Zone;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player after this one, wrapping at `player_count`.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use wickinion::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, mut factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's data, or `None` for an index outside the game.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a player's data mutably, or `None` for an index outside the game.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A player's cards and per-turn counters.
///
/// The deck is an ordered stack whose top is the end of the `Vec`.
/// Hand, discard and play area keep insertion order for display only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub deck: Vec<CardId>,
    pub hand: Vec<CardId>,
    pub discard: Vec<CardId>,
    pub play_area: Vec<CardId>,
    /// Remaining actions this turn.
    pub actions: u32,
    /// Remaining buys this turn.
    pub buys: u32,
    /// Coin accumulated this turn.
    pub coin: u32,
}

impl Player {
    /// Create a player with empty zones and fresh turn counters.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            deck: Vec::new(),
            hand: Vec::new(),
            discard: Vec::new(),
            play_area: Vec::new(),
            actions: 1,
            buys: 1,
            coin: 0,
        }
    }

    /// Borrow a zone.
    #[must_use]
    pub fn zone(&self, zone: Zone) -> &Vec<CardId> {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Hand => &self.hand,
            Zone::Discard => &self.discard,
            Zone::PlayArea => &self.play_area,
        }
    }

    /// Borrow a zone mutably.
    pub fn zone_mut(&mut self, zone: Zone) -> &mut Vec<CardId> {
        match zone {
            Zone::Deck => &mut self.deck,
            Zone::Hand => &mut self.hand,
            Zone::Discard => &mut self.discard,
            Zone::PlayArea => &mut self.play_area,
        }
    }

    /// Reset actions/buys/coin for a new turn.
    pub fn reset_counters(&mut self) {
        self.actions = 1;
        self.buys = 1;
        self.coin = 0;
    }

    /// Every card the player owns, across all four zones.
    pub fn all_cards(&self) -> impl Iterator<Item = CardId> + '_ {
        Zone::ALL.into_iter().flat_map(move |z| self.zone(z).iter().copied())
    }

    /// Total number of cards the player owns.
    #[must_use]
    pub fn card_count(&self) -> usize {
        Zone::ALL.iter().map(|z| self.zone(*z).len()).sum()
    }

    /// Does the hand contain this card?
    #[must_use]
    pub fn has_in_hand(&self, card: CardId) -> bool {
        self.hand.contains(&card)
    }

    /// Does the hand contain any card of this category?
    #[must_use]
    pub fn has_category_in_hand(&self, category: Category) -> bool {
        self.hand.iter().any(|c| c.def().is(category))
    }

    /// Holds a Moat, and so ignores attacks.
    #[must_use]
    pub fn is_defended(&self) -> bool {
        self.has_in_hand(CardId::Moat)
    }
}
