//! Game state: the authoritative board and its replicated snapshot.
//!
//! ## GameState
//!
//! Everything the authority owns:
//! - Players and their zones
//! - Supply and Trash
//! - Turn number, current player, phase
//! - The textual game log
//! - The interaction queue (with decisions)
//!
//! ## Snapshot
//!
//! The replicated projection of `GameState`. Identical except that the
//! interaction queue is reduced to [`InteractionView`]s. Participants
//! replace their mirror with a snapshot wholesale; there is no merge.
//!
//! The RNG and the Throne Room multiplier live in
//! [`Game`](crate::rules::Game), not here: neither is part of the board.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{CardId, Kingdom};
use crate::error::{GameError, Result};
use crate::interaction::{InteractionQueue, InteractionView};
use crate::zones::{self, Zone};

/// Cards in each starting deck.
pub const STARTING_DECK: [(CardId, usize); 2] = [(CardId::Copper, 7), (CardId::Estate, 3)];

/// The piles whose exhaustion alone ends the game.
pub const VICTORY_PILES: [CardId; 3] = [CardId::Province, CardId::Duchy, CardId::Estate];

/// Phase within a player's turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    #[default]
    Action,
    Buy,
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnPhase::Action => f.write_str("Action"),
            TurnPhase::Buy => f.write_str("Buy"),
        }
    }
}

/// Remaining count per supply pile.
///
/// A card with no entry is not in this game's supply. A missing victory
/// pile still ends the game like an empty one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supply {
    piles: OrdMap<CardId, u32>,
}

impl Supply {
    /// Base piles sized for `player_count`, plus ten of each kingdom card.
    #[must_use]
    pub fn setup(player_count: usize, kingdom: &Kingdom) -> Self {
        let n = player_count as u32;
        let victory = if player_count == 2 { 8 } else { 12 };

        let mut supply = Self::default();
        supply.set(CardId::Copper, 60u32.saturating_sub(7 * n));
        supply.set(CardId::Silver, 40);
        supply.set(CardId::Gold, 30);
        supply.set(CardId::Estate, victory);
        supply.set(CardId::Duchy, victory);
        supply.set(CardId::Province, victory);
        supply.set(CardId::Curse, n.saturating_sub(1) * 10);
        for card in kingdom.cards {
            supply.set(card, 10);
        }
        supply
    }

    /// Remaining count; zero for a card not in the supply.
    #[must_use]
    pub fn count(&self, card: CardId) -> u32 {
        self.piles.get(&card).copied().unwrap_or(0)
    }

    /// Is there a pile for this card at all?
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.piles.contains_key(&card)
    }

    /// Overwrite a pile's count, adding the pile if missing.
    pub fn set(&mut self, card: CardId, count: u32) {
        self.piles.insert(card, count);
    }

    /// Take one card off a pile. Fails, leaving the count unchanged, when
    /// the pile is missing or empty.
    pub fn take(&mut self, card: CardId) -> Result<()> {
        match self.piles.get_mut(&card) {
            None => Err(GameError::NotInSupply(card)),
            Some(0) => Err(GameError::PileEmpty(card)),
            Some(count) => {
                *count -= 1;
                Ok(())
            }
        }
    }

    /// Number of piles at zero.
    #[must_use]
    pub fn empty_piles(&self) -> usize {
        self.piles.values().filter(|&&count| count == 0).count()
    }

    /// Piles in card order.
    pub fn piles(&self) -> impl Iterator<Item = (CardId, u32)> + '_ {
        self.piles.iter().map(|(&card, &count)| (card, count))
    }

    /// Non-empty piles accepted by `pred`, in card order.
    #[must_use]
    pub fn available(&self, pred: impl Fn(CardId) -> bool) -> Vec<CardId> {
        self.piles()
            .filter(|&(card, count)| count > 0 && pred(card))
            .map(|(card, _)| card)
            .collect()
    }

    /// Cards left across every pile.
    #[must_use]
    pub fn total(&self) -> usize {
        self.piles.values().map(|&c| c as usize).sum()
    }
}

/// Ordered, append-only game log for the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    lines: Vector<String>,
}

impl GameLog {
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&String> {
        self.lines.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.lines.iter()
    }
}

/// The authoritative board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub players: PlayerMap<Player>,
    pub current_player: PlayerId,
    pub supply: Supply,
    pub trash: Vec<CardId>,
    /// Starts at 1; increments when play wraps back to player 0.
    pub turn_number: u32,
    pub phase: TurnPhase,
    pub log: GameLog,
    pub game_over: bool,
    pub interactions: InteractionQueue,
}

impl GameState {
    /// Lay out a fresh game: shuffled starting decks, opening hands, supply.
    #[must_use]
    pub fn new(config: &GameConfig, rng: &mut GameRng) -> Self {
        let kingdom = config.kingdom.kingdom();

        let players = PlayerMap::new(config.player_count, |id| {
            let mut player = Player::new(id, format!("Player {}", id.index() + 1));
            let starting: Vec<CardId> = STARTING_DECK
                .iter()
                .flat_map(|&(card, n)| std::iter::repeat(card).take(n))
                .collect();
            player.deck = zones::shuffle(&starting, rng);
            let Player {
                deck, discard, hand, ..
            } = &mut player;
            zones::draw(config.hand_size, deck, discard, hand, rng);
            player
        });

        let mut log = GameLog::default();
        log.push(format!(
            "Game started: {} players, {} kingdom",
            config.player_count, kingdom.name
        ));

        Self {
            players,
            current_player: PlayerId::new(0),
            supply: Supply::setup(config.player_count, kingdom),
            trash: Vec::new(),
            turn_number: 1,
            phase: TurnPhase::Action,
            log,
            game_over: false,
            interactions: InteractionQueue::new(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    pub fn current_mut(&mut self) -> &mut Player {
        let id = self.current_player;
        &mut self.players[id]
    }

    /// A player by id, or `NotSeated` for an id outside the game.
    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players.get(id).ok_or(GameError::NotSeated)
    }

    /// Every player except `id`, in turn order starting after `id`.
    #[must_use]
    pub fn others(&self, id: PlayerId) -> Vec<PlayerId> {
        let count = self.player_count();
        let mut out = Vec::with_capacity(count.saturating_sub(1));
        let mut next = id.next(count);
        while next != id {
            out.push(next);
            next = next.next(count);
        }
        out
    }

    /// Cards anywhere in the game: every zone, Trash, Supply, and cards
    /// held by pending interactions. Gains and trashing only move cards
    /// between these places, so the total never changes.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let zones: usize = self.players.iter().map(|(_, p)| p.card_count()).sum();
        zones + self.trash.len() + self.supply.total() + self.interactions.held_cards().count()
    }

    /// Count of `card` across one zone of every player.
    #[must_use]
    pub fn count_in_zone(&self, zone: Zone, card: CardId) -> usize {
        self.players
            .iter()
            .map(|(_, p)| p.zone(zone).iter().filter(|&&c| c == card).count())
            .sum()
    }

    /// The replicated projection.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            players: self.players.clone(),
            current_player: self.current_player,
            supply: self.supply.clone(),
            trash: self.trash.clone(),
            turn_number: self.turn_number,
            phase: self.phase,
            log: self.log.clone(),
            game_over: self.game_over,
            interactions: self.interactions.views(),
        }
    }
}

/// What the authority broadcasts and participants mirror.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub players: PlayerMap<Player>,
    pub current_player: PlayerId,
    pub supply: Supply,
    pub trash: Vec<CardId>,
    pub turn_number: u32,
    pub phase: TurnPhase,
    pub log: GameLog,
    pub game_over: bool,
    /// Pending interactions, head first, without their decisions.
    pub interactions: Vec<InteractionView>,
}

impl Snapshot {
    /// The active interaction, if any.
    #[must_use]
    pub fn head(&self) -> Option<&InteractionView> {
        self.interactions.first()
    }

    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }
}
