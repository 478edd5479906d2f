//! Game-over detection and final scores.

use super::engine::GameResult;
use crate::cards::CardId;
use crate::core::state::VICTORY_PILES;
use crate::core::{GameState, Player, PlayerId, Supply};

/// Empty piles that end the game on their own.
pub const EMPTY_PILE_LIMIT: usize = 3;

/// True once Province, Duchy or Estate is gone, or three piles are empty.
///
/// A victory pile missing from the supply counts as empty.
#[must_use]
pub fn is_game_over(supply: &Supply) -> bool {
    VICTORY_PILES.iter().any(|&card| supply.count(card) == 0)
        || supply.empty_piles() >= EMPTY_PILE_LIMIT
}

/// Victory points across every zone the player owns.
///
/// Gardens is worth one point per full ten cards owned.
#[must_use]
pub fn score(player: &Player) -> i32 {
    let total = player.card_count() as i32;
    player
        .all_cards()
        .map(|card| match card {
            CardId::Gardens => total / 10,
            _ => card.def().points,
        })
        .sum()
}

/// Every player's score, in seat order.
#[must_use]
pub fn scores(state: &GameState) -> Vec<(PlayerId, i32)> {
    state.players.iter().map(|(id, p)| (id, score(p))).collect()
}

/// Winner(s) by score. Everyone tied at the top shares the win.
#[must_use]
pub fn result(state: &GameState) -> GameResult {
    let scores = scores(state);
    let best = scores.iter().map(|&(_, s)| s).max().unwrap_or(0);
    let mut winners: Vec<PlayerId> = scores
        .into_iter()
        .filter(|&(_, s)| s == best)
        .map(|(id, _)| id)
        .collect();

    match winners.len() {
        1 => GameResult::Winner(winners.remove(0)),
        _ => GameResult::Winners(winners),
    }
}
