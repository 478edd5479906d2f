//! Shuffle and draw primitives over plain card piles.
//!
//! A pile is a `Vec` whose end is the top. Running out of cards is never an
//! error: `draw` just stops early.

use log::trace;

use crate::core::GameRng;

/// What happened during a [`draw`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawOutcome {
    /// Cards actually moved into the hand.
    pub drawn: usize,
    /// The discard pile was shuffled into the deck at least once.
    pub reshuffled: bool,
}

/// Return a uniformly shuffled copy of `cards`. The input is untouched.
#[must_use]
pub fn shuffle<T: Clone>(cards: &[T], rng: &mut GameRng) -> Vec<T> {
    let mut out = cards.to_vec();
    rng.shuffle(&mut out);
    out
}

/// Draw up to `n` cards from the top of `deck` into `hand`.
///
/// When the deck runs dry and the discard pile has cards, the discard pile
/// is shuffled into a fresh deck and drawing continues. When both are
/// empty the draw stops short.
pub fn draw<T: Clone>(
    n: usize,
    deck: &mut Vec<T>,
    discard: &mut Vec<T>,
    hand: &mut Vec<T>,
    rng: &mut GameRng,
) -> DrawOutcome {
    let mut outcome = DrawOutcome::default();

    for _ in 0..n {
        if deck.is_empty() {
            if discard.is_empty() {
                break;
            }
            *deck = shuffle(discard, rng);
            discard.clear();
            outcome.reshuffled = true;
            trace!("reshuffled {} cards into the deck", deck.len());
        }
        if let Some(card) = deck.pop() {
            hand.push(card);
            outcome.drawn += 1;
        }
    }

    outcome
}

/// Remove the cards at `indices` from `pile`, returned in selection order.
///
/// Indices must be distinct and in range; callers validate first.
pub fn take_indices<T: Clone>(pile: &mut Vec<T>, indices: &[usize]) -> Vec<T> {
    let taken: Vec<T> = indices.iter().map(|&i| pile[i].clone()).collect();

    let mut descending = indices.to_vec();
    descending.sort_unstable_by(|a, b| b.cmp(a));
    for i in descending {
        pile.remove(i);
    }

    taken
}

/// Remove the most recently added copy of `card`. Returns whether one was found.
pub fn remove_last<T: PartialEq>(pile: &mut Vec<T>, card: &T) -> bool {
    match pile.iter().rposition(|c| c == card) {
        Some(pos) => {
            pile.remove(pos);
            true
        }
        None => false,
    }
}
