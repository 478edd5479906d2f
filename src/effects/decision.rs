//! Applying validated answers to pending interactions.
//!
//! The engine validates a response against the head interaction, pops it,
//! and hands the record plus the mapped [`Selection`] to
//! [`Resolver::apply_decision`]. Follow-up steps are enqueued from here.

use log::debug;

use super::resolver::{list, Resolver};
use crate::cards::CardId;
use crate::core::{GameState, PlayerId};
use crate::error::{GameError, Result};
use crate::interaction::{CardFilter, Decision, Interaction, InteractionKind, Selection};
use crate::zones::{pile, Zone};

/// Coin Moneylender grants for trashing a Copper.
pub const MONEYLENDER_COIN: u32 = 3;

/// The cards a selection's indices point into: the target's hand for hand
/// selections, the option list otherwise. Always authority-side state.
#[must_use]
pub fn pool<'s>(interaction: &'s Interaction, state: &'s GameState) -> &'s [CardId] {
    match interaction.kind {
        InteractionKind::HandSelection => state
            .players
            .get(interaction.target)
            .map(|p| p.hand.as_slice())
            .unwrap_or(&[]),
        _ => &interaction.options,
    }
}

/// How many cards or piles could currently be picked.
#[must_use]
pub fn eligible(interaction: &Interaction, state: &GameState) -> usize {
    let filter = interaction.filter;
    match (interaction.kind, &interaction.decision) {
        (InteractionKind::Confirmation, _) => 1,
        (InteractionKind::SupplySelection, _) => interaction
            .options
            .iter()
            .filter(|&&c| state.supply.count(c) > 0 && filter.allows(c))
            .count(),
        (_, Decision::HarbingerTopdeck) => {
            let discard = state
                .players
                .get(interaction.target)
                .map(|p| p.discard.as_slice())
                .unwrap_or(&[]);
            interaction.options.iter().filter(|c| discard.contains(c)).count()
        }
        _ => pool(interaction, state).iter().filter(|&&c| filter.allows(c)).count(),
    }
}

/// Could nobody meaningfully answer this? Such interactions are skipped
/// rather than left to stall the queue.
#[must_use]
pub fn is_moot(interaction: &Interaction, state: &GameState) -> bool {
    if interaction.kind == InteractionKind::Confirmation {
        return false;
    }
    let n = eligible(interaction, state);
    n == 0 || n < interaction.min
}

/// Checks that depend on the board rather than the response: a chosen
/// supply pile may have run out since the options were listed.
pub fn check_selection(interaction: &Interaction, selection: &Selection, state: &GameState) -> Result<()> {
    if interaction.kind == InteractionKind::SupplySelection {
        for &card in &selection.cards {
            if state.supply.count(card) == 0 {
                return Err(GameError::PileEmpty(card));
            }
        }
    }
    Ok(())
}

impl Resolver<'_> {
    /// Apply a validated `selection` for a popped `interaction`.
    pub fn apply_decision(&mut self, interaction: Interaction, selection: Selection) -> Result<()> {
        let target = interaction.target;
        debug!(
            "{} resolves {} with {:?}",
            target, interaction.source, selection.indices
        );

        match interaction.decision {
            Decision::CellarDiscard => {
                let cards = self.take_from_hand(target, &selection.indices);
                let n = cards.len();
                self.discard(target, cards);
                self.draw(target, n);
            }
            Decision::ChapelTrash => {
                let cards = self.take_from_hand(target, &selection.indices);
                self.trash(target, &cards);
            }
            Decision::SentryTrash => {
                let kept = remaining(&interaction.options, &selection.indices);
                self.trash(target, &selection.cards);
                if !kept.is_empty() {
                    let n = kept.len();
                    self.offer(
                        Interaction::custom(Decision::SentryDiscard, "Sentry", target, kept)
                            .count(0, Some(n))
                            .prompt("Discard any of the rest; the others go back on your deck"),
                    );
                }
            }
            Decision::SentryDiscard => {
                let kept = remaining(&interaction.options, &selection.indices);
                self.discard(target, selection.cards);
                let p = &mut self.state.players[target];
                p.deck.extend_from_slice(&kept);
                if !kept.is_empty() {
                    let line = format!("{} puts {} back on their deck", p.name, kept.len());
                    self.log(line);
                }
            }
            Decision::HarbingerTopdeck => {
                let card = first(&selection)?;
                let p = &mut self.state.players[target];
                if pile::remove_last(&mut p.discard, &card) {
                    p.deck.push(card);
                    let line = format!("{} puts {} onto their deck", p.name, card);
                    self.log(line);
                } else {
                    debug!("{} left {}'s discard before Harbinger resolved", card, target);
                }
            }
            Decision::VassalPlay { card } => {
                if selection.accepted {
                    self.play_from_discard(target, card);
                } else {
                    let line = format!("{} leaves {} in the discard pile", self.state.players[target].name, card);
                    self.log(line);
                }
            }
            Decision::WorkshopGain | Decision::RemodelGain => {
                self.gain(target, first(&selection)?, Zone::Discard)?;
            }
            Decision::ArtisanGain => {
                self.gain(target, first(&selection)?, Zone::Hand)?;
                self.offer(
                    Interaction::hand(Decision::ArtisanTopdeck, "Artisan", target)
                        .prompt("Put a card from your hand onto your deck"),
                );
            }
            Decision::ArtisanTopdeck | Decision::BureaucratTopdeck => {
                let cards = self.take_from_hand(target, &selection.indices);
                let p = &mut self.state.players[target];
                p.deck.extend_from_slice(&cards);
                let line = format!("{} puts {} onto their deck", p.name, list(&cards));
                self.log(line);
            }
            Decision::MineTrash => {
                let cards = self.take_from_hand(target, &selection.indices);
                let cost = cards.iter().map(|c| c.def().cost).max().unwrap_or(0);
                self.trash(target, &cards);
                self.offer_gain(target, Decision::MineGain, "Mine", CardFilter::TreasureCostAtMost(cost + 3));
            }
            Decision::MineGain => {
                self.gain(target, first(&selection)?, Zone::Hand)?;
            }
            Decision::RemodelTrash => {
                let cards = self.take_from_hand(target, &selection.indices);
                let cost = cards.iter().map(|c| c.def().cost).max().unwrap_or(0);
                self.trash(target, &cards);
                self.offer_gain(target, Decision::RemodelGain, "Remodel", CardFilter::CostAtMost(cost + 2));
            }
            Decision::MoneylenderTrash => {
                let cards = self.take_from_hand(target, &selection.indices);
                if !cards.is_empty() {
                    self.trash(target, &cards);
                    self.state.players[target].coin += MONEYLENDER_COIN;
                }
            }
            Decision::PoacherDiscard | Decision::MilitiaDiscard => {
                let cards = self.take_from_hand(target, &selection.indices);
                self.discard(target, cards);
            }
            Decision::BanditReveal { attacker } => self.bandit(attacker, target),
        }
        Ok(())
    }

    /// Reveal the top two of `victim`'s deck, trash the first non-Copper
    /// Treasure among them, discard the rest.
    fn bandit(&mut self, attacker: PlayerId, victim: PlayerId) {
        let mut revealed = self.reveal(victim, 2);
        let line = format!("{} reveals {}", self.state.players[victim].name, list(&revealed));
        self.log(line);

        let hit = revealed
            .iter()
            .position(|&c| c.def().is_treasure() && c != CardId::Copper);
        if let Some(pos) = hit {
            let card = revealed.remove(pos);
            self.trash(victim, &[card]);
            debug!("{}'s Bandit trashed {} from {}", attacker, card, victim);
        }
        self.discard(victim, revealed);
    }

    fn take_from_hand(&mut self, player: PlayerId, indices: &[usize]) -> Vec<CardId> {
        pile::take_indices(&mut self.state.players[player].hand, indices)
    }

    fn discard(&mut self, player: PlayerId, cards: Vec<CardId>) {
        if cards.is_empty() {
            return;
        }
        let p = &mut self.state.players[player];
        let line = format!("{} discards {}", p.name, list(&cards));
        p.discard.extend(cards);
        self.log(line);
    }
}

/// The single chosen card of an exactly-one selection.
fn first(selection: &Selection) -> Result<CardId> {
    selection
        .cards
        .first()
        .copied()
        .ok_or(GameError::SelectionCount {
            min: 1,
            max: Some(1),
            got: 0,
        })
}

/// `options` without the entries at `picked`, order preserved.
fn remaining(options: &[CardId], picked: &[usize]) -> Vec<CardId> {
    options
        .iter()
        .enumerate()
        .filter(|(i, _)| !picked.contains(i))
        .map(|(_, &c)| c)
        .collect()
}
