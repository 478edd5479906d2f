//! Effect resolution: playing and buying cards against the board.
//!
//! A `Resolver` borrows the state, the RNG and Throne Room's pending
//! multiplier for the length of one intent. Every public operation
//! validates first and mutates second, so an `Err` leaves the board
//! untouched.

use log::debug;

use super::special::SpecialEffect;
use crate::cards::CardId;
use crate::core::{GameRng, GameState, PlayerId, TurnPhase};
use crate::error::{GameError, Result};
use crate::interaction::Interaction;
use crate::rules::scoring;
use crate::zones::{self, Zone};

/// Applies card effects to a borrowed board.
pub struct Resolver<'a> {
    pub state: &'a mut GameState,
    pub rng: &'a mut GameRng,
    /// Repetitions for the next Action played. 1 unless Throne Room set it.
    pub pending_multiplier: &'a mut u32,
}

impl<'a> Resolver<'a> {
    pub fn new(state: &'a mut GameState, rng: &'a mut GameRng, pending_multiplier: &'a mut u32) -> Self {
        Self {
            state,
            rng,
            pending_multiplier,
        }
    }

    // === Intents ===

    /// Play the card at `hand_index`.
    ///
    /// Actions need the Action phase and a remaining action, unless Throne
    /// Room is pending: then the play is free and repeats. Treasures add
    /// their value and move the turn to the Buy phase.
    pub fn play_card(&mut self, player: PlayerId, hand_index: usize) -> Result<()> {
        let p = self.state.players.get(player).ok_or(GameError::NotSeated)?;
        let card = *p
            .hand
            .get(hand_index)
            .ok_or(GameError::InvalidHandIndex(hand_index))?;
        let def = card.def();

        if def.is_action() {
            if self.state.phase != TurnPhase::Action {
                return Err(GameError::WrongPhase(self.state.phase));
            }
            let repetitions = *self.pending_multiplier;
            if repetitions < 2 && p.actions == 0 {
                return Err(GameError::NoActions);
            }

            *self.pending_multiplier = 1;
            let p = &mut self.state.players[player];
            p.hand.remove(hand_index);
            p.play_area.push(card);
            if repetitions < 2 {
                p.actions -= 1;
            }

            let name = p.name.clone();
            if repetitions > 1 {
                self.log(format!("{} plays {} (x{})", name, card, repetitions));
            } else {
                self.log(format!("{} plays {}", name, card));
            }
            debug!("{} resolving {} x{}", player, card, repetitions);

            for _ in 0..repetitions {
                self.resolve_action(player, card);
            }
            Ok(())
        } else if def.is_treasure() {
            let p = &mut self.state.players[player];
            p.hand.remove(hand_index);
            p.play_area.push(card);
            p.coin += def.treasure;
            let line = format!("{} plays {} (+{} coin)", p.name, card, def.treasure);
            self.state.phase = TurnPhase::Buy;
            self.log(line);
            Ok(())
        } else {
            Err(GameError::NotPlayable(card))
        }
    }

    /// Move every Treasure in hand to the play area in one step.
    pub fn play_all_treasures(&mut self, player: PlayerId) -> Result<()> {
        let p = self.state.players.get_mut(player).ok_or(GameError::NotSeated)?;
        let (treasures, rest): (Vec<CardId>, Vec<CardId>) =
            p.hand.iter().copied().partition(|c| c.def().is_treasure());
        if treasures.is_empty() {
            return Err(GameError::NoTreasures);
        }

        let total: u32 = treasures.iter().map(|c| c.def().treasure).sum();
        p.hand = rest;
        p.coin += total;
        p.play_area.extend_from_slice(&treasures);
        let line = format!("{} plays {} treasures (+{} coin)", p.name, treasures.len(), total);
        self.state.phase = TurnPhase::Buy;
        self.log(line);
        Ok(())
    }

    /// Buy one `card`: spend a buy and its cost, gain it to the discard pile.
    pub fn buy_card(&mut self, player: PlayerId, card: CardId) -> Result<()> {
        let p = self.state.players.get(player).ok_or(GameError::NotSeated)?;
        if !self.state.supply.contains(card) {
            return Err(GameError::NotInSupply(card));
        }
        if self.state.supply.count(card) == 0 {
            return Err(GameError::PileEmpty(card));
        }
        if p.buys == 0 {
            return Err(GameError::NoBuys);
        }
        let cost = card.def().cost;
        if p.coin < cost {
            return Err(GameError::InsufficientCoin {
                need: cost,
                have: p.coin,
            });
        }

        self.state.supply.take(card)?;
        let p = &mut self.state.players[player];
        p.buys -= 1;
        p.coin -= cost;
        p.discard.push(card);
        let line = format!("{} buys {}", p.name, card);
        self.state.phase = TurnPhase::Buy;
        self.log(line);
        self.check_game_over();
        Ok(())
    }

    /// Play `card` from the discard pile as if it were the last card in
    /// hand (Vassal).
    ///
    /// The usual Action rules apply: it needs a remaining action unless
    /// Throne Room is pending, and it uses up that multiplier. A rejected
    /// play puts the card back on the discard pile.
    pub fn play_from_discard(&mut self, player: PlayerId, card: CardId) {
        let p = &mut self.state.players[player];
        if !zones::pile::remove_last(&mut p.discard, &card) {
            debug!("{} no longer in {}'s discard, skipping replay", card, player);
            return;
        }
        p.hand.push(card);
        let hand_index = p.hand.len() - 1;

        if let Err(err) = self.play_card(player, hand_index) {
            // play_card rejected before touching the hand.
            let p = &mut self.state.players[player];
            p.hand.pop();
            p.discard.push(card);
            let line = format!("{} cannot play {} from the discard pile", p.name, card);
            self.log(line);
            debug!("{} replaying {} rejected: {}", player, card, err);
        }
    }

    // === Resolution ===

    /// One repetition of an Action: static bonuses, then the special effect.
    fn resolve_action(&mut self, player: PlayerId, card: CardId) {
        let def = card.def();
        let p = &mut self.state.players[player];
        p.actions += def.actions;
        p.buys += def.buys;
        p.coin += def.coin;
        if def.cards > 0 {
            self.draw(player, def.cards as usize);
        }

        if let Some(effect) = SpecialEffect::of(card) {
            self.special(player, effect);
        }
    }

    // === Board primitives ===

    /// Draw `n` cards into `player`'s hand. Returns how many were drawn.
    pub fn draw(&mut self, player: PlayerId, n: usize) -> usize {
        let p = &mut self.state.players[player];
        zones::draw(n, &mut p.deck, &mut p.discard, &mut p.hand, self.rng).drawn
    }

    /// Take up to `n` cards off the top of `player`'s deck, reshuffling the
    /// discard pile if needed. First element is the former top card.
    pub fn reveal(&mut self, player: PlayerId, n: usize) -> Vec<CardId> {
        let p = &mut self.state.players[player];
        let mut revealed = Vec::with_capacity(n);
        zones::draw(n, &mut p.deck, &mut p.discard, &mut revealed, self.rng);
        revealed
    }

    /// Gain `card` from the supply into `zone`.
    pub fn gain(&mut self, player: PlayerId, card: CardId, zone: Zone) -> Result<()> {
        self.state.supply.take(card)?;
        let p = &mut self.state.players[player];
        p.zone_mut(zone).push(card);
        let line = match zone {
            Zone::Hand => format!("{} gains {} to hand", p.name, card),
            Zone::Deck => format!("{} gains {} onto their deck", p.name, card),
            _ => format!("{} gains {}", p.name, card),
        };
        self.log(line);
        self.check_game_over();
        Ok(())
    }

    /// Move cards into the trash.
    pub fn trash(&mut self, player: PlayerId, cards: &[CardId]) {
        if cards.is_empty() {
            return;
        }
        self.state.trash.extend_from_slice(cards);
        let line = format!("{} trashes {}", self.state.players[player].name, list(cards));
        self.log(line);
    }

    /// Enqueue `interaction` unless nobody could answer it.
    pub fn offer(&mut self, interaction: Interaction) {
        if super::decision::is_moot(&interaction, self.state) {
            debug!(
                "skipping {} for {}: nothing eligible",
                interaction.source, interaction.target
            );
            return;
        }
        self.state.interactions.enqueue(interaction);
    }

    pub fn log(&mut self, line: impl Into<String>) {
        self.state.log.push(line);
    }

    fn check_game_over(&mut self) {
        if !self.state.game_over && scoring::is_game_over(&self.state.supply) {
            self.state.game_over = true;
            self.log("Game over");
            log::info!("game over on turn {}", self.state.turn_number);
        }
    }
}

/// "Copper, Estate" for log lines.
pub(crate) fn list(cards: &[CardId]) -> String {
    cards
        .iter()
        .map(|c| c.def().name)
        .collect::<Vec<_>>()
        .join(", ")
}
