//! Turn controller: Action -> Buy -> cleanup -> next player's Action.
//!
//! Ending a turn is two steps. `cleanup_turn` discards and redraws the
//! acting player's cards; `advance_turn` hands play to the next seat. The
//! authority may pause between the two for presentation. `end_turn` runs
//! both back to back.

use log::debug;

use super::engine::Game;
use crate::core::{Action, PlayerId, TurnPhase};
use crate::error::{GameError, Result};

impl Game {
    /// Explicit Action -> Buy transition.
    pub fn enter_buy_phase(&mut self, player: PlayerId) -> Result<()> {
        self.check_turn(player)?;
        if self.state.phase != TurnPhase::Action {
            return Err(GameError::WrongPhase(self.state.phase));
        }
        self.state.phase = TurnPhase::Buy;
        let line = format!("{} enters the Buy phase", self.state.players[player].name);
        self.state.log.push(line);
        self.record(player, Action::EnterBuyPhase);
        Ok(())
    }

    /// Clean up and pass the turn in one step.
    pub fn end_turn(&mut self, player: PlayerId) -> Result<()> {
        self.cleanup_turn(player)?;
        self.advance_turn();
        Ok(())
    }

    /// First half of ending a turn.
    ///
    /// Hand and play area go to the discard pile, a fresh hand is drawn and
    /// the turn counters reset. Only valid with no interaction pending.
    pub fn cleanup_turn(&mut self, player: PlayerId) -> Result<()> {
        self.check_turn(player)?;

        let hand_size = self.config.hand_size;
        let p = &mut self.state.players[player];
        let mut spent = std::mem::take(&mut p.hand);
        spent.append(&mut p.play_area);
        p.discard.append(&mut spent);
        p.reset_counters();

        crate::zones::draw(hand_size, &mut p.deck, &mut p.discard, &mut p.hand, &mut self.rng);
        let line = format!("{} ends their turn", p.name);
        self.state.log.push(line);

        self.pending_multiplier = 1;
        self.state.interactions.clear();
        self.record(player, Action::EndTurn);
        Ok(())
    }

    /// Second half of ending a turn: move to the next seat in the Action
    /// phase, bumping the turn counter when play wraps to player 0.
    pub fn advance_turn(&mut self) {
        let next = self.state.current_player.next(self.state.player_count());
        self.state.current_player = next;
        self.state.phase = TurnPhase::Action;
        self.pending_multiplier = 1;
        if next.index() == 0 {
            self.state.turn_number += 1;
        }

        let line = format!("Turn {}: {}", self.state.turn_number, self.state.players[next].name);
        self.state.log.push(line);
        debug!("turn {} passes to {}", self.state.turn_number, next);
    }
}
