//! The authoritative game and the rules engine trait.
//!
//! `Game` owns everything the authority needs: the board, the RNG, Throne
//! Room's pending multiplier and the action history. Every intent goes
//! through it and is processed to completion (including any interactions
//! it enqueues) before it returns.

use im::Vector;
use log::{debug, info};

use super::scoring;
use crate::cards::CardId;
use crate::core::{Action, ActionRecord, GameConfig, GameRng, GameState, PlayerId, Snapshot, TurnPhase};
use crate::effects::{decision, Resolver};
use crate::error::{GameError, Result};
use crate::interaction::{Interaction, InteractionId, Response};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players tied for the top score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// Rules engine trait.
///
/// The replication layer drives games through this trait.
///
/// ## Implementation Notes
///
/// - `apply_action` and `resolve_interaction` must be no-ops on `Err`
/// - `legal_actions`: Return empty if the player can't act
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// The authoritative board.
    fn state(&self) -> &GameState;

    /// Apply a turn action for `player`.
    fn apply_action(&mut self, player: PlayerId, action: &Action) -> Result<()>;

    /// Answer the head interaction.
    fn resolve_interaction(&mut self, player: PlayerId, id: InteractionId, response: &Response) -> Result<()>;

    /// Enumerate all legal turn actions for a player.
    fn legal_actions(&self, player: PlayerId) -> Vec<Action>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// The replicated projection of the current board.
    fn snapshot(&self) -> Snapshot {
        self.state().snapshot()
    }

    /// The interaction waiting on an answer, if any.
    fn head(&self) -> Option<&Interaction> {
        self.state().interactions.head()
    }
}

/// The authoritative game.
#[derive(Clone, Debug)]
pub struct Game {
    pub(super) state: GameState,
    pub(super) rng: GameRng,
    pub(super) config: GameConfig,
    /// Repetitions for the next Action played (Throne Room).
    pub(super) pending_multiplier: u32,
    history: Vector<ActionRecord>,
    sequence: u32,
}

impl Game {
    /// Set up a new game from `config`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut rng = GameRng::new(config.seed);
        let state = GameState::new(&config, &mut rng);
        info!(
            "new game: {} players, kingdom {}, seed {}",
            config.player_count,
            config.kingdom.kingdom().key,
            config.seed
        );

        Self {
            state,
            rng,
            config,
            pending_multiplier: 1,
            history: Vector::new(),
            sequence: 0,
        }
    }

    /// Mutable board access, for arranging scenarios.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Repetitions the next Action play will get.
    #[must_use]
    pub fn pending_multiplier(&self) -> u32 {
        self.pending_multiplier
    }

    /// Applied actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Current scores in seat order.
    #[must_use]
    pub fn scores(&self) -> Vec<(PlayerId, i32)> {
        scoring::scores(&self.state)
    }

    pub(super) fn resolver(&mut self) -> Resolver<'_> {
        Resolver::new(&mut self.state, &mut self.rng, &mut self.pending_multiplier)
    }

    /// Gate shared by every turn action.
    pub(super) fn check_turn(&self, player: PlayerId) -> Result<()> {
        if self.state.game_over {
            return Err(GameError::GameOver);
        }
        if player != self.state.current_player {
            return Err(GameError::NotYourTurn {
                player,
                current: self.state.current_player,
            });
        }
        if !self.state.interactions.is_empty() {
            return Err(GameError::InteractionPending);
        }
        Ok(())
    }

    pub(super) fn record(&mut self, player: PlayerId, action: Action) {
        self.history
            .push_back(ActionRecord::new(player, action, self.state.turn_number, self.sequence));
        self.sequence += 1;
    }

    /// Drop head interactions nobody can answer any more.
    fn skip_moot(&mut self) {
        while let Some(head) = self.state.interactions.head() {
            if !decision::is_moot(head, &self.state) {
                break;
            }
            debug!("skipping {} for {}: nothing eligible", head.source, head.target);
            self.state.interactions.pop_head();
        }
    }
}

impl RulesEngine for Game {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn state(&self) -> &GameState {
        &self.state
    }

    fn apply_action(&mut self, player: PlayerId, action: &Action) -> Result<()> {
        self.check_turn(player)?;

        match *action {
            Action::PlayCard { hand_index } => self.resolver().play_card(player, hand_index)?,
            Action::BuyCard { card } => self.resolver().buy_card(player, card)?,
            Action::PlayAllTreasures => self.resolver().play_all_treasures(player)?,
            Action::EnterBuyPhase => return self.enter_buy_phase(player),
            Action::EndTurn => return self.end_turn(player),
        }

        self.record(player, *action);
        Ok(())
    }

    fn resolve_interaction(&mut self, player: PlayerId, id: InteractionId, response: &Response) -> Result<()> {
        if self.state.game_over {
            return Err(GameError::GameOver);
        }
        let head = self.state.interactions.head().ok_or(GameError::NoInteraction)?;
        if head.id != id {
            return Err(GameError::StaleInteraction(id));
        }
        if !self.config.hot_seat && player != head.target {
            return Err(GameError::NotTarget(player));
        }

        let selection = head.validate(response, decision::pool(head, &self.state))?;
        decision::check_selection(head, &selection, &self.state)?;

        let interaction = self.state.interactions.pop_head().ok_or(GameError::NoInteraction)?;
        self.resolver().apply_decision(interaction, selection)?;
        self.skip_moot();
        Ok(())
    }

    fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        if self.check_turn(player).is_err() {
            return Vec::new();
        }

        let p = self.state.current();
        let mut actions = Vec::new();
        let in_action_phase = self.state.phase == TurnPhase::Action;
        let can_act = p.actions > 0 || self.pending_multiplier > 1;

        for (hand_index, card) in p.hand.iter().enumerate() {
            let def = card.def();
            if def.is_treasure() || (def.is_action() && in_action_phase && can_act) {
                actions.push(Action::PlayCard { hand_index });
            }
        }
        if p.hand.iter().any(|c| c.def().is_treasure()) {
            actions.push(Action::PlayAllTreasures);
        }
        if in_action_phase {
            actions.push(Action::EnterBuyPhase);
        }
        if p.buys > 0 {
            let coin = p.coin;
            actions.extend(
                self.state
                    .supply
                    .available(|c: CardId| c.def().cost <= coin)
                    .into_iter()
                    .map(|card| Action::BuyCard { card }),
            );
        }
        actions.push(Action::EndTurn);
        actions
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.state.game_over.then(|| scoring::result(&self.state))
    }
}
