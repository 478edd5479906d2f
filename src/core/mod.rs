//! Core engine types: players, state, actions, RNG, configuration.
//!
//! Everything the rules operate on lives here; the rules themselves live in
//! [`rules`](crate::rules) and [`effects`](crate::effects).

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{GameConfig, ReplicationConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use action::{Action, ActionRecord};
pub use state::{GameLog, GameState, Snapshot, Supply, TurnPhase};
