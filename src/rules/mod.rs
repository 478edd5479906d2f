//! Rules: the authoritative game, the turn controller and scoring.
//!
//! `Game` implements `RulesEngine`; the replication layer drives it
//! through that trait and never touches the board directly.

pub mod engine;
pub mod scoring;
mod turn;

pub use engine::{Game, GameResult, RulesEngine};
