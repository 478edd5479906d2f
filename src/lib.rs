//! # wickinion
//!
//! A deck-building card game engine with host-authoritative replication.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: Exactly one `Game` is ever mutated. Remote
//!    participants hold mirrors replaced wholesale by snapshots.
//!
//! 2. **Decisions Are Data**: A card effect that needs a player's choice
//!    enqueues an `Interaction` carrying a tagged `Decision`. No closures,
//!    so the queue head can always be inspected and replicated.
//!
//! 3. **Validate, Then Mutate**: Every intent either succeeds or returns a
//!    `GameError` with the board untouched.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: cheap snapshot clones via `im-rs`
//!   for the supply and the game log.
//!
//! - **Deterministic Shuffles**: a seeded ChaCha RNG owned by the
//!   authority; participants never shuffle.
//!
//! ## Modules
//!
//! - `core`: Players, state, snapshots, actions, RNG, configuration
//! - `cards`: Card catalog, categories and kingdom presets
//! - `zones`: Zone names and the shuffle/draw primitive
//! - `interaction`: Pending decisions, filters and the queue
//! - `effects`: Card resolution and decision handling
//! - `rules`: The authoritative `Game`, turn controller and scoring
//! - `net`: Authority/participant replication over a `Transport`
//!
//! ## Example
//!
//! ```
//! use wickinion::{Action, CardId, Game, GameConfig, PlayerId, RulesEngine};
//!
//! let mut game = Game::new(GameConfig::default().with_seed(7));
//! let p0 = PlayerId::new(0);
//!
//! game.apply_action(p0, &Action::PlayAllTreasures).unwrap();
//! if game.state().current().coin >= 3 {
//!     game.apply_action(p0, &Action::BuyCard { card: CardId::Silver }).unwrap();
//! }
//! game.apply_action(p0, &Action::EndTurn).unwrap();
//!
//! assert_eq!(game.state().current_player, PlayerId::new(1));
//! ```

pub mod core;
pub mod zones;
pub mod cards;
pub mod interaction;
pub mod effects;
pub mod rules;
pub mod net;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerId, PlayerMap,
    GameRng,
    GameConfig, ReplicationConfig,
    Action, ActionRecord,
    GameLog, GameState, Snapshot, Supply, TurnPhase,
};

pub use crate::zones::{Zone, DrawOutcome};

pub use crate::cards::{Category, CardDefinition, CardId, Kingdom, KingdomChoice};

pub use crate::interaction::{
    CardFilter, Decision, Interaction, InteractionId, InteractionKind,
    InteractionQueue, InteractionView, Response, Selection,
};

pub use crate::effects::{Resolver, SpecialEffect};

pub use crate::rules::{Game, GameResult, RulesEngine};

pub use crate::net::{
    ActionRequest, Authority, ChannelTransport, Inbound, Message, Participant, PeerId, Transport,
};

pub use crate::error::{GameError, Result};
