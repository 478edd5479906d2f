//! Effect resolution: what playing, buying and deciding does to the board.
//!
//! - `Resolver`: play a card, play all treasures, buy, gain, draw, trash
//! - `SpecialEffect`: per-card behavior, dispatched by exhaustive match
//! - `decision`: applying validated answers, including chained follow-ups
//!
//! ## Design Philosophy
//!
//! Card behavior never holds a closure. Anything that needs a player's
//! answer is enqueued as an [`Interaction`](crate::interaction::Interaction)
//! carrying a tagged [`Decision`](crate::interaction::Decision), and the
//! answer is dispatched here when it arrives. Nested effects enqueue
//! further interactions the same way.

pub mod decision;
mod resolver;
mod special;

pub use resolver::Resolver;
pub use special::{SpecialEffect, LIBRARY_HAND_SIZE, MILITIA_HAND_SIZE};
