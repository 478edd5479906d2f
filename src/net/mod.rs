//! Replication: one authority owns the game, participants mirror it.
//!
//! ## Roles
//!
//! - [`Authority`]: holds the only writable [`Game`](crate::rules::Game),
//!   validates every intent, and broadcasts full snapshots (debounced).
//! - [`Participant`]: holds a read-only mirror replaced wholesale by each
//!   `StateUpdate`, and sends intents claiming its seat. The host's own
//!   participant uses [`HOST_PEER`] and plays [`HOST_SEAT`].
//!
//! ## Wire
//!
//! [`Message`] frames are encoded with bincode and carried by a
//! [`Transport`]. The transport is assumed reliable and ordered per peer;
//! [`ChannelTransport`] is an in-process implementation over tokio
//! channels.

mod authority;
mod message;
mod participant;
mod transport;

pub use authority::{Authority, HOST_PEER, HOST_SEAT};
pub use message::{ActionRequest, Message};
pub use participant::Participant;
pub use transport::{channel, ChannelTransport, Inbound, Transport};

use serde::{Deserialize, Serialize};

/// Transport-level identity of a remote process.
///
/// Distinct from [`PlayerId`](crate::core::PlayerId): the authority maps
/// peers to seats when the game starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PeerId(pub u32);

impl std::fmt::Display for PeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "peer {}", self.0)
    }
}
