//! Frame transport between the authority and its peers.
//!
//! Establishing connections is somebody else's job; the engine only needs
//! to push a frame to a named peer and to receive frames tagged with their
//! sender.

use log::trace;
use rustc_hash::FxHashMap;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::PeerId;
use crate::error::{GameError, Result};

/// A frame tagged with the peer it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inbound {
    pub from: PeerId,
    pub frame: Vec<u8>,
}

/// Outbound half of a reliable, ordered, per-peer channel.
pub trait Transport {
    /// Send one frame to `peer`.
    fn send(&self, peer: PeerId, frame: Vec<u8>) -> Result<()>;

    /// Peers currently reachable.
    fn peers(&self) -> Vec<PeerId>;
}

/// In-process transport over unbounded tokio channels.
#[derive(Debug, Default)]
pub struct ChannelTransport {
    links: FxHashMap<PeerId, UnboundedSender<Vec<u8>>>,
}

impl ChannelTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `peer` and return the receiving end of its downlink.
    /// Re-registering replaces the old link.
    pub fn connect(&mut self, peer: PeerId) -> UnboundedReceiver<Vec<u8>> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.links.insert(peer, tx);
        rx
    }

    /// Forget `peer`. Later sends to it fail with `UnknownPeer`.
    pub fn disconnect(&mut self, peer: PeerId) {
        self.links.remove(&peer);
    }
}

impl Transport for ChannelTransport {
    fn send(&self, peer: PeerId, frame: Vec<u8>) -> Result<()> {
        let link = self.links.get(&peer).ok_or(GameError::UnknownPeer(peer))?;
        trace!("{} <- {} bytes", peer, frame.len());
        link.send(frame).map_err(|_| GameError::Disconnected(peer))
    }

    fn peers(&self) -> Vec<PeerId> {
        let mut peers: Vec<_> = self.links.keys().copied().collect();
        peers.sort_unstable();
        peers
    }
}

/// The authority's inbox: every participant holds a clone of the sender.
#[must_use]
pub fn channel() -> (UnboundedSender<Inbound>, UnboundedReceiver<Inbound>) {
    mpsc::unbounded_channel()
}
