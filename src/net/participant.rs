//! A participant: read-only mirror of the authority's game.
//!
//! The mirror is only ever replaced wholesale by a `StateUpdate`. The one
//! local edit is dropping the head interaction right after answering it,
//! so the same decision is not shown (and answered) twice; the next
//! snapshot overwrites it either way.

use log::{debug, warn};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use super::message::{ActionRequest, Message};
use super::transport::Inbound;
use super::PeerId;
use crate::core::{Action, PlayerId, Snapshot};
use crate::error::{GameError, Result};
use crate::interaction::{InteractionId, InteractionView, Response};

/// A remote seat at the table.
#[derive(Debug)]
pub struct Participant {
    peer: PeerId,
    me: Option<PlayerId>,
    mirror: Option<Snapshot>,
    uplink: UnboundedSender<Inbound>,
    downlink: UnboundedReceiver<Vec<u8>>,
    updates: u64,
}

impl Participant {
    /// `uplink` feeds the authority's inbox; `downlink` is this peer's
    /// receiving end of the transport.
    #[must_use]
    pub fn new(peer: PeerId, uplink: UnboundedSender<Inbound>, downlink: UnboundedReceiver<Vec<u8>>) -> Self {
        Self {
            peer,
            me: None,
            mirror: None,
            uplink,
            downlink,
            updates: 0,
        }
    }

    #[must_use]
    pub fn peer(&self) -> PeerId {
        self.peer
    }

    /// Seat assigned by `StartGame`.
    #[must_use]
    pub fn me(&self) -> Option<PlayerId> {
        self.me
    }

    /// Latest mirrored board.
    #[must_use]
    pub fn mirror(&self) -> Option<&Snapshot> {
        self.mirror.as_ref()
    }

    /// Snapshots applied so far.
    #[must_use]
    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Head interaction of the mirror.
    #[must_use]
    pub fn head(&self) -> Option<&InteractionView> {
        self.mirror.as_ref().and_then(Snapshot::head)
    }

    /// Is a decision waiting on this seat?
    #[must_use]
    pub fn awaiting_me(&self) -> bool {
        matches!((self.head(), self.me), (Some(head), Some(me)) if head.target == me)
    }

    /// Apply one message from the authority.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::StateUpdate(snapshot) => {
                self.mirror = Some(*snapshot);
                self.updates += 1;
            }
            Message::StartGame { player } => {
                debug!("{} seated as {}", self.peer, player);
                self.me = Some(player);
            }
            other @ (Message::Action(_) | Message::ResolveInteraction { .. }) => {
                warn!("{} ignores {} sent to a participant", self.peer, other.kind());
            }
        }
    }

    /// Decode and apply one frame.
    pub fn handle_frame(&mut self, frame: &[u8]) {
        match Message::decode(frame) {
            Ok(msg) => self.handle(msg),
            Err(err) => warn!("{} dropping undecodable frame: {}", self.peer, err),
        }
    }

    /// Apply every frame already waiting. Returns how many there were.
    pub fn drain(&mut self) -> usize {
        let mut n = 0;
        while let Ok(frame) = self.downlink.try_recv() {
            self.handle_frame(&frame);
            n += 1;
        }
        n
    }

    /// Wait for the next frame and apply it. `false` once the authority
    /// has gone away.
    pub async fn next(&mut self) -> bool {
        match self.downlink.recv().await {
            Some(frame) => {
                self.handle_frame(&frame);
                true
            }
            None => false,
        }
    }

    /// Send a turn action claiming this seat.
    pub fn submit(&mut self, action: Action) -> Result<()> {
        let player = self.me.ok_or(GameError::NotSeated)?;
        self.send(&Message::Action(ActionRequest { player, action }))
    }

    /// Answer interaction `id`, then drop it from the local mirror.
    pub fn resolve(&mut self, id: InteractionId, response: Response) -> Result<()> {
        self.send(&Message::ResolveInteraction { id, response })?;
        if let Some(mirror) = self.mirror.as_mut() {
            if mirror.head().map(|h| h.id) == Some(id) {
                mirror.interactions.remove(0);
            }
        }
        Ok(())
    }

    fn send(&self, msg: &Message) -> Result<()> {
        let frame = msg.encode()?;
        self.uplink
            .send(Inbound {
                from: self.peer,
                frame,
            })
            .map_err(|_| GameError::Disconnected(self.peer))
    }
}
