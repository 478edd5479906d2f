//! The authority: sole writer of the game, broadcaster of snapshots.
//!
//! ## Flow
//!
//! 1. Seat every peer (`seat`). The host plays player 0 as [`HOST_PEER`],
//!    which is seated from the start.
//! 2. `start` tells each peer its seat and sends the first snapshot.
//! 3. `run` processes inbound frames one at a time. Each intent runs to
//!    completion before the next is read, so resolutions never interleave.
//! 4. After a mutation the broadcast timer restarts; when it fires one
//!    snapshot goes to every peer.
//!
//! While `run` owns the authority, the host's own intents travel the same
//! inbox as everyone else's, sent from [`HOST_PEER`]. The host only gets
//! snapshots if its transport has a link for `HOST_PEER`.
//!
//! Bad frames, wrong claimed seats, stale interaction ids and illegal
//! intents are logged and dropped. Nothing a peer sends can stop the loop.

use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{sleep, sleep_until, Instant};

use super::message::{ActionRequest, Message};
use super::transport::{Inbound, Transport};
use super::PeerId;
use crate::core::{Action, PlayerId, ReplicationConfig};
use crate::error::{GameError, Result};
use crate::interaction::{InteractionId, Response};
use crate::rules::{Game, RulesEngine};

/// The seat the host plays from.
pub const HOST_SEAT: PlayerId = PlayerId::new(0);

/// The peer id the host sends its own intents from.
pub const HOST_PEER: PeerId = PeerId(0);

/// What processing one intent did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    /// Dropped or rejected; nothing changed.
    Ignored,
    /// The game changed.
    Mutated,
    /// A turn was cleaned up and still has to be handed over.
    CleanedUp,
}

/// Owns the game and keeps every peer's mirror in step with it.
pub struct Authority<T: Transport> {
    game: Game,
    transport: T,
    config: ReplicationConfig,
    seats: FxHashMap<PeerId, PlayerId>,
    /// Mutated since the last broadcast.
    dirty: bool,
    broadcasts: u64,
}

impl<T: Transport> Authority<T> {
    #[must_use]
    pub fn new(game: Game, transport: T, config: ReplicationConfig) -> Self {
        let mut seats = FxHashMap::default();
        seats.insert(HOST_PEER, HOST_SEAT);
        Self {
            game,
            transport,
            config,
            seats,
            dirty: false,
            broadcasts: 0,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Snapshots sent so far (one per broadcast, not per peer).
    #[must_use]
    pub fn broadcasts(&self) -> u64 {
        self.broadcasts
    }

    /// Give `peer` the next free seat. Remote peers fill seats 1 and up.
    pub fn seat(&mut self, peer: PeerId) -> Result<PlayerId> {
        if let Some(&seat) = self.seats.get(&peer) {
            return Ok(seat);
        }
        // The host already holds seat 0.
        let next = self.seats.len();
        if next >= self.game.state().player_count() {
            return Err(GameError::TableFull);
        }
        let seat = PlayerId::new(next as u8);
        self.seats.insert(peer, seat);
        debug!("{} seated as {}", peer, seat);
        Ok(seat)
    }

    #[must_use]
    pub fn seat_of(&self, peer: PeerId) -> Option<PlayerId> {
        self.seats.get(&peer).copied()
    }

    /// Tell every seated peer its seat, then send the opening snapshot.
    pub fn start(&mut self) {
        for peer in self.recipients() {
            if let Some(player) = self.seat_of(peer) {
                self.send(peer, &Message::StartGame { player });
            }
        }
        info!("game started with {} remote peer(s)", self.seats.len() - 1);
        self.broadcast();
    }

    /// Send the current snapshot to every seated peer.
    pub fn broadcast(&mut self) {
        let msg = Message::StateUpdate(Box::new(self.game.snapshot()));
        let frame = match msg.encode() {
            Ok(frame) => frame,
            Err(err) => {
                warn!("could not encode snapshot: {}", err);
                return;
            }
        };

        for peer in self.recipients() {
            if let Err(err) = self.transport.send(peer, frame.clone()) {
                warn!("broadcast to {} failed: {}", peer, err);
            }
        }
        self.dirty = false;
        self.broadcasts += 1;
        debug!("broadcast #{} ({} bytes)", self.broadcasts, frame.len());
    }

    /// Decode and apply one inbound frame, ending turns in one step.
    /// Returns whether the game changed. Does not broadcast.
    pub fn handle_frame(&mut self, inbound: Inbound) -> bool {
        match Message::decode(&inbound.frame) {
            Ok(msg) => self.handle(inbound.from, msg),
            Err(err) => {
                warn!("dropping undecodable frame from {}: {}", inbound.from, err);
                false
            }
        }
    }

    /// Apply one message from `from`, ending turns in one step.
    /// Returns whether the game changed. Does not broadcast.
    pub fn handle(&mut self, from: PeerId, msg: Message) -> bool {
        match self.process(from, msg, false) {
            Outcome::Ignored => false,
            Outcome::Mutated | Outcome::CleanedUp => true,
        }
    }

    /// A turn action from the host's own seat.
    pub fn submit_local(&mut self, action: Action) -> Result<()> {
        self.game.apply_action(HOST_SEAT, &action)?;
        self.dirty = true;
        Ok(())
    }

    /// An answer from the host's own seat.
    pub fn resolve_local(&mut self, id: InteractionId, response: &Response) -> Result<()> {
        self.game.resolve_interaction(HOST_SEAT, id, response)?;
        self.dirty = true;
        Ok(())
    }

    /// Broadcast if anything changed since the last broadcast.
    pub fn flush(&mut self) {
        if self.dirty {
            self.broadcast();
        }
    }

    /// Serve `inbox` until every sender is gone.
    ///
    /// Broadcasts are debounced: each mutation restarts the window, and one
    /// snapshot goes out when it expires. An `EndTurn` with a non-zero
    /// end-of-turn delay broadcasts the cleanup, waits, then hands over the
    /// turn before reading the next frame.
    pub async fn run(mut self, mut inbox: UnboundedReceiver<Inbound>) -> Self {
        let paced = !self.config.end_turn_delay.is_zero();
        let mut deadline: Option<Instant> = None;
        if self.dirty {
            deadline = Some(Instant::now() + self.config.broadcast_debounce);
        }

        loop {
            tokio::select! {
                inbound = inbox.recv() => {
                    let Some(inbound) = inbound else { break };
                    let outcome = match Message::decode(&inbound.frame) {
                        Ok(msg) => self.process(inbound.from, msg, paced),
                        Err(err) => {
                            warn!("dropping undecodable frame from {}: {}", inbound.from, err);
                            Outcome::Ignored
                        }
                    };

                    if outcome == Outcome::CleanedUp {
                        self.broadcast();
                        sleep(self.config.end_turn_delay).await;
                        self.game.advance_turn();
                        self.dirty = true;
                    }
                    if outcome != Outcome::Ignored {
                        deadline = Some(Instant::now() + self.config.broadcast_debounce);
                    }
                }
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    deadline = None;
                    self.flush();
                }
            }
        }

        self.flush();
        info!("authority inbox closed after {} broadcasts", self.broadcasts);
        self
    }

    fn process(&mut self, from: PeerId, msg: Message, paced: bool) -> Outcome {
        let Some(seat) = self.seat_of(from) else {
            warn!("dropping {} from unseated {}", msg.kind(), from);
            return Outcome::Ignored;
        };

        let result = match msg {
            Message::Action(ActionRequest { player, action }) => {
                let current = self.game.state().current_player;
                if player != current {
                    warn!("{} claimed {} but it is {}'s turn; dropped", from, player, current);
                    return Outcome::Ignored;
                }
                if player != seat {
                    warn!("{} holds {} but claimed {}; dropped", from, seat, player);
                    return Outcome::Ignored;
                }
                if paced && action == Action::EndTurn {
                    match self.game.cleanup_turn(player) {
                        Ok(()) => return Outcome::CleanedUp,
                        Err(err) => Err(err),
                    }
                } else {
                    self.game.apply_action(player, &action)
                }
            }
            Message::ResolveInteraction { id, response } => {
                match self.game.resolve_interaction(seat, id, &response) {
                    Err(err @ (GameError::StaleInteraction(_) | GameError::NoInteraction)) => {
                        warn!("{} answered interaction {}: {}; dropped", from, id, err);
                        return Outcome::Ignored;
                    }
                    other => other,
                }
            }
            other @ (Message::StateUpdate(_) | Message::StartGame { .. }) => {
                warn!("authority ignores {} from {}", other.kind(), from);
                return Outcome::Ignored;
            }
        };

        match result {
            Ok(()) => {
                self.dirty = true;
                Outcome::Mutated
            }
            Err(err) => {
                debug!("rejected intent from {}: {}", from, err);
                Outcome::Ignored
            }
        }
    }

    /// Seated peers in seat order. The host is left out unless the
    /// transport has a link for it.
    fn recipients(&self) -> Vec<PeerId> {
        let host_linked = self.transport.peers().contains(&HOST_PEER);
        let mut peers: Vec<_> = self
            .seats
            .keys()
            .copied()
            .filter(|&peer| peer != HOST_PEER || host_linked)
            .collect();
        peers.sort_unstable();
        peers
    }

    fn send(&self, peer: PeerId, msg: &Message) {
        let sent = msg.encode().and_then(|frame| self.transport.send(peer, frame));
        if let Err(err) = sent {
            warn!("sending {} to {} failed: {}", msg.kind(), peer, err);
        }
    }
}
