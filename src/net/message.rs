//! Wire messages and their bincode codec.

use serde::{Deserialize, Serialize};

use crate::core::{Action, PlayerId, Snapshot};
use crate::error::Result;
use crate::interaction::{InteractionId, Response};

/// A turn action, with the seat the sender claims to be.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub player: PlayerId,
    pub action: Action,
}

/// Everything exchanged between authority and participants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Authority -> all: the full replicated board.
    StateUpdate(Box<Snapshot>),
    /// Authority -> one participant: its seat.
    StartGame { player: PlayerId },
    /// Participant -> authority: a turn action.
    Action(ActionRequest),
    /// Participant -> authority: an answer to the head interaction.
    ResolveInteraction { id: InteractionId, response: Response },
}

impl Message {
    /// Encode for the wire.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a frame from the wire.
    pub fn decode(frame: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(frame)?)
    }

    /// Short name for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Message::StateUpdate(_) => "StateUpdate",
            Message::StartGame { .. } => "StartGame",
            Message::Action(_) => "Action",
            Message::ResolveInteraction { .. } => "ResolveInteraction",
        }
    }
}
