//! FIFO of pending interactions. Only the head is active.

use std::collections::VecDeque;

use super::{Interaction, InteractionId, InteractionView};
use crate::cards::CardId;

/// Ordered queue of pending interactions.
///
/// Ids are assigned on enqueue and never reused within a game, so a
/// resolution naming an id that has already been popped is recognisably
/// stale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionQueue {
    items: VecDeque<Interaction>,
    next_id: u64,
}

impl InteractionQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the tail, assigning a fresh id.
    pub fn enqueue(&mut self, mut interaction: Interaction) -> InteractionId {
        let id = InteractionId(self.next_id);
        self.next_id += 1;
        interaction.id = id;
        self.items.push_back(interaction);
        id
    }

    /// The active interaction, if any.
    #[must_use]
    pub fn head(&self) -> Option<&Interaction> {
        self.items.front()
    }

    /// Remove and return the active interaction.
    pub fn pop_head(&mut self) -> Option<Interaction> {
        self.items.pop_front()
    }

    /// Drop everything still pending. Ids keep counting up.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interaction> {
        self.items.iter()
    }

    /// Callback-free projections, head first.
    #[must_use]
    pub fn views(&self) -> Vec<InteractionView> {
        self.items.iter().map(Interaction::view).collect()
    }

    /// Cards held only by pending interactions (revealed but not yet placed).
    pub fn held_cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.items
            .iter()
            .filter(|i| i.decision.holds_options())
            .flat_map(|i| i.options.iter().copied())
    }
}
