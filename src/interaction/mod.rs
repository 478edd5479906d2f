//! Pending decisions and the queue that gates play on them.
//!
//! ## Design
//!
//! An `Interaction` is a decision some player must make before play can
//! continue: pick cards from a hand, pick a supply pile, pick from a
//! revealed list, or accept/decline. What happens with the answer is a
//! tagged [`Decision`] dispatched by the effect resolver, not a closure, so
//! the whole record is plain data.
//!
//! Participants only ever see an [`InteractionView`]: the same record with
//! the `Decision` stripped.
//!
//! ## Lifecycle
//!
//! 1. The resolver builds an `Interaction` and enqueues it (the queue
//!    assigns the id).
//! 2. The target player answers with a [`Response`].
//! 3. The answer is validated against the head; on success the head is
//!    popped and its decision applied, which may enqueue follow-ups.

mod filter;
mod queue;

pub use filter::CardFilter;
pub use queue::InteractionQueue;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::PlayerId;
use crate::error::{GameError, Result};

/// Unique interaction identifier, assigned on enqueue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InteractionId(pub u64);

impl std::fmt::Display for InteractionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What kind of answer an interaction expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionKind {
    /// Pick cards from the target player's own hand.
    HandSelection,
    /// Pick one pile from the supply (indices into `options`).
    SupplySelection,
    /// Pick from an explicit list of cards (indices into `options`).
    CustomSelection,
    /// Accept or decline; nothing to pick.
    Confirmation,
}

/// How the answer to an interaction is applied.
///
/// One variant per decision step; chained effects (trash-then-gain,
/// gain-then-topdeck, trash-then-discard) are separate variants queued one
/// after the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Discard the chosen cards, then draw as many.
    CellarDiscard,
    /// Trash the chosen cards.
    ChapelTrash,
    /// Trash some of the revealed cards (held in `options`).
    SentryTrash,
    /// Discard some of what Sentry kept; the rest goes back on the deck.
    SentryDiscard,
    /// Move the chosen discard-pile card onto the deck.
    HarbingerTopdeck,
    /// Play the revealed card from the discard pile.
    VassalPlay { card: CardId },
    /// Gain the chosen pile to the discard pile.
    WorkshopGain,
    /// Gain the chosen pile to hand, then topdeck a card.
    ArtisanGain,
    /// Put the chosen hand card on the deck.
    ArtisanTopdeck,
    /// Trash the chosen Treasure, then gain a better one.
    MineTrash,
    /// Gain the chosen Treasure to hand.
    MineGain,
    /// Trash the chosen card, then gain one costing up to 2 more.
    RemodelTrash,
    /// Gain the chosen pile to the discard pile.
    RemodelGain,
    /// Trash a Copper for +3 coin, or nothing.
    MoneylenderTrash,
    /// Discard the chosen cards.
    PoacherDiscard,
    /// Discard down to three.
    MilitiaDiscard,
    /// Reveal the top two cards and lose a non-Copper Treasure.
    BanditReveal { attacker: PlayerId },
    /// Put the chosen Victory card on the deck.
    BureaucratTopdeck,
}

impl Decision {
    /// Does this decision own the cards listed in `options`?
    ///
    /// Sentry's revealed cards live only in the interaction until it is
    /// answered; every other option list is a view of a real zone or pile.
    #[must_use]
    pub fn holds_options(&self) -> bool {
        matches!(self, Decision::SentryTrash | Decision::SentryDiscard)
    }
}

/// An answer to the head interaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// Positions chosen in the hand or option list.
    Select(SmallVec<[usize; 4]>),
    /// Accept a confirmation.
    Accept,
    /// Decline a confirmation.
    Decline,
}

impl Response {
    /// Select these positions.
    pub fn select(indices: impl IntoIterator<Item = usize>) -> Self {
        Response::Select(indices.into_iter().collect())
    }

    /// Select nothing.
    #[must_use]
    pub fn none() -> Self {
        Response::Select(SmallVec::new())
    }
}

/// A validated answer, mapped to concrete cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Chosen cards, in the order they were chosen.
    pub cards: Vec<CardId>,
    /// Their positions in the hand or option list.
    pub indices: Vec<usize>,
    /// Confirmation answer (`true` for selections).
    pub accepted: bool,
}

/// A pending decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interaction {
    pub id: InteractionId,
    pub kind: InteractionKind,
    /// What caused it, for display ("Militia Attack (Player 2)").
    pub source: String,
    /// Who must answer.
    pub target: PlayerId,
    /// Fewest cards to pick.
    pub min: usize,
    /// Most cards to pick; `None` for no limit.
    pub max: Option<usize>,
    pub filter: CardFilter,
    /// Supply piles or revealed cards to pick from.
    pub options: Vec<CardId>,
    /// Short instruction for the UI.
    pub prompt: String,
    pub decision: Decision,
}

impl Interaction {
    fn new(kind: InteractionKind, decision: Decision, source: impl Into<String>, target: PlayerId) -> Self {
        Self {
            id: InteractionId::default(),
            kind,
            source: source.into(),
            target,
            min: 1,
            max: Some(1),
            filter: CardFilter::Any,
            options: Vec::new(),
            prompt: String::new(),
            decision,
        }
    }

    /// Pick cards from the target's hand.
    pub fn hand(decision: Decision, source: impl Into<String>, target: PlayerId) -> Self {
        Self::new(InteractionKind::HandSelection, decision, source, target)
    }

    /// Pick one of the listed supply piles.
    pub fn supply(
        decision: Decision,
        source: impl Into<String>,
        target: PlayerId,
        piles: Vec<CardId>,
    ) -> Self {
        Self::new(InteractionKind::SupplySelection, decision, source, target).with_options(piles)
    }

    /// Pick from an explicit list of cards.
    pub fn custom(
        decision: Decision,
        source: impl Into<String>,
        target: PlayerId,
        cards: Vec<CardId>,
    ) -> Self {
        Self::new(InteractionKind::CustomSelection, decision, source, target).with_options(cards)
    }

    /// Accept or decline.
    pub fn confirm(decision: Decision, source: impl Into<String>, target: PlayerId) -> Self {
        Self::new(InteractionKind::Confirmation, decision, source, target).count(0, Some(0))
    }

    #[must_use]
    pub fn count(mut self, min: usize, max: Option<usize>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn exactly(self, n: usize) -> Self {
        self.count(n, Some(n))
    }

    #[must_use]
    pub fn filter(mut self, filter: CardFilter) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    fn with_options(mut self, options: Vec<CardId>) -> Self {
        self.options = options;
        self
    }

    /// The callback-free projection shown to participants.
    #[must_use]
    pub fn view(&self) -> InteractionView {
        InteractionView {
            id: self.id,
            kind: self.kind,
            source: self.source.clone(),
            target: self.target,
            min: self.min,
            max: self.max,
            filter: self.filter,
            options: self.options.clone(),
            prompt: self.prompt.clone(),
        }
    }

    /// Validate `response` and map it onto `pool`.
    ///
    /// `pool` is the target's hand for hand selections and `options`
    /// otherwise. Checks the response kind, the count bounds, index range and
    /// uniqueness, and the filter. Does not mutate anything.
    pub fn validate(&self, response: &Response, pool: &[CardId]) -> Result<Selection> {
        match (self.kind, response) {
            (InteractionKind::Confirmation, Response::Accept) => Ok(Selection {
                accepted: true,
                ..Selection::default()
            }),
            (InteractionKind::Confirmation, Response::Decline) => Ok(Selection::default()),
            (InteractionKind::Confirmation, Response::Select(_)) => Err(GameError::WrongResponse),
            (_, Response::Accept | Response::Decline) => Err(GameError::WrongResponse),
            (_, Response::Select(indices)) => {
                let got = indices.len();
                if got < self.min || self.max.is_some_and(|max| got > max) {
                    return Err(GameError::SelectionCount {
                        min: self.min,
                        max: self.max,
                        got,
                    });
                }

                let mut cards = Vec::with_capacity(got);
                for (n, &i) in indices.iter().enumerate() {
                    if indices[..n].contains(&i) {
                        return Err(GameError::DuplicateSelection(i));
                    }
                    let card = *pool.get(i).ok_or(GameError::SelectionOutOfRange(i))?;
                    if !self.filter.allows(card) {
                        return Err(GameError::FilterRejected {
                            card,
                            filter: self.filter,
                        });
                    }
                    cards.push(card);
                }

                Ok(Selection {
                    cards,
                    indices: indices.to_vec(),
                    accepted: true,
                })
            }
        }
    }
}

/// What a participant sees of an interaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionView {
    pub id: InteractionId,
    pub kind: InteractionKind,
    pub source: String,
    pub target: PlayerId,
    pub min: usize,
    pub max: Option<usize>,
    pub filter: CardFilter,
    pub options: Vec<CardId>,
    pub prompt: String,
}
