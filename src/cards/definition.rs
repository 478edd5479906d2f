//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: cost,
//! categories and the sparse set of numeric effects. Copies of the same
//! card are interchangeable, so zones store only the `CardId` and look the
//! definition up in the catalog when they need it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::catalog;
use super::category::Category;
use crate::error::GameError;

/// Identifier for a card.
///
/// One variant per card in the catalog. Serialized in `snake_case`
/// (`throne_room`, `council_room`, ...), which is also the string key
/// accepted by [`CardId::from_str`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardId {
    // Base cards
    Copper,
    Silver,
    Gold,
    Estate,
    Duchy,
    Province,
    Curse,
    // Kingdom cards
    Cellar,
    Chapel,
    Moat,
    Harbinger,
    Merchant,
    Vassal,
    Village,
    Workshop,
    Bureaucrat,
    Gardens,
    Militia,
    Moneylender,
    Poacher,
    Remodel,
    Smithy,
    ThroneRoom,
    Bandit,
    CouncilRoom,
    Festival,
    Laboratory,
    Library,
    Market,
    Mine,
    Sentry,
    Witch,
    Artisan,
}

impl CardId {
    /// Every card, in catalog order.
    pub const ALL: [CardId; 33] = [
        CardId::Copper,
        CardId::Silver,
        CardId::Gold,
        CardId::Estate,
        CardId::Duchy,
        CardId::Province,
        CardId::Curse,
        CardId::Cellar,
        CardId::Chapel,
        CardId::Moat,
        CardId::Harbinger,
        CardId::Merchant,
        CardId::Vassal,
        CardId::Village,
        CardId::Workshop,
        CardId::Bureaucrat,
        CardId::Gardens,
        CardId::Militia,
        CardId::Moneylender,
        CardId::Poacher,
        CardId::Remodel,
        CardId::Smithy,
        CardId::ThroneRoom,
        CardId::Bandit,
        CardId::CouncilRoom,
        CardId::Festival,
        CardId::Laboratory,
        CardId::Library,
        CardId::Market,
        CardId::Mine,
        CardId::Sentry,
        CardId::Witch,
        CardId::Artisan,
    ];

    /// Look up this card's static definition.
    #[must_use]
    pub fn def(self) -> &'static CardDefinition {
        catalog::by_id(self)
    }

    /// Stable string key (`"throne_room"`).
    #[must_use]
    pub fn key(self) -> &'static str {
        self.def().key
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.def().name)
    }
}

impl FromStr for CardId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardId::ALL
            .iter()
            .copied()
            .find(|id| id.key() == s)
            .ok_or_else(|| GameError::UnknownCard(s.to_string()))
    }
}

/// Static card definition.
///
/// Numeric effect fields default to zero; only the ones a card uses are set.
///
/// ## Example
///
/// ```
/// use wickinion::cards::{CardId, Category};
///
/// let market = CardId::Market.def();
/// assert_eq!(market.cost, 5);
/// assert_eq!((market.cards, market.actions, market.buys, market.coin), (1, 1, 1, 1));
/// assert!(market.is(Category::Action));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDefinition {
    /// Identifier.
    pub id: CardId,
    /// String key used on the wire and in kingdom presets.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Categories (at least one).
    pub categories: &'static [Category],
    /// Acquisition cost in coin.
    pub cost: u32,
    /// +Actions when played.
    pub actions: u32,
    /// +Buys when played.
    pub buys: u32,
    /// +Coin when played (Action cards).
    pub coin: u32,
    /// +Cards drawn when played.
    pub cards: u32,
    /// Coin produced when played as a Treasure.
    pub treasure: u32,
    /// Victory points (negative for Curse).
    pub points: i32,
}

impl CardDefinition {
    /// Create a definition with no numeric effects.
    #[must_use]
    pub const fn new(
        id: CardId,
        key: &'static str,
        name: &'static str,
        categories: &'static [Category],
        cost: u32,
    ) -> Self {
        Self {
            id,
            key,
            name,
            categories,
            cost,
            actions: 0,
            buys: 0,
            coin: 0,
            cards: 0,
            treasure: 0,
            points: 0,
        }
    }

    #[must_use]
    pub const fn actions(mut self, n: u32) -> Self {
        self.actions = n;
        self
    }

    #[must_use]
    pub const fn buys(mut self, n: u32) -> Self {
        self.buys = n;
        self
    }

    #[must_use]
    pub const fn coin(mut self, n: u32) -> Self {
        self.coin = n;
        self
    }

    #[must_use]
    pub const fn cards(mut self, n: u32) -> Self {
        self.cards = n;
        self
    }

    #[must_use]
    pub const fn treasure(mut self, n: u32) -> Self {
        self.treasure = n;
        self
    }

    #[must_use]
    pub const fn points(mut self, n: i32) -> Self {
        self.points = n;
        self
    }

    /// Does this card carry the given category?
    #[must_use]
    pub fn is(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Action or Reaction: played during the Action phase, costs an action.
    #[must_use]
    pub fn is_action(&self) -> bool {
        self.categories.iter().any(|c| c.is_playable_action())
    }

    #[must_use]
    pub fn is_treasure(&self) -> bool {
        self.is(Category::Treasure)
    }

    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.is(Category::Victory)
    }
}
