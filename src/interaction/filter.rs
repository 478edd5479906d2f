//! Selection filters.
//!
//! A filter is plain data, so it replicates with the interaction and a
//! participant can grey out cards it would reject.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Category};

/// Which cards a selection may contain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFilter {
    /// No restriction.
    #[default]
    Any,
    /// Cost at most this much.
    CostAtMost(u32),
    /// Carries this category.
    Category(Category),
    /// A Treasure costing at most this much.
    TreasureCostAtMost(u32),
    /// Exactly this card.
    Card(CardId),
}

impl CardFilter {
    /// Does `card` pass this filter?
    #[must_use]
    pub fn allows(&self, card: CardId) -> bool {
        let def = card.def();
        match *self {
            CardFilter::Any => true,
            CardFilter::CostAtMost(max) => def.cost <= max,
            CardFilter::Category(category) => def.is(category),
            CardFilter::TreasureCostAtMost(max) => def.is_treasure() && def.cost <= max,
            CardFilter::Card(id) => card == id,
        }
    }
}

impl std::fmt::Display for CardFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFilter::Any => f.write_str("any card"),
            CardFilter::CostAtMost(max) => write!(f, "cost up to {}", max),
            CardFilter::Category(category) => write!(f, "a {} card", category),
            CardFilter::TreasureCostAtMost(max) => write!(f, "a Treasure costing up to {}", max),
            CardFilter::Card(id) => write!(f, "a {}", id),
        }
    }
}
