//! The card catalog.
//!
//! A static table with one `CardDefinition` per `CardId`, stored in the
//! same order as the enum so lookup is a plain index.

use super::category::Category;
use super::definition::{CardDefinition, CardId};

const TREASURE: &[Category] = &[Category::Treasure];
const VICTORY: &[Category] = &[Category::Victory];
const CURSE: &[Category] = &[Category::Curse];
const ACTION: &[Category] = &[Category::Action];
const ACTION_REACTION: &[Category] = &[Category::Action, Category::Reaction];

static CATALOG: [CardDefinition; 33] = [
    CardDefinition::new(CardId::Copper, "copper", "Copper", TREASURE, 0).treasure(1),
    CardDefinition::new(CardId::Silver, "silver", "Silver", TREASURE, 3).treasure(2),
    CardDefinition::new(CardId::Gold, "gold", "Gold", TREASURE, 6).treasure(3),
    CardDefinition::new(CardId::Estate, "estate", "Estate", VICTORY, 2).points(1),
    CardDefinition::new(CardId::Duchy, "duchy", "Duchy", VICTORY, 5).points(3),
    CardDefinition::new(CardId::Province, "province", "Province", VICTORY, 8).points(6),
    CardDefinition::new(CardId::Curse, "curse", "Curse", CURSE, 0).points(-1),
    CardDefinition::new(CardId::Cellar, "cellar", "Cellar", ACTION, 2).actions(1),
    CardDefinition::new(CardId::Chapel, "chapel", "Chapel", ACTION, 2),
    CardDefinition::new(CardId::Moat, "moat", "Moat", ACTION_REACTION, 2).cards(2),
    CardDefinition::new(CardId::Harbinger, "harbinger", "Harbinger", ACTION, 3)
        .cards(1)
        .actions(1),
    CardDefinition::new(CardId::Merchant, "merchant", "Merchant", ACTION, 3)
        .cards(1)
        .actions(1),
    CardDefinition::new(CardId::Vassal, "vassal", "Vassal", ACTION, 3).coin(2),
    CardDefinition::new(CardId::Village, "village", "Village", ACTION, 3)
        .cards(1)
        .actions(2),
    CardDefinition::new(CardId::Workshop, "workshop", "Workshop", ACTION, 3),
    CardDefinition::new(CardId::Bureaucrat, "bureaucrat", "Bureaucrat", ACTION, 4),
    CardDefinition::new(CardId::Gardens, "gardens", "Gardens", VICTORY, 4),
    CardDefinition::new(CardId::Militia, "militia", "Militia", ACTION, 4).coin(2),
    CardDefinition::new(CardId::Moneylender, "moneylender", "Moneylender", ACTION, 4),
    CardDefinition::new(CardId::Poacher, "poacher", "Poacher", ACTION, 4)
        .cards(1)
        .actions(1)
        .coin(1),
    CardDefinition::new(CardId::Remodel, "remodel", "Remodel", ACTION, 4),
    CardDefinition::new(CardId::Smithy, "smithy", "Smithy", ACTION, 4).cards(3),
    CardDefinition::new(CardId::ThroneRoom, "throne_room", "Throne Room", ACTION, 4),
    CardDefinition::new(CardId::Bandit, "bandit", "Bandit", ACTION, 5),
    CardDefinition::new(CardId::CouncilRoom, "council_room", "Council Room", ACTION, 5)
        .cards(4)
        .buys(1),
    CardDefinition::new(CardId::Festival, "festival", "Festival", ACTION, 5)
        .actions(2)
        .buys(1)
        .coin(2),
    CardDefinition::new(CardId::Laboratory, "laboratory", "Laboratory", ACTION, 5)
        .cards(2)
        .actions(1),
    CardDefinition::new(CardId::Library, "library", "Library", ACTION, 5),
    CardDefinition::new(CardId::Market, "market", "Market", ACTION, 5)
        .cards(1)
        .actions(1)
        .buys(1)
        .coin(1),
    CardDefinition::new(CardId::Mine, "mine", "Mine", ACTION, 5),
    CardDefinition::new(CardId::Sentry, "sentry", "Sentry", ACTION, 5)
        .cards(1)
        .actions(1),
    CardDefinition::new(CardId::Witch, "witch", "Witch", ACTION, 5).cards(2),
    CardDefinition::new(CardId::Artisan, "artisan", "Artisan", ACTION, 6),
];

/// Get a card definition by identifier.
#[must_use]
pub fn by_id(id: CardId) -> &'static CardDefinition {
    &CATALOG[id as usize]
}

/// Iterate over all card definitions in catalog order.
pub fn iter() -> impl Iterator<Item = &'static CardDefinition> {
    CATALOG.iter()
}

/// Find cards matching a predicate.
pub fn find<F>(predicate: F) -> impl Iterator<Item = &'static CardDefinition>
where
    F: Fn(&CardDefinition) -> bool,
{
    CATALOG.iter().filter(move |c| predicate(c))
}
