//! Card-specific behavior beyond static bonuses.
//!
//! One variant per card with special behavior, matched exhaustively, so
//! adding a card to the enum without handling it is a compile error.

use log::debug;

use super::resolver::{list, Resolver};
use crate::cards::{CardId, Category};
use crate::core::PlayerId;
use crate::interaction::{CardFilter, Decision, Interaction};
use crate::zones::Zone;

/// Hand size Library draws up to.
pub const LIBRARY_HAND_SIZE: usize = 7;

/// Hand size Militia forces opponents down to.
pub const MILITIA_HAND_SIZE: usize = 3;

/// Cards with behavior beyond their static bonuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialEffect {
    Cellar,
    Chapel,
    Sentry,
    Library,
    Harbinger,
    Vassal,
    Workshop,
    Artisan,
    Mine,
    Remodel,
    Moneylender,
    Poacher,
    Militia,
    Bandit,
    CouncilRoom,
    Bureaucrat,
    ThroneRoom,
    Witch,
}

impl SpecialEffect {
    /// The special effect of `card`, if it has one.
    #[must_use]
    pub fn of(card: CardId) -> Option<Self> {
        Some(match card {
            CardId::Cellar => SpecialEffect::Cellar,
            CardId::Chapel => SpecialEffect::Chapel,
            CardId::Sentry => SpecialEffect::Sentry,
            CardId::Library => SpecialEffect::Library,
            CardId::Harbinger => SpecialEffect::Harbinger,
            CardId::Vassal => SpecialEffect::Vassal,
            CardId::Workshop => SpecialEffect::Workshop,
            CardId::Artisan => SpecialEffect::Artisan,
            CardId::Mine => SpecialEffect::Mine,
            CardId::Remodel => SpecialEffect::Remodel,
            CardId::Moneylender => SpecialEffect::Moneylender,
            CardId::Poacher => SpecialEffect::Poacher,
            CardId::Militia => SpecialEffect::Militia,
            CardId::Bandit => SpecialEffect::Bandit,
            CardId::CouncilRoom => SpecialEffect::CouncilRoom,
            CardId::Bureaucrat => SpecialEffect::Bureaucrat,
            CardId::ThroneRoom => SpecialEffect::ThroneRoom,
            CardId::Witch => SpecialEffect::Witch,
            CardId::Copper
            | CardId::Silver
            | CardId::Gold
            | CardId::Estate
            | CardId::Duchy
            | CardId::Province
            | CardId::Curse
            | CardId::Moat
            | CardId::Merchant
            | CardId::Village
            | CardId::Gardens
            | CardId::Smithy
            | CardId::Festival
            | CardId::Laboratory
            | CardId::Market => return None,
        })
    }
}

impl Resolver<'_> {
    /// Run `effect` for `player` once.
    pub(super) fn special(&mut self, player: PlayerId, effect: SpecialEffect) {
        match effect {
            SpecialEffect::Cellar => self.offer(
                Interaction::hand(Decision::CellarDiscard, "Cellar", player)
                    .count(0, None)
                    .prompt("Discard any number of cards, then draw that many"),
            ),
            SpecialEffect::Chapel => self.offer(
                Interaction::hand(Decision::ChapelTrash, "Chapel", player)
                    .count(0, Some(4))
                    .prompt("Trash up to 4 cards"),
            ),
            SpecialEffect::Sentry => {
                let revealed = self.reveal(player, 2);
                if revealed.is_empty() {
                    return;
                }
                let n = revealed.len();
                let line = format!("{} reveals {}", self.state.players[player].name, list(&revealed));
                self.log(line);
                self.offer(
                    Interaction::custom(Decision::SentryTrash, "Sentry", player, revealed)
                        .count(0, Some(n))
                        .prompt("Trash any of the revealed cards"),
                );
            }
            SpecialEffect::Library => {
                let short = LIBRARY_HAND_SIZE.saturating_sub(self.state.players[player].hand.len());
                self.draw(player, short);
            }
            SpecialEffect::Harbinger => {
                let discard = self.state.players[player].discard.clone();
                self.offer(
                    Interaction::custom(Decision::HarbingerTopdeck, "Harbinger", player, discard)
                        .exactly(1)
                        .prompt("Put a card from your discard pile onto your deck"),
                );
            }
            SpecialEffect::Vassal => {
                let revealed = self.reveal(player, 1);
                let Some(&card) = revealed.first() else {
                    return;
                };
                let p = &mut self.state.players[player];
                p.discard.push(card);
                let line = format!("{} discards {} from the deck", p.name, card);
                self.log(line);
                if card.def().is_action() {
                    self.offer(
                        Interaction::confirm(Decision::VassalPlay { card }, format!("Vassal ({})", card), player)
                            .prompt(format!("Play {} from your discard pile?", card)),
                    );
                }
            }
            SpecialEffect::Workshop => self.offer_gain(player, Decision::WorkshopGain, "Workshop", CardFilter::CostAtMost(4)),
            SpecialEffect::Artisan => self.offer_gain(player, Decision::ArtisanGain, "Artisan", CardFilter::CostAtMost(5)),
            SpecialEffect::Mine => self.offer(
                Interaction::hand(Decision::MineTrash, "Mine", player)
                    .filter(CardFilter::Category(Category::Treasure))
                    .prompt("Trash a Treasure from your hand"),
            ),
            SpecialEffect::Remodel => self.offer(
                Interaction::hand(Decision::RemodelTrash, "Remodel", player).prompt("Trash a card from your hand"),
            ),
            SpecialEffect::Moneylender => self.offer(
                Interaction::hand(Decision::MoneylenderTrash, "Moneylender", player)
                    .count(0, Some(1))
                    .filter(CardFilter::Card(CardId::Copper))
                    .prompt("You may trash a Copper for +3 coin"),
            ),
            SpecialEffect::Poacher => {
                let empty = self.state.supply.empty_piles();
                let hand = self.state.players[player].hand.len();
                let n = empty.min(hand);
                if n > 0 {
                    self.offer(
                        Interaction::hand(Decision::PoacherDiscard, "Poacher", player)
                            .exactly(n)
                            .prompt(format!("Discard {} card(s)", n)),
                    );
                }
            }
            SpecialEffect::Militia => {
                let source = format!("Militia Attack ({})", self.state.players[player].name);
                for other in self.undefended(player) {
                    let hand = self.state.players[other].hand.len();
                    let already = self
                        .state
                        .interactions
                        .iter()
                        .any(|i| i.target == other && i.decision == Decision::MilitiaDiscard);
                    if hand > MILITIA_HAND_SIZE && !already {
                        self.offer(
                            Interaction::hand(Decision::MilitiaDiscard, source.clone(), other)
                                .exactly(hand - MILITIA_HAND_SIZE)
                                .prompt(format!("Discard down to {} cards", MILITIA_HAND_SIZE)),
                        );
                    }
                }
            }
            SpecialEffect::Bandit => {
                let source = format!("Bandit Attack ({})", self.state.players[player].name);
                for other in self.undefended(player) {
                    self.offer(
                        Interaction::confirm(Decision::BanditReveal { attacker: player }, source.clone(), other)
                            .prompt("Reveal the top 2 cards of your deck"),
                    );
                }
            }
            SpecialEffect::CouncilRoom => {
                for other in self.state.others(player) {
                    self.draw(other, 1);
                }
            }
            SpecialEffect::Bureaucrat => {
                if self.gain(player, CardId::Silver, Zone::Deck).is_err() {
                    debug!("no Silver left for {}'s Bureaucrat", player);
                }
                let source = format!("Bureaucrat Attack ({})", self.state.players[player].name);
                for other in self.undefended(player) {
                    if self.state.players[other].has_category_in_hand(Category::Victory) {
                        self.offer(
                            Interaction::hand(Decision::BureaucratTopdeck, source.clone(), other)
                                .filter(CardFilter::Category(Category::Victory))
                                .prompt("Put a Victory card onto your deck"),
                        );
                    }
                }
            }
            SpecialEffect::ThroneRoom => {
                *self.pending_multiplier = 2;
                debug!("{} primed Throne Room", player);
            }
            SpecialEffect::Witch => {
                for other in self.undefended(player) {
                    if self.gain(other, CardId::Curse, Zone::Discard).is_err() {
                        break;
                    }
                }
            }
        }
    }

    /// Offer a single supply pile passing `filter`.
    pub(super) fn offer_gain(&mut self, player: PlayerId, decision: Decision, source: &str, filter: CardFilter) {
        let piles = self.state.supply.available(|c| filter.allows(c));
        self.offer(
            Interaction::supply(decision, source, player, piles)
                .filter(filter)
                .prompt(format!("Gain a card: {}", filter)),
        );
    }

    /// Opponents of `player` without a Moat in hand, in turn order.
    fn undefended(&mut self, player: PlayerId) -> Vec<PlayerId> {
        let mut out = Vec::new();
        for other in self.state.others(player) {
            if self.state.players[other].is_defended() {
                let line = format!("{} is protected by Moat", self.state.players[other].name);
                self.log(line);
            } else {
                out.push(other);
            }
        }
        out
    }
}
