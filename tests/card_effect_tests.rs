//! Card effect tests.
//!
//! Each kingdom card with behavior beyond its static bonuses is played from
//! an arranged hand and deck, and any decisions it raises are answered
//! through the public engine API.

use wickinion::{
    Action, CardId, Game, GameConfig, GameError, InteractionKind, PlayerId, Response, Result,
    RulesEngine,
};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

fn game() -> Game {
    Game::new(GameConfig::default().with_seed(42))
}

/// Replace a player's hand, deck and discard pile. The deck's last card is
/// its top.
fn arrange(game: &mut Game, player: PlayerId, hand: &[CardId], deck: &[CardId]) {
    let p = &mut game.state_mut().players[player];
    p.hand = hand.to_vec();
    p.deck = deck.to_vec();
    p.discard.clear();
}

fn play(game: &mut Game, hand_index: usize) {
    game.apply_action(P0, &Action::PlayCard { hand_index })
        .expect("play should be legal");
}

fn answer(game: &mut Game, player: PlayerId, response: Response) -> Result<()> {
    let id = game.head().expect("an interaction should be pending").id;
    game.resolve_interaction(player, id, &response)
}

fn option_index(game: &Game, card: CardId) -> usize {
    game.head()
        .expect("an interaction should be pending")
        .options
        .iter()
        .position(|&c| c == card)
        .expect("card should be offered")
}

// =============================================================================
// Hand manipulation
// =============================================================================

/// Test Cellar discards the chosen cards and draws as many.
#[test]
fn test_cellar_discard_and_draw() {
    let mut game = game();
    arrange(
        &mut game,
        P0,
        &[CardId::Cellar, CardId::Estate, CardId::Estate, CardId::Copper],
        &[CardId::Gold, CardId::Silver],
    );

    play(&mut game, 0);
    let head = game.head().unwrap();
    assert_eq!(head.kind, InteractionKind::HandSelection);
    assert_eq!((head.min, head.max), (0, None));

    answer(&mut game, P0, Response::select([0, 1])).unwrap();

    let p = game.state().current();
    assert_eq!(p.hand, vec![CardId::Copper, CardId::Silver, CardId::Gold]);
    assert_eq!(p.discard, vec![CardId::Estate, CardId::Estate]);
    assert_eq!(p.actions, 1);
    assert!(game.head().is_none());
}

/// Test Cellar with nothing selected draws nothing.
#[test]
fn test_cellar_discard_nothing() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Cellar, CardId::Estate], &[CardId::Gold]);

    play(&mut game, 0);
    answer(&mut game, P0, Response::none()).unwrap();

    let p = game.state().current();
    assert_eq!(p.hand, vec![CardId::Estate]);
    assert_eq!(p.deck, vec![CardId::Gold]);
}

/// Test Chapel trashes up to four cards.
#[test]
fn test_chapel_trash() {
    let mut game = game();
    arrange(
        &mut game,
        P0,
        &[CardId::Chapel, CardId::Copper, CardId::Copper, CardId::Estate, CardId::Curse],
        &[],
    );

    play(&mut game, 0);
    assert_eq!(game.head().unwrap().max, Some(4));

    assert_eq!(
        answer(&mut game, P0, Response::select([4])),
        Err(GameError::SelectionOutOfRange(4))
    );
    answer(&mut game, P0, Response::select([0, 1, 3])).unwrap();

    assert_eq!(game.state().current().hand, vec![CardId::Estate]);
    assert_eq!(game.state().trash, vec![CardId::Copper, CardId::Copper, CardId::Curse]);
}

/// Test Library draws up to seven cards.
#[test]
fn test_library_draws_to_seven() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Library, CardId::Estate], &[CardId::Copper; 10]);

    play(&mut game, 0);

    let p = game.state().current();
    assert_eq!(p.hand.len(), 7);
    assert_eq!(p.deck.len(), 4);
    assert!(game.head().is_none());
}

/// Test Library stops quietly when deck and discard run out.
#[test]
fn test_library_short_deck() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Library], &[CardId::Copper, CardId::Silver]);

    play(&mut game, 0);
    assert_eq!(game.state().current().hand, vec![CardId::Silver, CardId::Copper]);
}

/// Test Council Room: +4 cards, +1 buy, every opponent draws one.
#[test]
fn test_council_room() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::CouncilRoom], &[CardId::Copper; 4]);
    arrange(&mut game, P1, &[CardId::Estate; 5], &[CardId::Gold]);

    play(&mut game, 0);

    let state = game.state();
    assert_eq!(state.players[P0].hand, vec![CardId::Copper; 4]);
    assert_eq!(state.players[P0].buys, 2);
    assert_eq!(state.players[P1].hand.len(), 6);
    assert!(state.players[P1].hand.contains(&CardId::Gold));
}

// =============================================================================
// Deck inspection
// =============================================================================

/// Test Sentry trashing one revealed card and putting the other back.
#[test]
fn test_sentry_trash_then_keep() {
    let mut game = game();
    arrange(
        &mut game,
        P0,
        &[CardId::Sentry],
        &[CardId::Copper, CardId::Gold, CardId::Estate],
    );
    let total = game.state().total_cards();

    play(&mut game, 0);
    assert_eq!(game.state().current().hand, vec![CardId::Estate]);
    assert_eq!(game.head().unwrap().options, vec![CardId::Gold, CardId::Copper]);
    assert_eq!(game.state().total_cards(), total);

    answer(&mut game, P0, Response::select([1])).unwrap();
    assert_eq!(game.state().trash, vec![CardId::Copper]);
    assert_eq!(game.head().unwrap().options, vec![CardId::Gold]);
    assert_eq!(game.state().total_cards(), total);

    answer(&mut game, P0, Response::none()).unwrap();
    let p = game.state().current();
    assert_eq!(p.deck, vec![CardId::Gold]);
    assert_eq!(p.actions, 1);
    assert!(game.head().is_none());
    assert_eq!(game.state().total_cards(), total);
}

/// Test Sentry keeping both cards puts them back in reveal order, so the
/// second revealed card ends up on top.
#[test]
fn test_sentry_keep_returns_in_reveal_order() {
    let mut game = game();
    arrange(
        &mut game,
        P0,
        &[CardId::Sentry],
        &[CardId::Duchy, CardId::Silver, CardId::Gold, CardId::Estate],
    );

    play(&mut game, 0);
    assert_eq!(game.head().unwrap().options, vec![CardId::Gold, CardId::Silver]);
    answer(&mut game, P0, Response::none()).unwrap();
    answer(&mut game, P0, Response::none()).unwrap();

    let p = game.state().current();
    assert_eq!(p.deck, vec![CardId::Duchy, CardId::Gold, CardId::Silver]);
    assert_eq!(p.deck.last(), Some(&CardId::Silver));
}

/// Test Sentry discarding everything it revealed.
#[test]
fn test_sentry_discard_both() {
    let mut game = game();
    arrange(
        &mut game,
        P0,
        &[CardId::Sentry],
        &[CardId::Curse, CardId::Estate, CardId::Copper],
    );

    play(&mut game, 0);
    answer(&mut game, P0, Response::none()).unwrap();
    answer(&mut game, P0, Response::select([0, 1])).unwrap();

    let p = game.state().current();
    assert!(p.deck.is_empty());
    assert_eq!(p.discard, vec![CardId::Estate, CardId::Curse]);
}

/// Test Harbinger topdecks a card from the discard pile.
#[test]
fn test_harbinger_topdeck() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Harbinger], &[CardId::Copper, CardId::Copper]);
    game.state_mut().players[P0].discard = vec![CardId::Gold, CardId::Estate];

    play(&mut game, 0);
    let head = game.head().unwrap();
    assert_eq!(head.kind, InteractionKind::CustomSelection);
    assert_eq!(head.options, vec![CardId::Gold, CardId::Estate]);

    answer(&mut game, P0, Response::select([0])).unwrap();

    let p = game.state().current();
    assert_eq!(p.deck, vec![CardId::Copper, CardId::Gold]);
    assert_eq!(p.discard, vec![CardId::Estate]);
}

/// Test Harbinger with an empty discard pile asks nothing.
#[test]
fn test_harbinger_empty_discard() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Harbinger], &[CardId::Copper]);

    play(&mut game, 0);
    assert!(game.head().is_none());
    assert_eq!(game.state().current().actions, 1);
}

/// Test Vassal replays a discarded Action on accept, spending an action.
#[test]
fn test_vassal_accept_plays_action() {
    let mut game = game();
    arrange(
        &mut game,
        P0,
        &[CardId::Village, CardId::Vassal],
        &[CardId::Copper, CardId::Copper, CardId::Copper, CardId::Smithy, CardId::Estate],
    );

    play(&mut game, 0);
    play(&mut game, 0);
    assert_eq!(game.state().current().coin, 2);
    assert_eq!(game.state().current().actions, 1);
    assert_eq!(game.state().current().discard, vec![CardId::Smithy]);
    assert_eq!(game.head().unwrap().kind, InteractionKind::Confirmation);

    answer(&mut game, P0, Response::Accept).unwrap();

    let p = game.state().current();
    assert_eq!(p.play_area, vec![CardId::Village, CardId::Vassal, CardId::Smithy]);
    assert_eq!(
        p.hand,
        vec![CardId::Estate, CardId::Copper, CardId::Copper, CardId::Copper]
    );
    assert!(p.discard.is_empty());
    assert_eq!(p.actions, 0);
}

/// Test accepting Vassal with no action left keeps the card in the discard
/// pile and still settles the decision.
#[test]
fn test_vassal_accept_without_actions() {
    let mut game = game();
    arrange(
        &mut game,
        P0,
        &[CardId::Vassal],
        &[CardId::Copper, CardId::Copper, CardId::Copper, CardId::Smithy],
    );

    play(&mut game, 0);
    assert_eq!(game.state().current().actions, 0);

    answer(&mut game, P0, Response::Accept).unwrap();

    let p = game.state().current();
    assert!(game.head().is_none());
    assert_eq!(p.play_area, vec![CardId::Vassal]);
    assert_eq!(p.discard, vec![CardId::Smithy]);
    assert!(p.hand.is_empty());
    assert_eq!(p.deck, vec![CardId::Copper; 3]);
}

/// Test Vassal leaves the card in the discard pile on decline.
#[test]
fn test_vassal_decline() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Vassal], &[CardId::Smithy]);

    play(&mut game, 0);
    answer(&mut game, P0, Response::Decline).unwrap();

    let p = game.state().current();
    assert_eq!(p.discard, vec![CardId::Smithy]);
    assert!(p.hand.is_empty());
}

/// Test Vassal discarding a non-Action asks nothing.
#[test]
fn test_vassal_non_action() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Vassal], &[CardId::Gold]);

    play(&mut game, 0);
    assert!(game.head().is_none());
    assert_eq!(game.state().current().discard, vec![CardId::Gold]);
}

// =============================================================================
// Gaining
// =============================================================================

/// Test Workshop offers piles costing up to 4 and gains to discard.
#[test]
fn test_workshop_gain() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Workshop], &[]);

    play(&mut game, 0);
    let head = game.head().unwrap();
    assert_eq!(head.kind, InteractionKind::SupplySelection);
    assert!(head.options.contains(&CardId::Smithy));
    assert!(!head.options.contains(&CardId::Market));
    assert!(!head.options.contains(&CardId::Gold));

    let silver = option_index(&game, CardId::Silver);
    answer(&mut game, P0, Response::select([silver])).unwrap();

    assert_eq!(game.state().current().discard, vec![CardId::Silver]);
    assert_eq!(game.state().supply.count(CardId::Silver), 39);
}

/// Test a pile emptied after the offer is rejected without consuming the
/// decision.
#[test]
fn test_workshop_pile_emptied_meanwhile() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Workshop], &[]);

    play(&mut game, 0);
    let silver = option_index(&game, CardId::Silver);
    game.state_mut().supply.set(CardId::Silver, 0);

    assert_eq!(
        answer(&mut game, P0, Response::select([silver])),
        Err(GameError::PileEmpty(CardId::Silver))
    );
    assert!(game.head().is_some());

    let village = option_index(&game, CardId::Village);
    answer(&mut game, P0, Response::select([village])).unwrap();
    assert_eq!(game.state().current().discard, vec![CardId::Village]);
}

/// Test Artisan gains to hand, then topdecks a card from hand.
#[test]
fn test_artisan_gain_then_topdeck() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Artisan, CardId::Estate], &[]);

    play(&mut game, 0);
    let market = option_index(&game, CardId::Market);
    answer(&mut game, P0, Response::select([market])).unwrap();

    assert_eq!(game.state().current().hand, vec![CardId::Estate, CardId::Market]);
    assert_eq!(game.head().unwrap().kind, InteractionKind::HandSelection);

    answer(&mut game, P0, Response::select([0])).unwrap();

    let p = game.state().current();
    assert_eq!(p.hand, vec![CardId::Market]);
    assert_eq!(p.deck.last(), Some(&CardId::Estate));
    assert_eq!(game.state().supply.count(CardId::Market), 9);
}

/// Test Mine: trash a Copper, gain a Silver to hand.
#[test]
fn test_mine_upgrades_treasure() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Mine, CardId::Copper, CardId::Estate], &[]);
    let silver_before = game.state().supply.count(CardId::Silver);

    play(&mut game, 0);
    assert_eq!(game.state().current().hand, vec![CardId::Copper, CardId::Estate]);

    assert!(matches!(
        answer(&mut game, P0, Response::select([1])),
        Err(GameError::FilterRejected { card: CardId::Estate, .. })
    ));
    answer(&mut game, P0, Response::select([0])).unwrap();

    let head = game.head().unwrap();
    assert_eq!(head.kind, InteractionKind::SupplySelection);
    assert!(head.options.contains(&CardId::Silver));
    assert!(!head.options.contains(&CardId::Gold));
    assert!(!head.options.contains(&CardId::Village));

    let silver = option_index(&game, CardId::Silver);
    answer(&mut game, P0, Response::select([silver])).unwrap();

    let state = game.state();
    assert_eq!(state.current().hand, vec![CardId::Estate, CardId::Silver]);
    assert_eq!(state.trash, vec![CardId::Copper]);
    assert_eq!(state.supply.count(CardId::Silver), silver_before - 1);
    assert!(state.current().discard.is_empty());
}

/// Test Mine without a Treasure in hand asks nothing.
#[test]
fn test_mine_without_treasure() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Mine, CardId::Estate], &[]);

    play(&mut game, 0);
    assert!(game.head().is_none());
    assert!(game.state().trash.is_empty());
}

/// Test Remodel trashes a card and gains one costing up to 2 more.
#[test]
fn test_remodel() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Remodel, CardId::Estate], &[]);

    play(&mut game, 0);
    answer(&mut game, P0, Response::select([0])).unwrap();
    assert!(!game.head().unwrap().options.contains(&CardId::Market));

    let smithy = option_index(&game, CardId::Smithy);
    answer(&mut game, P0, Response::select([smithy])).unwrap();

    assert_eq!(game.state().trash, vec![CardId::Estate]);
    assert_eq!(game.state().current().discard, vec![CardId::Smithy]);
}

/// Test Remodel turns a Gold into a Province.
#[test]
fn test_remodel_gold_into_province() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Remodel, CardId::Gold], &[]);

    play(&mut game, 0);
    answer(&mut game, P0, Response::select([0])).unwrap();
    let province = option_index(&game, CardId::Province);
    answer(&mut game, P0, Response::select([province])).unwrap();

    assert_eq!(game.state().current().discard, vec![CardId::Province]);
}

/// Test Moneylender trades a Copper for coin, and may be declined.
#[test]
fn test_moneylender() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Moneylender, CardId::Copper, CardId::Estate], &[]);

    play(&mut game, 0);
    assert!(answer(&mut game, P0, Response::select([1])).is_err());
    answer(&mut game, P0, Response::select([0])).unwrap();

    assert_eq!(game.state().current().coin, 3);
    assert_eq!(game.state().trash, vec![CardId::Copper]);

    let mut declined = self::game();
    arrange(&mut declined, P0, &[CardId::Moneylender, CardId::Copper], &[]);
    play(&mut declined, 0);
    answer(&mut declined, P0, Response::none()).unwrap();
    assert_eq!(declined.state().current().coin, 0);
    assert_eq!(declined.state().current().hand, vec![CardId::Copper]);
}

/// Test Moneylender without a Copper asks nothing.
#[test]
fn test_moneylender_without_copper() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Moneylender, CardId::Silver], &[]);

    play(&mut game, 0);
    assert!(game.head().is_none());
}

/// Test Poacher discards one card per empty supply pile.
#[test]
fn test_poacher_empty_piles() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Poacher, CardId::Estate], &[CardId::Copper]);

    play(&mut game, 0);
    assert!(game.head().is_none());
    assert_eq!(game.state().current().coin, 1);

    let mut game = self::game();
    game.state_mut().supply.set(CardId::Village, 0);
    game.state_mut().supply.set(CardId::Smithy, 0);
    arrange(
        &mut game,
        P0,
        &[CardId::Poacher, CardId::Estate, CardId::Estate, CardId::Copper],
        &[CardId::Gold],
    );

    play(&mut game, 0);
    assert_eq!((game.head().unwrap().min, game.head().unwrap().max), (2, Some(2)));
    assert!(matches!(
        answer(&mut game, P0, Response::select([0])),
        Err(GameError::SelectionCount { got: 1, .. })
    ));
    answer(&mut game, P0, Response::select([0, 1])).unwrap();

    let p = game.state().current();
    assert_eq!(p.hand, vec![CardId::Copper, CardId::Gold]);
    assert_eq!(p.discard, vec![CardId::Estate, CardId::Estate]);
}

// =============================================================================
// Attacks
// =============================================================================

/// Test Militia makes the opponent discard down to three.
#[test]
fn test_militia_discard() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Militia], &[]);
    arrange(&mut game, P1, &[CardId::Copper, CardId::Estate, CardId::Copper, CardId::Estate, CardId::Silver], &[]);

    play(&mut game, 0);
    assert_eq!(game.state().current().coin, 2);

    let head = game.head().unwrap();
    assert_eq!(head.target, P1);
    assert_eq!((head.min, head.max), (2, Some(2)));

    assert_eq!(
        answer(&mut game, P0, Response::select([1, 3])),
        Err(GameError::NotTarget(P0))
    );
    answer(&mut game, P1, Response::select([1, 3])).unwrap();

    let victim = &game.state().players[P1];
    assert_eq!(victim.hand, vec![CardId::Copper, CardId::Copper, CardId::Silver]);
    assert_eq!(victim.discard, vec![CardId::Estate, CardId::Estate]);
}

/// Test Moat blocks Militia.
#[test]
fn test_moat_blocks_militia() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Militia], &[]);
    arrange(&mut game, P1, &[CardId::Moat, CardId::Copper, CardId::Copper, CardId::Copper, CardId::Copper], &[]);

    play(&mut game, 0);

    assert!(game.head().is_none());
    assert_eq!(game.state().players[P1].hand.len(), 5);
    assert!(game.state().log.iter().any(|line| line.contains("protected by Moat")));
}

/// Test Militia leaves small hands alone.
#[test]
fn test_militia_small_hand() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Militia], &[]);
    arrange(&mut game, P1, &[CardId::Copper; 3], &[]);

    play(&mut game, 0);
    assert!(game.head().is_none());
}

/// Test Bandit trashes a revealed non-Copper Treasure.
#[test]
fn test_bandit_trashes_gold() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Bandit], &[]);
    arrange(&mut game, P1, &[], &[CardId::Estate, CardId::Copper, CardId::Gold]);

    play(&mut game, 0);
    let head = game.head().unwrap();
    assert_eq!(head.kind, InteractionKind::Confirmation);
    assert_eq!(head.target, P1);

    answer(&mut game, P1, Response::Accept).unwrap();

    let victim = &game.state().players[P1];
    assert_eq!(game.state().trash, vec![CardId::Gold]);
    assert_eq!(victim.discard, vec![CardId::Copper]);
    assert_eq!(victim.deck, vec![CardId::Estate]);
}

/// Test Bandit only trashes the first qualifying Treasure, and applies on
/// decline too.
#[test]
fn test_bandit_first_treasure_on_decline() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Bandit], &[]);
    arrange(&mut game, P1, &[], &[CardId::Silver, CardId::Gold]);

    play(&mut game, 0);
    answer(&mut game, P1, Response::Decline).unwrap();

    assert_eq!(game.state().trash, vec![CardId::Gold]);
    assert_eq!(game.state().players[P1].discard, vec![CardId::Silver]);
}

/// Test Bandit spares Coppers.
#[test]
fn test_bandit_spares_copper() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Bandit], &[]);
    arrange(&mut game, P1, &[], &[CardId::Copper, CardId::Estate]);

    play(&mut game, 0);
    answer(&mut game, P1, Response::Accept).unwrap();

    assert!(game.state().trash.is_empty());
    assert_eq!(game.state().players[P1].discard, vec![CardId::Estate, CardId::Copper]);
}

/// Test Bureaucrat gains a Silver to deck and forces a Victory topdeck.
#[test]
fn test_bureaucrat() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Bureaucrat], &[CardId::Copper]);
    arrange(&mut game, P1, &[CardId::Estate, CardId::Copper, CardId::Copper], &[]);

    play(&mut game, 0);
    assert_eq!(game.state().current().deck, vec![CardId::Copper, CardId::Silver]);

    assert_eq!(game.head().unwrap().target, P1);
    assert!(answer(&mut game, P1, Response::select([1])).is_err());
    answer(&mut game, P1, Response::select([0])).unwrap();

    let victim = &game.state().players[P1];
    assert_eq!(victim.deck, vec![CardId::Estate]);
    assert_eq!(victim.hand, vec![CardId::Copper, CardId::Copper]);
}

/// Test Bureaucrat skips an opponent with no Victory card.
#[test]
fn test_bureaucrat_no_victory() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Bureaucrat], &[]);
    arrange(&mut game, P1, &[CardId::Copper; 5], &[]);

    play(&mut game, 0);
    assert!(game.head().is_none());
    assert_eq!(game.state().current().deck, vec![CardId::Silver]);
}

/// Test Bureaucrat with the Silver pile gone still attacks.
#[test]
fn test_bureaucrat_without_silver() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::Bureaucrat], &[CardId::Copper]);
    arrange(&mut game, P1, &[CardId::Estate, CardId::Copper], &[]);
    game.state_mut().supply.set(CardId::Silver, 0);

    play(&mut game, 0);

    assert_eq!(game.state().current().deck, vec![CardId::Copper]);
    assert_eq!(game.state().supply.count(CardId::Silver), 0);
    assert_eq!(game.head().unwrap().target, P1);
    answer(&mut game, P1, Response::select([0])).unwrap();
    assert_eq!(game.state().players[P1].deck, vec![CardId::Estate]);
}

/// Test Witch hands out Curses while the pile lasts.
#[test]
fn test_witch_curses() {
    let mut game = Game::new(GameConfig::default().with_player_count(3).with_seed(42));
    arrange(&mut game, P0, &[CardId::Witch], &[CardId::Copper, CardId::Copper]);
    game.state_mut().supply.set(CardId::Curse, 1);

    play(&mut game, 0);

    let state = game.state();
    assert_eq!(state.players[P0].hand.len(), 2);
    assert_eq!(state.players[P1].discard, vec![CardId::Curse]);
    assert!(state.players[PlayerId::new(2)].discard.is_empty());
    assert_eq!(state.supply.count(CardId::Curse), 0);
}

// =============================================================================
// Throne Room
// =============================================================================

/// Test Throne Room doubles the next Action at no action cost.
#[test]
fn test_throne_room_smithy() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::ThroneRoom, CardId::Smithy], &[CardId::Copper; 8]);

    play(&mut game, 0);
    assert_eq!(game.state().current().actions, 0);
    assert_eq!(game.pending_multiplier(), 2);

    play(&mut game, 0);

    let p = game.state().current();
    assert_eq!(p.hand.len(), 6);
    assert_eq!(p.play_area, vec![CardId::ThroneRoom, CardId::Smithy]);
    assert_eq!(p.actions, 0);
    assert_eq!(game.pending_multiplier(), 1);
}

/// Test Throne Room applies static bonuses twice.
#[test]
fn test_throne_room_village() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::ThroneRoom, CardId::Village], &[CardId::Copper; 4]);

    play(&mut game, 0);
    play(&mut game, 0);

    let p = game.state().current();
    assert_eq!(p.actions, 4);
    assert_eq!(p.hand.len(), 2);
}

/// Test a doubled Militia asks each opponent only once.
#[test]
fn test_throne_room_militia_asks_once() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::ThroneRoom, CardId::Militia], &[]);
    arrange(&mut game, P1, &[CardId::Copper; 5], &[]);

    play(&mut game, 0);
    play(&mut game, 0);

    assert_eq!(game.state().current().coin, 4);
    assert_eq!(game.state().interactions.len(), 1);
}

/// Test a doubled Mine whose second trash has nothing left to pick moves
/// straight on to the gain.
#[test]
fn test_throne_room_mine_skips_moot_step() {
    let mut game = game();
    arrange(
        &mut game,
        P0,
        &[CardId::ThroneRoom, CardId::Mine, CardId::Copper, CardId::Estate],
        &[],
    );

    play(&mut game, 0);
    play(&mut game, 0);
    assert_eq!(game.state().interactions.len(), 2);

    answer(&mut game, P0, Response::select([0])).unwrap();
    assert_eq!(game.head().unwrap().kind, InteractionKind::SupplySelection);

    let silver = option_index(&game, CardId::Silver);
    answer(&mut game, P0, Response::select([silver])).unwrap();

    assert!(game.head().is_none());
    assert_eq!(game.state().current().hand, vec![CardId::Estate, CardId::Silver]);
}

/// Test Throne Room on Throne Room still leaves one doubled play.
#[test]
fn test_throne_room_on_throne_room() {
    let mut game = game();
    arrange(
        &mut game,
        P0,
        &[CardId::ThroneRoom, CardId::ThroneRoom, CardId::Smithy],
        &[CardId::Copper; 8],
    );

    play(&mut game, 0);
    play(&mut game, 0);
    assert_eq!(game.pending_multiplier(), 2);

    play(&mut game, 0);
    assert_eq!(game.state().current().hand.len(), 6);
    assert_eq!(game.pending_multiplier(), 1);
}

/// Test Treasures do not consume a pending Throne Room, and ending the turn
/// clears it.
#[test]
fn test_throne_room_pending_until_cleanup() {
    let mut game = game();
    arrange(&mut game, P0, &[CardId::ThroneRoom, CardId::Copper], &[CardId::Copper; 5]);

    play(&mut game, 0);
    play(&mut game, 0);
    assert_eq!(game.pending_multiplier(), 2);
    assert_eq!(game.state().current().coin, 1);

    game.apply_action(P0, &Action::EndTurn).unwrap();
    assert_eq!(game.pending_multiplier(), 1);
}

/// Test an Action replayed by Vassal is doubled by a Throne Room that an
/// earlier Vassal replay primed.
#[test]
fn test_throne_room_doubles_vassal_replay() {
    let mut game = game();
    let mut deck = vec![CardId::Copper; 8];
    deck.extend([CardId::Smithy, CardId::ThroneRoom, CardId::Estate]);
    arrange(
        &mut game,
        P0,
        &[CardId::Village, CardId::ThroneRoom, CardId::Vassal],
        &deck,
    );

    play(&mut game, 0);
    play(&mut game, 0);
    play(&mut game, 0);
    assert_eq!(game.state().current().coin, 4);
    assert_eq!(game.state().current().actions, 1);
    assert_eq!(game.state().interactions.len(), 2);

    answer(&mut game, P0, Response::Accept).unwrap();
    assert_eq!(game.pending_multiplier(), 2);
    assert_eq!(game.state().current().actions, 0);

    answer(&mut game, P0, Response::Accept).unwrap();

    let p = game.state().current();
    assert!(game.head().is_none());
    assert_eq!(p.hand.len(), 7);
    assert_eq!(p.hand.iter().filter(|&&c| c == CardId::Copper).count(), 6);
    assert_eq!(p.play_area.last(), Some(&CardId::Smithy));
    assert!(p.discard.is_empty());
    assert_eq!(p.actions, 0);
    assert_eq!(game.pending_multiplier(), 1);
}
