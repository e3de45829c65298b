//! Game integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use holdrs::{
    Action, ActionError, ActionOutcome, Card, Color, DECK_SIZE, Deck, DeckError, Game, GameStatus,
    NewGameError, Player, Rank, RoundStatus, Suit,
};

/// Pot plus every balance; constant until the payout folds the pot back in.
fn total_currency(game: &Game) -> usize {
    game.pot() + game.players().iter().map(Player::balance).sum::<usize>()
}

fn three_player_game() -> Game {
    let players = vec![
        Player::new("player1", 1000),
        Player::new("player2", 1000),
        Player::new("player3", 1000),
    ];
    Game::new(players, 800, 7).unwrap()
}

fn two_player_game() -> Game {
    let players = vec![Player::new("alice", 500), Player::new("bob", 500)];
    Game::new(players, 100, 7).unwrap()
}

#[test]
fn standard_order_matches_the_classic_pack() {
    let cards = Deck::standard_order();
    assert_eq!(cards.len(), DECK_SIZE);

    // Ranks cycle every 13 cards, suits every 4, colors card by card.
    assert_eq!(cards[0], Card::new(Rank::Two, Suit::Clubs));
    assert_eq!(cards[1], Card::new(Rank::Three, Suit::Diamonds));
    for (i, card) in cards.iter().enumerate() {
        assert_eq!(card.rank, cards[i % 13].rank);
        assert_eq!(card.suit, Suit::ALL[i % 4]);
        let expected = if i % 2 == 0 { Color::Black } else { Color::Red };
        assert_eq!(card.color(), expected);
    }

    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn deck_draws_every_card_exactly_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::new(&mut rng);
    assert_eq!(deck.len(), DECK_SIZE);

    let mut drawn = HashSet::new();
    for n in 1..=DECK_SIZE {
        let card = deck.draw().unwrap();
        assert!(drawn.insert(card), "card dealt twice: {card}");
        assert_eq!(deck.len(), DECK_SIZE - n);
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DeckError::Empty));

    let full_pack: HashSet<Card> = Deck::standard_order().into_iter().collect();
    assert_eq!(drawn, full_pack);
}

#[test]
fn construction_validates_the_player_list() {
    let lone = vec![Player::new("alice", 1000)];
    assert_eq!(
        Game::new(lone, 100, 1).unwrap_err(),
        NewGameError::NotEnoughPlayers
    );

    let broke = vec![Player::new("alice", 1000), Player::new("bob", 50)];
    assert_eq!(
        Game::new(broke, 100, 1).unwrap_err(),
        NewGameError::BelowBuyIn
    );

    let twins = vec![Player::new("alice", 1000), Player::new("alice", 1000)];
    assert_eq!(
        Game::new(twins, 100, 1).unwrap_err(),
        NewGameError::DuplicateName
    );
}

#[test]
fn construction_fails_when_the_pack_cannot_serve_the_table() {
    // 25 players need 3 + 50 cards, one more than a pack holds.
    let players: Vec<Player> = (0..25).map(|i| Player::new(format!("p{i}"), 10)).collect();
    assert_eq!(
        Game::new(players, 10, 1).unwrap_err(),
        NewGameError::Deck(DeckError::Empty)
    );
}

#[test]
fn construction_deals_the_flop_and_takes_the_buy_in() {
    let game = three_player_game();

    assert_eq!(game.status(), GameStatus::OnGoing);
    assert_eq!(game.round(), 1);
    assert_eq!(game.pot(), 2400);
    assert_eq!(game.current_table_bet(), 0);
    assert!(game.last_bettor().is_none());
    assert_eq!(game.community_cards().len(), 3);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 3 - 6);

    for player in game.players() {
        assert_eq!(player.balance(), 200);
        assert_eq!(player.hand().len(), 2);
        assert_eq!(player.round_status(), RoundStatus::Ready);
        assert!(!player.is_spectating());
    }

    assert_eq!(game.current_player().unwrap().name(), "player1");
    assert_eq!(total_currency(&game), 3000);
}

#[test]
fn action_parse_maps_names_and_amounts() {
    assert_eq!(Action::parse("Check", None), Ok(Action::Check));
    assert_eq!(Action::parse("call", None), Ok(Action::Call));
    assert_eq!(Action::parse("FOLD", Some("9")), Ok(Action::Fold));
    assert_eq!(Action::parse("bet", Some(" 50 ")), Ok(Action::Bet(50)));

    assert_eq!(
        Action::parse("bet", None),
        Err(ActionError::MalformedAmount)
    );
    assert_eq!(
        Action::parse("bet", Some("lots")),
        Err(ActionError::MalformedAmount)
    );
    assert_eq!(Action::parse("bet", Some("0")), Err(ActionError::InvalidBet));
    assert_eq!(
        Action::parse("bet", Some("-5")),
        Err(ActionError::InvalidBet)
    );
    assert_eq!(Action::parse("raise", None), Err(ActionError::UnknownAction));
}

#[test]
fn check_is_rejected_while_a_bet_is_outstanding() {
    let mut game = two_player_game();

    assert_eq!(
        game.apply("alice", Action::Bet(50)),
        Ok(ActionOutcome::Continue)
    );
    assert_eq!(game.current_table_bet(), 50);
    assert_eq!(game.last_bettor().unwrap().name(), "alice");

    assert_eq!(
        game.apply("bob", Action::Check),
        Err(ActionError::InvalidAction)
    );
    assert_eq!(
        game.apply("bob", Action::Bet(60)),
        Err(ActionError::InvalidAction)
    );

    assert_eq!(game.apply("bob", Action::Call), Ok(ActionOutcome::Continue));
    assert_eq!(game.pot(), 300);
}

#[test]
fn call_is_rejected_with_nothing_to_call() {
    let mut game = two_player_game();
    assert_eq!(
        game.apply("alice", Action::Call),
        Err(ActionError::InvalidAction)
    );
    // Nothing moved.
    assert_eq!(game.pot(), 200);
    assert_eq!(game.current_player().unwrap().name(), "alice");
}

#[test]
fn rejected_bets_leave_the_state_untouched() {
    let mut game = two_player_game();
    let before = total_currency(&game);

    assert_eq!(
        game.apply("alice", Action::Bet(0)),
        Err(ActionError::InvalidBet)
    );
    assert_eq!(
        game.apply("alice", Action::Bet(401)),
        Err(ActionError::InsufficientFunds)
    );

    assert_eq!(game.pot(), 200);
    assert_eq!(game.current_table_bet(), 0);
    assert_eq!(game.players()[0].balance(), 400);
    assert_eq!(total_currency(&game), before);
    assert_eq!(game.current_player().unwrap().name(), "alice");
}

#[test]
fn call_with_insufficient_funds_is_rejected() {
    let players = vec![Player::new("alice", 1000), Player::new("bob", 120)];
    let mut game = Game::new(players, 100, 7).unwrap();

    game.apply("alice", Action::Bet(50)).unwrap();
    assert_eq!(
        game.apply("bob", Action::Call),
        Err(ActionError::InsufficientFunds)
    );
    assert_eq!(game.players()[1].balance(), 20);
    assert_eq!(game.pot(), 250);

    // Folding is the only way out; the lone remaining player takes the pot.
    let outcome = game.apply("bob", Action::Fold).unwrap();
    match outcome {
        ActionOutcome::Finished(result) => {
            assert_eq!(result.winner, "alice");
            assert_eq!(result.payout, 250);
        }
        other => panic!("expected the game to finish, got {other:?}"),
    }
    assert_eq!(game.players()[0].balance(), 1100);
}

#[test]
fn only_the_current_player_may_act() {
    let mut game = three_player_game();
    assert_eq!(
        game.apply("player2", Action::Check),
        Err(ActionError::NotYourTurn)
    );
    assert_eq!(
        game.apply("nobody", Action::Check),
        Err(ActionError::NotYourTurn)
    );
}

#[test]
fn two_folds_end_the_game_early() {
    let mut game = three_player_game();

    assert_eq!(
        game.apply("player1", Action::Fold),
        Ok(ActionOutcome::Continue)
    );
    assert_eq!(game.current_player().unwrap().name(), "player2");

    let outcome = game.apply("player2", Action::Fold).unwrap();
    let ActionOutcome::Finished(result) = outcome else {
        panic!("expected the game to finish");
    };

    assert_eq!(result.winner, "player3");
    assert_eq!(result.payout, 2400);
    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(game.pot(), 0);
    assert_eq!(game.players()[2].balance(), 2600);
    assert_eq!(total_currency(&game), 3000);
    assert!(game.current_player().is_none());

    assert_eq!(
        game.apply("player3", Action::Check),
        Err(ActionError::GameOver)
    );
}

#[test]
fn a_folded_player_is_never_asked_again() {
    let mut game = three_player_game();

    game.apply("player1", Action::Fold).unwrap();
    assert_eq!(game.active_players().count(), 2);
    assert!(game.active_players().all(|p| p.name() != "player1"));

    // Drive the rest of the game with checks; player1 must never come up.
    while game.status() == GameStatus::OnGoing {
        let name = game.current_player().unwrap().name().to_owned();
        assert_ne!(name, "player1");
        game.apply(&name, Action::Check).unwrap();
    }
}

#[test]
fn the_bettor_is_revisited_with_the_table_bet_cleared() {
    let mut game = two_player_game();

    game.apply("alice", Action::Bet(50)).unwrap();
    game.apply("bob", Action::Call).unwrap();
    assert_eq!(game.pot(), 300);

    // The turn comes back to the uncontested bettor with the bet cleared,
    // so the whole check/bet/fold set is open to them again.
    assert_eq!(game.current_player().unwrap().name(), "alice");
    assert_eq!(game.current_table_bet(), 0);
    assert_eq!(game.last_bettor().unwrap().name(), "alice");

    game.apply("alice", Action::Check).unwrap();
    assert_eq!(game.current_player().unwrap().name(), "bob");
    let outcome = game.apply("bob", Action::Check).unwrap();
    assert_eq!(outcome, ActionOutcome::NewRound(2));
    assert_eq!(game.players()[0].round_status(), RoundStatus::Ready);
}

#[test]
fn community_cards_grow_on_the_turn_and_the_river() {
    let mut game = two_player_game();
    assert_eq!(game.community_cards().len(), 3);

    let mut revealed = vec![];
    while game.status() == GameStatus::OnGoing {
        let name = game.current_player().unwrap().name().to_owned();
        if let ActionOutcome::NewRound(round) = game.apply(&name, Action::Check).unwrap() {
            revealed.push((round, game.community_cards().len()));
        }
    }

    assert_eq!(revealed, vec![(2, 3), (3, 4), (4, 5)]);
}

#[test]
fn four_checked_rounds_pick_a_winner_among_the_active_players() {
    let mut game = two_player_game();
    assert_eq!(game.pot(), 200);

    let mut result = None;
    while game.status() == GameStatus::OnGoing {
        let name = game.current_player().unwrap().name().to_owned();
        if let ActionOutcome::Finished(r) = game.apply(&name, Action::Check).unwrap() {
            result = Some(r);
        }
    }

    let result = result.expect("the game must finish");
    assert_eq!(game.round(), 4);
    assert_eq!(result.payout, 200);
    assert!(result.winner == "alice" || result.winner == "bob");

    let winner_standing = result
        .standings
        .iter()
        .find(|s| s.name == result.winner)
        .unwrap();
    assert_eq!(winner_standing.balance, 600);
    assert_eq!(
        result.standings.iter().map(|s| s.balance).sum::<usize>(),
        1000
    );
    assert_eq!(game.pot(), 0);
}

#[test]
fn the_fallback_winner_pick_is_reproducible() {
    let run = |seed: u64| {
        let players = vec![Player::new("alice", 500), Player::new("bob", 500)];
        let mut game = Game::new(players, 100, seed).unwrap();
        let mut winner = None;
        while game.status() == GameStatus::OnGoing {
            let name = game.current_player().unwrap().name().to_owned();
            if let ActionOutcome::Finished(result) = game.apply(&name, Action::Check).unwrap() {
                winner = Some(result.winner);
            }
        }
        winner.unwrap()
    };

    assert_eq!(run(42), run(42));
}

#[test]
fn balances_are_conserved_through_a_betting_sequence() {
    let mut game = three_player_game();
    let initial = total_currency(&game);

    game.apply("player1", Action::Bet(100)).unwrap();
    assert_eq!(total_currency(&game), initial);
    game.apply("player2", Action::Call).unwrap();
    assert_eq!(total_currency(&game), initial);
    game.apply("player3", Action::Fold).unwrap();
    assert_eq!(total_currency(&game), initial);

    // Back to the bettor; the table bet has been cleared.
    game.apply("player1", Action::Check).unwrap();
    assert_eq!(total_currency(&game), initial);
    let outcome = game.apply("player2", Action::Check).unwrap();
    assert_eq!(outcome, ActionOutcome::NewRound(2));
    assert_eq!(total_currency(&game), initial);
    assert_eq!(game.pot(), 2600);
}
