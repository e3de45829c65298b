//! CLI Texas Hold'em example.
//!
//! The engine never touches the terminal; this example owns all prompting
//! and printing and feeds parsed actions into the game.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use holdrs::{Action, ActionOutcome, Game, GameStatus, Player};

fn main() {
    println!("Texas Hold'em CLI example");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let buy_in = 800;
    let players = vec![
        Player::new("player1", 1000),
        Player::new("player2", 1000),
        Player::new("player3", 1000),
    ];

    let mut game = match Game::new(players, buy_in, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Could not start the game: {err}");
            return;
        }
    };

    println!("Each player paid the {buy_in} buy-in. Pot: {}", game.pot());

    while game.status() == GameStatus::OnGoing {
        let Some(player) = game.current_player() else {
            break;
        };
        let name = player.name().to_owned();

        println!();
        println!("Round {}, pot {}", game.round(), game.pot());
        if game.round() > 1 {
            println!("Community cards:");
            for card in game.community_cards() {
                println!("  {card}");
            }
        }
        println!("{name}'s balance: {}", player.balance());
        println!("{name}'s cards:");
        for card in player.hand() {
            println!("  {card}");
        }

        let action = if game.current_table_bet() == 0 {
            prompt_action(&name, "Check/Bet/Fold")
        } else {
            prompt_action(&name, "Call/Fold")
        };

        match game.apply(&name, action) {
            Ok(outcome) => {
                if action == Action::Fold {
                    println!("{name} is out");
                }
                match outcome {
                    ActionOutcome::Continue => {}
                    ActionOutcome::NewRound(round) => {
                        println!();
                        println!("########## round {round} ##########");
                    }
                    ActionOutcome::Finished(result) => {
                        println!();
                        println!("{} won {} coins!", result.winner, result.payout);
                        for standing in &result.standings {
                            println!("{}'s balance: {}", standing.name, standing.balance);
                        }
                    }
                }
            }
            Err(err) => println!("{err}"),
        }
    }
}

/// Prompts until the input parses into an action.
fn prompt_action(name: &str, options: &str) -> Action {
    loop {
        let input = prompt_line(&format!("{name}, action ({options}): "));
        let amount = if input.eq_ignore_ascii_case("bet") {
            Some(prompt_line("Amount: "))
        } else {
            None
        };

        match Action::parse(&input, amount.as_deref()) {
            Ok(action) => return action,
            Err(err) => println!("{err}"),
        }
    }
}

fn prompt_line(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line.trim().to_string()
}
