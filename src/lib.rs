//! A simplified Texas Hold'em betting engine.
//!
//! The crate provides a [`Game`] type that manages the full betting flow:
//! dealing, multi-round betting with pot accumulation, action validation,
//! and the final payout. All terminal interaction stays outside the engine;
//! the caller asks the current player for a decision and feeds the parsed
//! [`Action`] back in, re-prompting the same player whenever an action is
//! rejected.
//!
//! # Example
//!
//! ```
//! use holdrs::{Action, Game, Player};
//!
//! let players = vec![Player::new("alice", 1000), Player::new("bob", 1000)];
//! let mut game = Game::new(players, 100, 42).unwrap();
//!
//! let name = game.current_player().unwrap().name().to_owned();
//! game.apply(&name, Action::Check).unwrap();
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DeckError, NewGameError};
pub use game::{Action, ActionOutcome, Game, GameStatus};
pub use player::{Player, RoundStatus};
pub use result::{GameResult, PlayerStanding};
