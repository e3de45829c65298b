//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
///
/// An empty deck is never reached in a normal game with up to nine players
/// and four rounds; hitting it means the table was configured with more
/// players than one pack can serve, which is fatal to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards remain in the deck.
    #[error("no cards remain in the deck")]
    Empty,
}

/// Errors that can occur when creating a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewGameError {
    /// Fewer than two players were supplied.
    #[error("a game needs at least two players")]
    NotEnoughPlayers,
    /// Two players share the same name.
    #[error("player names must be unique")]
    DuplicateName,
    /// A player's balance is below the buy-in.
    #[error("a player's balance is below the buy-in")]
    BelowBuyIn,
    /// The deck ran out of cards while dealing.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during a player action.
///
/// Every variant except [`ActionError::Deck`] is a recoverable rejection of
/// a single action: no state has been mutated and the same player may be
/// asked to act again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The game has already finished.
    #[error("the game has already finished")]
    GameOver,
    /// It is not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The action is not legal given the current table bet.
    #[error("this action is not available right now")]
    InvalidAction,
    /// The action name is not one of check, bet, call, or fold.
    #[error("unknown action")]
    UnknownAction,
    /// The bet amount is not positive.
    #[error("the bet amount must be positive")]
    InvalidBet,
    /// The player's balance cannot cover the required amount.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The amount is missing or not an integer.
    #[error("the amount must be an integer")]
    MalformedAmount,
    /// The deck ran out of cards while revealing a community card.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
