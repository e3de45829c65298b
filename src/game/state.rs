//! Game status and action outcome types.

use crate::result::GameResult;

/// Overall game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Betting rounds are still being played.
    OnGoing,
    /// The game has ended and the pot has been paid out. Terminal.
    Finished,
}

/// What a successful action led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The betting round continues with the next player.
    Continue,
    /// The round closed and the contained round number has begun.
    NewRound(u32),
    /// The game ended and the pot was paid out.
    Finished(GameResult),
}
