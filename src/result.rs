//! Result types for a finished game.

/// Final balance for a single player at game end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStanding {
    /// The player's name.
    pub name: String,
    /// The player's balance after the payout.
    pub balance: usize,
}

/// Result of a finished game.
///
/// Emitted exactly once, when the game transitions to
/// [`GameStatus::Finished`](crate::GameStatus::Finished): the whole pot has
/// been credited to the winner and the pot reads zero afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// The name of the winning player.
    pub winner: String,
    /// The pot amount credited to the winner.
    pub payout: usize,
    /// Every player's final balance, in seating order.
    pub standings: Vec<PlayerStanding>,
}
