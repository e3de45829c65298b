//! Player state and per-round status.

use crate::card::Card;

/// A player's standing within the current betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// The player still owes an action this round.
    Ready,
    /// The player has checked and is done for this round.
    Checked,
}

/// A participant at the table.
///
/// A player is created with a name and a starting balance before the game
/// begins. A folded player becomes a spectator for the rest of the game;
/// players are never removed from the table.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    balance: usize,
    hand: Vec<Card>,
    round_status: RoundStatus,
    spectating: bool,
}

impl Player {
    /// Creates a new player with the given name and starting balance.
    #[must_use]
    pub fn new(name: impl Into<String>, balance: usize) -> Self {
        Self {
            name: name.into(),
            balance,
            hand: Vec::new(),
            round_status: RoundStatus::Ready,
            spectating: false,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the player's hole cards.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the player's standing within the current round.
    #[must_use]
    pub const fn round_status(&self) -> RoundStatus {
        self.round_status
    }

    /// Returns whether the player has folded and now only spectates.
    #[must_use]
    pub const fn is_spectating(&self) -> bool {
        self.spectating
    }

    /// Decreases the balance by `amount`.
    ///
    /// The caller must have verified `amount <= balance`: the game validates
    /// every action in full before any money moves.
    pub(crate) const fn withdraw(&mut self, amount: usize) {
        self.balance -= amount;
    }

    /// Increases the balance by `amount` (the payout at game end).
    pub(crate) const fn deposit(&mut self, amount: usize) {
        self.balance += amount;
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub(crate) const fn set_round_status(&mut self, status: RoundStatus) {
        self.round_status = status;
    }

    /// Makes the player ready for the next round.
    pub(crate) const fn reset_round_status(&mut self) {
        self.round_status = RoundStatus::Ready;
    }

    /// Marks the player as folded. Never undone.
    pub(crate) const fn set_spectating(&mut self) {
        self.spectating = true;
    }
}
