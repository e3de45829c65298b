//! Deck construction, shuffling, and drawing.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered pack of playing cards.
///
/// A freshly built deck holds all 52 unique cards and is shuffled exactly
/// once. Cards are drawn from the back of the sequence and never returned,
/// so no card can be dealt twice.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the canonical 52-card pack and applies one full shuffle.
    ///
    /// The result is deterministic for a given generator state.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::standard_order();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Returns the canonical 52-card sequence before any shuffle.
    ///
    /// Ranks cycle every thirteen cards and suits every four, so colors
    /// alternate card by card and each of the 52 rank/suit combinations
    /// appears exactly once.
    #[must_use]
    pub fn standard_order() -> Vec<Card> {
        (0..DECK_SIZE)
            .map(|i| Card::new(Rank::ALL[i % 13], Suit::ALL[i % 4]))
            .collect()
    }

    /// Removes and returns the last card of the sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Re-permutes the remaining cards uniformly at random.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
