//! Game engine and betting state machine.

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::NewGameError;
use crate::player::Player;
use crate::result::{GameResult, PlayerStanding};

mod actions;
pub mod state;

pub use actions::Action;
pub use state::{ActionOutcome, GameStatus};

/// Community cards revealed before round 1 (the flop).
const FLOP_SIZE: usize = 3;

/// The game ends after this many betting rounds.
const FINAL_ROUND: u32 = 4;

/// A Texas Hold'em betting engine that manages rounds, the pot, turn order,
/// and action legality.
///
/// The game owns the deck, the player collection, and a seeded random
/// generator, so a whole game is reproducible from its inputs. Play is
/// strictly turn-sequential: the caller reads [`Game::current_player`], asks
/// that player for a decision, and submits it through [`Game::apply`]. A
/// rejected action leaves the game untouched and the same player is asked
/// again.
#[derive(Debug)]
pub struct Game {
    /// Overall status; `Finished` is terminal.
    status: GameStatus,
    /// Currency accumulated from all bets, calls, and buy-ins.
    pot: usize,
    /// Remaining undealt cards.
    deck: Deck,
    /// Current betting round, starting at 1.
    round: u32,
    /// Cards shared by all players, revealed progressively.
    community_cards: Vec<Card>,
    /// Seating order, fixed at construction.
    players: Vec<Player>,
    /// The amount every active player must match this round.
    current_table_bet: usize,
    /// Index of the player whose bet set the current table bet.
    last_bettor: Option<usize>,
    /// Index of the player expected to act.
    turn: usize,
    /// Random number generator for the shuffle and the fallback winner pick.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game: shuffles the deck, reveals the flop, then takes
    /// the buy-in from every player and deals them two hole cards.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two players are supplied, a name is
    /// duplicated, any player's balance is below the buy-in, or the deck
    /// runs out while dealing (more players than one pack can serve).
    ///
    /// # Example
    ///
    /// ```
    /// use holdrs::{Game, Player};
    ///
    /// let players = vec![Player::new("alice", 1000), Player::new("bob", 1000)];
    /// let game = Game::new(players, 100, 42).unwrap();
    /// assert_eq!(game.pot(), 200);
    /// ```
    pub fn new(mut players: Vec<Player>, buy_in: usize, seed: u64) -> Result<Self, NewGameError> {
        if players.len() < 2 {
            return Err(NewGameError::NotEnoughPlayers);
        }
        for (index, player) in players.iter().enumerate() {
            if players[..index].iter().any(|p| p.name() == player.name()) {
                return Err(NewGameError::DuplicateName);
            }
            if player.balance() < buy_in {
                return Err(NewGameError::BelowBuyIn);
            }
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new(&mut rng);

        // The flop is on the table before round 1 begins.
        let mut community_cards = Vec::with_capacity(FLOP_SIZE + 2);
        for _ in 0..FLOP_SIZE {
            community_cards.push(deck.draw()?);
        }

        // Every admitted player pays the buy-in into the pot and receives
        // two hole cards.
        let mut pot = 0;
        for player in &mut players {
            player.withdraw(buy_in);
            pot += buy_in;
            let first = deck.draw()?;
            let second = deck.draw()?;
            player.add_card(first);
            player.add_card(second);
        }

        Ok(Self {
            status: GameStatus::OnGoing,
            pot,
            deck,
            round: 1,
            community_cards,
            players,
            current_table_bet: 0,
            last_bettor: None,
            turn: 0,
            rng,
        })
    }

    /// Returns the overall game status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the current pot.
    #[must_use]
    pub const fn pot(&self) -> usize {
        self.pot
    }

    /// Returns the current betting round, starting at 1.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the community cards revealed so far.
    #[must_use]
    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }

    /// Returns every player at the table, in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the players who have not folded.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|player| !player.is_spectating())
    }

    /// Returns the amount every active player must match this round.
    ///
    /// Zero means betting is open: the legal actions are check, bet, and
    /// fold. Nonzero restricts the legal actions to call and fold.
    #[must_use]
    pub const fn current_table_bet(&self) -> usize {
        self.current_table_bet
    }

    /// Returns the player whose bet set the current table bet, if any.
    #[must_use]
    pub fn last_bettor(&self) -> Option<&Player> {
        self.last_bettor.map(|index| &self.players[index])
    }

    /// Returns the player expected to act, or `None` once the game has
    /// finished.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        match self.status {
            GameStatus::OnGoing => Some(&self.players[self.turn]),
            GameStatus::Finished => None,
        }
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Moves `amount` from the player at `index` into the pot.
    ///
    /// The caller has already verified that the player can cover `amount`.
    fn take_into_pot(&mut self, index: usize, amount: usize) {
        self.players[index].withdraw(amount);
        self.pot += amount;
    }

    /// Ends the game and pays the whole pot to the winner.
    ///
    /// With no explicit winner, one is drawn uniformly at random among the
    /// active players; hands are never compared.
    fn end_game(&mut self, winner: Option<usize>) -> GameResult {
        self.status = GameStatus::Finished;

        let winner = winner.unwrap_or_else(|| {
            let active: Vec<usize> = self
                .players
                .iter()
                .enumerate()
                .filter(|(_, player)| !player.is_spectating())
                .map(|(index, _)| index)
                .collect();
            *active
                .choose(&mut self.rng)
                .expect("a game always ends with at least one active player")
        });

        let payout = self.pot;
        self.pot = 0;
        self.players[winner].deposit(payout);

        GameResult {
            winner: self.players[winner].name().to_owned(),
            payout,
            standings: self
                .players
                .iter()
                .map(|player| PlayerStanding {
                    name: player.name().to_owned(),
                    balance: player.balance(),
                })
                .collect(),
        }
    }
}
