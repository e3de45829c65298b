use crate::error::ActionError;
use crate::player::RoundStatus;

use super::{ActionOutcome, FINAL_ROUND, Game, GameStatus};

/// A player action, with the bet amount attached where one is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pass without betting. Legal only while the table bet is zero.
    Check,
    /// Open the betting with the given amount.
    Bet(usize),
    /// Match the current table bet.
    Call,
    /// Leave the game and spectate for its remainder.
    Fold,
}

impl Action {
    /// Parses an action from its name and an optional amount argument.
    ///
    /// Names are matched case-insensitively; the amount is required for
    /// `bet` and ignored otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnknownAction`] for an unrecognized name,
    /// [`ActionError::MalformedAmount`] if the bet amount is missing or not
    /// an integer, and [`ActionError::InvalidBet`] if it is zero or
    /// negative.
    ///
    /// # Example
    ///
    /// ```
    /// use holdrs::Action;
    ///
    /// assert_eq!(Action::parse("Bet", Some("50")), Ok(Action::Bet(50)));
    /// assert_eq!(Action::parse("fold", None), Ok(Action::Fold));
    /// ```
    pub fn parse(name: &str, amount: Option<&str>) -> Result<Self, ActionError> {
        match name.trim().to_lowercase().as_str() {
            "check" => Ok(Self::Check),
            "call" => Ok(Self::Call),
            "fold" => Ok(Self::Fold),
            "bet" => {
                let raw = amount.ok_or(ActionError::MalformedAmount)?;
                let amount: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ActionError::MalformedAmount)?;
                if amount <= 0 {
                    return Err(ActionError::InvalidBet);
                }
                Ok(Self::Bet(amount as usize))
            }
            _ => Err(ActionError::UnknownAction),
        }
    }
}

impl Game {
    /// Applies an action for the named player and advances the turn.
    ///
    /// The action must come from the current player. All validation happens
    /// before any money moves, so a rejected action leaves the pot, the
    /// table bet, and every balance untouched; the caller simply asks the
    /// same player again.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has finished, it is not this player's
    /// turn, the action is not legal given the current table bet, the bet
    /// amount is zero, the player's balance cannot cover the amount, or the
    /// deck runs out while revealing a community card.
    pub fn apply(&mut self, name: &str, action: Action) -> Result<ActionOutcome, ActionError> {
        if self.status != GameStatus::OnGoing {
            return Err(ActionError::GameOver);
        }
        if self.players[self.turn].name() != name {
            return Err(ActionError::NotYourTurn);
        }

        match action {
            Action::Check => {
                if self.current_table_bet != 0 {
                    return Err(ActionError::InvalidAction);
                }
                self.players[self.turn].set_round_status(RoundStatus::Checked);
            }
            Action::Bet(amount) => {
                if self.current_table_bet != 0 {
                    return Err(ActionError::InvalidAction);
                }
                if amount == 0 {
                    return Err(ActionError::InvalidBet);
                }
                if amount > self.players[self.turn].balance() {
                    return Err(ActionError::InsufficientFunds);
                }
                self.take_into_pot(self.turn, amount);
                self.current_table_bet = amount;
                self.last_bettor = Some(self.turn);
            }
            Action::Call => {
                if self.current_table_bet == 0 {
                    return Err(ActionError::InvalidAction);
                }
                if self.players[self.turn].balance() < self.current_table_bet {
                    return Err(ActionError::InsufficientFunds);
                }
                self.take_into_pot(self.turn, self.current_table_bet);
            }
            Action::Fold => {
                self.players[self.turn].set_spectating();
            }
        }

        self.advance_turn()
    }

    /// Moves play forward after a successful action.
    fn advance_turn(&mut self) -> Result<ActionOutcome, ActionError> {
        // A lone remaining player wins immediately, whatever the round.
        let mut remaining = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, player)| !player.is_spectating())
            .map(|(index, _)| index);
        let sole = remaining.next();
        let more = remaining.next().is_some();
        if let Some(index) = sole {
            if !more {
                return Ok(ActionOutcome::Finished(self.end_game(Some(index))));
            }
        }

        if let Some(next) = self.next_awaiting_player(self.turn + 1) {
            self.begin_turn(next);
            return Ok(ActionOutcome::Continue);
        }

        self.close_round()
    }

    /// Finds the next player who still owes an action this round, scanning
    /// the seating order cyclically from `start`.
    fn next_awaiting_player(&self, start: usize) -> Option<usize> {
        let count = self.players.len();
        (0..count)
            .map(|offset| (start + offset) % count)
            .find(|&index| {
                let player = &self.players[index];
                !player.is_spectating() && player.round_status() == RoundStatus::Ready
            })
    }

    /// Hands the turn to the player at `index`.
    ///
    /// When the last bettor is revisited with their bet uncontested, the
    /// table bet is cleared before they are asked to act, letting them
    /// re-open the betting.
    fn begin_turn(&mut self, index: usize) {
        self.turn = index;
        if self.last_bettor == Some(index) {
            self.current_table_bet = 0;
        }
    }

    /// Closes the current round: ends the game after the final round,
    /// otherwise starts the next one.
    fn close_round(&mut self) -> Result<ActionOutcome, ActionError> {
        if self.round == FINAL_ROUND {
            return Ok(ActionOutcome::Finished(self.end_game(None)));
        }

        self.round += 1;
        for player in &mut self.players {
            player.reset_round_status();
        }

        // The turn and the river each reveal one more community card.
        if self.round > 2 {
            let card = self.deck.draw()?;
            self.community_cards.push(card);
        }

        let next = self
            .next_awaiting_player(0)
            .expect("at least two active players remain when a round closes");
        self.begin_turn(next);

        Ok(ActionOutcome::NewRound(self.round))
    }
}
