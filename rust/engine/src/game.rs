use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::round::{Outcome, Phase, Round};

/// Complete state of an interactive play session: deck (with its RNG
/// stream and cursor), current round, bankroll, and running tallies.
///
/// The whole struct serializes, so a front end can snapshot a session and
/// restore it to the exact same future card sequence.
///
/// Settlement is applied exactly once per round, the moment the round
/// resolves inside [`GameState::hit`], [`GameState::stand`], or
/// [`GameState::start_round`] (a dealt 21 plays the dealer out
/// immediately). Wins pay the wager, losses cost it, pushes leave the
/// bankroll unchanged, and the wager itself is clamped to the available
/// capital when the round starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    deck: Deck,
    round: Round,
    capital: i64,
    bet: i64,
    wager: i64,
    rounds_played: u64,
    wins: u64,
    losses: u64,
    pushes: u64,
    last_outcome: Option<Outcome>,
}

impl GameState {
    pub fn new(seed: u64, starting_capital: i64, bet: i64) -> Result<Self, GameError> {
        if starting_capital <= 0 {
            return Err(GameError::OutOfCapital {
                capital: starting_capital,
            });
        }
        if bet <= 0 {
            return Err(GameError::InvalidBet { bet });
        }
        Ok(Self {
            deck: Deck::new_with_seed(seed),
            round: Round::new(),
            capital: starting_capital,
            bet,
            wager: 0,
            rounds_played: 0,
            wins: 0,
            losses: 0,
            pushes: 0,
            last_outcome: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    pub fn capital(&self) -> i64 {
        self.capital
    }

    pub fn bet(&self) -> i64 {
        self.bet
    }

    /// The stake of the round in progress (or the last settled round):
    /// `min(bet, capital at deal time)`.
    pub fn wager(&self) -> i64 {
        self.wager
    }

    pub fn player_hand(&self) -> &Hand {
        self.round.player()
    }

    pub fn dealer_hand(&self) -> &Hand {
        self.round.dealer()
    }

    pub fn dealer_upcard(&self) -> Option<Card> {
        self.round.dealer_upcard()
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    pub fn wins(&self) -> u64 {
        self.wins
    }

    pub fn losses(&self) -> u64 {
        self.losses
    }

    pub fn pushes(&self) -> u64 {
        self.pushes
    }

    /// Outcome of the last settled round, cleared when a new one starts.
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn is_ruined(&self) -> bool {
        self.capital <= 0
    }

    /// Change the per-round bet. Only allowed between rounds.
    pub fn set_bet(&mut self, bet: i64) -> Result<(), GameError> {
        if bet <= 0 {
            return Err(GameError::InvalidBet { bet });
        }
        match self.round.phase() {
            Phase::Deal | Phase::Resolved => {
                self.bet = bet;
                Ok(())
            }
            phase => Err(GameError::BetLocked { phase }),
        }
    }

    /// Start a new round: check for ruin, clamp the wager to the available
    /// capital, and deal. A dealt 21 plays the dealer out and settles
    /// before returning.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        match self.round.phase() {
            Phase::Deal | Phase::Resolved => {}
            phase => return Err(GameError::RoundInProgress { phase }),
        }
        if self.capital <= 0 {
            return Err(GameError::OutOfCapital {
                capital: self.capital,
            });
        }
        self.wager = self.bet.min(self.capital);
        self.last_outcome = None;
        self.round = Round::new();
        self.round.deal(&mut self.deck)?;
        if self.round.phase() == Phase::DealerTurn {
            self.finish_dealer()?;
        }
        Ok(())
    }

    /// Deal one card to the player. Settles immediately on a bust; plays
    /// the dealer out and settles when the hit lands exactly on 21.
    pub fn hit(&mut self) -> Result<u8, GameError> {
        let total = self.round.player_hit(&mut self.deck)?;
        match self.round.phase() {
            Phase::Resolved => self.settle()?,
            Phase::DealerTurn => self.finish_dealer()?,
            _ => {}
        }
        Ok(total)
    }

    /// End the player's turn; the dealer plays out and the round settles.
    pub fn stand(&mut self) -> Result<(), GameError> {
        self.round.player_stand()?;
        self.finish_dealer()
    }

    fn finish_dealer(&mut self) -> Result<(), GameError> {
        self.round.play_dealer(&mut self.deck)?;
        self.settle()
    }

    fn settle(&mut self) -> Result<(), GameError> {
        let outcome = self.round.outcome()?;
        match outcome {
            Outcome::Win => {
                self.capital += self.wager;
                self.wins += 1;
            }
            Outcome::Loss => {
                self.capital -= self.wager;
                self.losses += 1;
            }
            Outcome::Push => {
                self.pushes += 1;
            }
        }
        self.rounds_played += 1;
        self.last_outcome = Some(outcome);
        Ok(())
    }
}
