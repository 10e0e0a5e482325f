use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::rules::{BLACKJACK, DEALER_STAND_MIN};

/// Lifecycle of a single round.
///
/// `Deal -> PlayerTurn -> DealerTurn -> Resolved`, with two shortcuts the
/// engine takes on its own: a dealt 21 skips `PlayerTurn`, and a player
/// bust skips `DealerTurn` (the dealer never draws against a busted
/// player).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No cards dealt yet
    Deal,
    /// Player decides hit or stand
    PlayerTurn,
    /// Dealer draws to the house rule
    DealerTurn,
    /// Outcome available
    Resolved,
}

/// Result of a resolved round, seen from the player's side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Push,
}

impl Outcome {
    /// Settlement units: +1 for a win, -1 for a loss, 0 for a push.
    pub fn net_units(self) -> i32 {
        match self {
            Outcome::Win => 1,
            Outcome::Loss => -1,
            Outcome::Push => 0,
        }
    }
}

/// One round of blackjack as an explicit state machine.
///
/// Every operation is gated on the phase it belongs to and returns
/// [`GameError::InvalidPhase`] otherwise; nothing panics and nothing is
/// silently ignored. The round itself never touches a policy: callers ask
/// their policy whether to hit while [`Round::phase`] is
/// [`Phase::PlayerTurn`], and the engine enforces the hard stop at 21
/// regardless of what the policy answers.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    player: Hand,
    dealer: Hand,
    phase: Phase,
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

impl Round {
    pub fn new() -> Self {
        Self {
            player: Hand::new(),
            dealer: Hand::new(),
            phase: Phase::Deal,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// The dealer's face-up card (their first), once dealt.
    pub fn dealer_upcard(&self) -> Option<Card> {
        self.dealer.cards().first().copied()
    }

    fn require_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase != expected {
            return Err(GameError::InvalidPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    /// Deal the opening hands in fixed order: player, player, dealer,
    /// dealer.
    ///
    /// A dealt 21 (the only way two cards reach the target) ends the
    /// player's turn before it starts and the round moves straight to the
    /// dealer.
    pub fn deal(&mut self, deck: &mut Deck) -> Result<(), GameError> {
        self.require_phase(Phase::Deal)?;
        self.player.push(deck.deal_card());
        self.player.push(deck.deal_card());
        self.dealer.push(deck.deal_card());
        self.dealer.push(deck.deal_card());
        self.phase = if self.player.value() >= BLACKJACK {
            Phase::DealerTurn
        } else {
            Phase::PlayerTurn
        };
        Ok(())
    }

    /// Deal one card to the player and return the new total.
    ///
    /// A bust resolves the round immediately with the dealer's hand
    /// untouched; a total of exactly 21 hands play to the dealer.
    pub fn player_hit(&mut self, deck: &mut Deck) -> Result<u8, GameError> {
        self.require_phase(Phase::PlayerTurn)?;
        self.player.push(deck.deal_card());
        let total = self.player.value();
        if total > BLACKJACK {
            self.phase = Phase::Resolved;
        } else if total == BLACKJACK {
            self.phase = Phase::DealerTurn;
        }
        Ok(total)
    }

    pub fn player_stand(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::PlayerTurn)?;
        self.phase = Phase::DealerTurn;
        Ok(())
    }

    /// Dealer draws while strictly below [`DEALER_STAND_MIN`], then the
    /// round resolves. Returns the dealer's final total.
    pub fn play_dealer(&mut self, deck: &mut Deck) -> Result<u8, GameError> {
        self.require_phase(Phase::DealerTurn)?;
        while self.dealer.value() < DEALER_STAND_MIN {
            self.dealer.push(deck.deal_card());
        }
        self.phase = Phase::Resolved;
        Ok(self.dealer.value())
    }

    /// Outcome of a resolved round: a busted player loses, a busted dealer
    /// wins for the player, otherwise the higher total wins and equal
    /// totals push.
    pub fn outcome(&self) -> Result<Outcome, GameError> {
        self.require_phase(Phase::Resolved)?;
        let player = self.player.value();
        let dealer = self.dealer.value();
        if player > BLACKJACK {
            return Ok(Outcome::Loss);
        }
        if dealer > BLACKJACK {
            return Ok(Outcome::Win);
        }
        Ok(match player.cmp(&dealer) {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Loss,
            Ordering::Equal => Outcome::Push,
        })
    }
}
