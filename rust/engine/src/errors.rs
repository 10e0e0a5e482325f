use thiserror::Error;

use crate::round::Phase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Operation requires phase {expected:?}, current phase is {actual:?}")]
    InvalidPhase { expected: Phase, actual: Phase },
    #[error("Round already in progress (phase {phase:?})")]
    RoundInProgress { phase: Phase },
    #[error("Invalid hit threshold: {threshold}, accepted range: {min}..={max}")]
    InvalidThreshold { threshold: u8, min: u8, max: u8 },
    #[error("Invalid bet amount: {bet}, minimum: 1")]
    InvalidBet { bet: i64 },
    #[error("Out of capital: {capital}")]
    OutOfCapital { capital: i64 },
    #[error("Bet can only change between rounds (phase {phase:?})")]
    BetLocked { phase: Phase },
}
