use thiserror::Error;

use vingt_engine::errors::GameError;

/// Errors from simulation configuration and execution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("Invalid round count: {rounds}, minimum: 1")]
    InvalidRounds { rounds: u64 },

    #[error("Invalid walk count: {walks}, minimum: 1")]
    InvalidWalks { walks: u64 },

    #[error("Invalid starting capital: {capital}, minimum: 1")]
    InvalidCapital { capital: i64 },

    #[error("Invalid bet amount: {bet}, minimum: 1")]
    InvalidBet { bet: i64 },

    #[error("Invalid trial count: {trials}, minimum: 1")]
    InvalidTrials { trials: u64 },

    #[error("Empty threshold range: {from}..={to}")]
    EmptyThresholds { from: u8, to: u8 },

    #[error(transparent)]
    Engine(#[from] GameError),
}
