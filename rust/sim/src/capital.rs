//! Capital walks under a fixed bet, and the ruin distribution across many
//! independent walks.

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use vingt_engine::deck::Deck;
use vingt_engine::round::Outcome;
use vingt_engine::rules::{validate_threshold, DEFAULT_THRESHOLD};
use vingt_strategy::threshold::FixedThreshold;

use crate::derive_seed;
use crate::errors::SimError;
use crate::monte_carlo::play_round;

/// Configuration for a single capital walk.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct WalkConfig {
    pub initial_capital: i64,
    pub bet: i64,
    /// Upper bound on rounds; ruin stops the walk early.
    pub rounds: u64,
    pub threshold: u8,
    pub seed: Option<u64>,
}

impl Default for WalkConfig {
    /// The original experiment: 100 units of capital, one unit per round,
    /// a thousand rounds.
    fn default() -> Self {
        Self {
            initial_capital: 100,
            bet: 1,
            rounds: 1_000,
            threshold: DEFAULT_THRESHOLD,
            seed: None,
        }
    }
}

/// Trajectory of one walk.
///
/// `trajectory[0]` is the starting capital and every later entry is the
/// capital after one settled round, so
/// `trajectory.len() == rounds_played + 1`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct WalkReport {
    pub trajectory: Vec<i64>,
    pub final_capital: i64,
    pub rounds_played: u64,
    pub ruined: bool,
}

fn validate(config: &WalkConfig) -> Result<(), SimError> {
    if config.rounds == 0 {
        return Err(SimError::InvalidRounds { rounds: 0 });
    }
    if config.initial_capital < 1 {
        return Err(SimError::InvalidCapital {
            capital: config.initial_capital,
        });
    }
    if config.bet < 1 {
        return Err(SimError::InvalidBet { bet: config.bet });
    }
    validate_threshold(config.threshold)?;
    Ok(())
}

/// Walk the bankroll through up to `config.rounds` rounds.
///
/// The ruin check comes before play: a walk whose capital is gone plays
/// nothing further. Each round stakes `min(bet, capital)`, so the last
/// units are wagered whole and the capital can reach zero but never cross
/// it.
pub fn simulate_capital(config: &WalkConfig) -> Result<WalkReport, SimError> {
    validate(config)?;
    let policy = FixedThreshold::new(config.threshold)?;
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut deck = Deck::new_with_seed(seed);

    let mut capital = config.initial_capital;
    let mut trajectory = vec![capital];
    for _ in 0..config.rounds {
        if capital <= 0 {
            break;
        }
        let wager = config.bet.min(capital);
        match play_round(&mut deck, &policy)?.outcome {
            Outcome::Win => capital += wager,
            Outcome::Loss => capital -= wager,
            Outcome::Push => {}
        }
        trajectory.push(capital);
    }

    let rounds_played = (trajectory.len() - 1) as u64;
    Ok(WalkReport {
        final_capital: capital,
        rounds_played,
        ruined: capital <= 0,
        trajectory,
    })
}

/// Configuration for a batch of independent walks.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DistributionConfig {
    pub walks: u64,
    /// Per-walk settings; `walk.seed` acts as the base seed for the batch.
    pub walk: WalkConfig,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            walks: 1_000,
            walk: WalkConfig::default(),
        }
    }
}

/// Aggregates over a batch of walks, in walk-index order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionReport {
    pub walks: u64,
    pub ruined: u64,
    /// Fraction of walks that ended ruined, in `0.0..=1.0`.
    pub ruin_rate: f64,
    /// For each ruined walk: rounds survived before the bankroll died.
    pub rounds_to_ruin: Vec<u64>,
    pub mean_final_capital: f64,
    pub min_final_capital: i64,
    pub max_final_capital: i64,
}

impl DistributionReport {
    /// Mean rounds survived across ruined walks; `None` when nothing was
    /// ruined.
    pub fn mean_rounds_to_ruin(&self) -> Option<f64> {
        if self.rounds_to_ruin.is_empty() {
            return None;
        }
        let sum: u64 = self.rounds_to_ruin.iter().sum();
        Some(sum as f64 / self.rounds_to_ruin.len() as f64)
    }
}

/// Run `config.walks` independent walks in parallel and aggregate.
///
/// Walk `i` runs with [`derive_seed`]`(base, i)`, so a distribution is
/// reproducible from its base seed and identical however rayon schedules
/// the walks.
pub fn capital_distribution(
    config: &DistributionConfig,
) -> Result<DistributionReport, SimError> {
    if config.walks == 0 {
        return Err(SimError::InvalidWalks { walks: 0 });
    }
    validate(&config.walk)?;
    let base = config.walk.seed.unwrap_or_else(|| rand::rng().random());

    let reports: Vec<WalkReport> = (0..config.walks)
        .into_par_iter()
        .map(|walk| {
            let cfg = WalkConfig {
                seed: Some(derive_seed(base, walk)),
                ..config.walk.clone()
            };
            simulate_capital(&cfg)
        })
        .collect::<Result<_, _>>()?;

    let mut ruined = 0u64;
    let mut rounds_to_ruin = Vec::new();
    let mut sum = 0.0;
    let mut min_final = i64::MAX;
    let mut max_final = i64::MIN;
    for report in &reports {
        sum += report.final_capital as f64;
        min_final = min_final.min(report.final_capital);
        max_final = max_final.max(report.final_capital);
        if report.ruined {
            ruined += 1;
            rounds_to_ruin.push(report.rounds_played);
        }
    }

    Ok(DistributionReport {
        walks: config.walks,
        ruined,
        ruin_rate: ruined as f64 / config.walks as f64,
        rounds_to_ruin,
        mean_final_capital: sum / config.walks as f64,
        min_final_capital: min_final,
        max_final_capital: max_final,
    })
}
