//! Round batches over one shared deck, and the threshold sweep.

use std::ops::RangeInclusive;

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use vingt_engine::cards::Card;
use vingt_engine::deck::Deck;
use vingt_engine::errors::GameError;
use vingt_engine::round::{Outcome, Phase, Round};
use vingt_engine::rules::{validate_threshold, DEFAULT_THRESHOLD};
use vingt_strategy::threshold::FixedThreshold;
use vingt_strategy::Strategy;

use crate::derive_seed;
use crate::errors::SimError;

/// The threshold span the original comparison ran: standing below 11
/// throws away free cards, hitting past 20 is guaranteed ruin.
pub const DEFAULT_SWEEP_RANGE: RangeInclusive<u8> = 11..=20;

/// Everything worth keeping from one resolved round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub outcome: Outcome,
    pub player_total: u8,
    pub dealer_total: u8,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
}

/// Drive one round to resolution against `policy`.
///
/// The policy is consulted only while the engine leaves the player's turn
/// open, so the hard stop at 21 and the bust short-circuit stay with the
/// engine. The deck is shared state: consecutive calls continue the same
/// card stream, reshuffles included.
pub fn play_round(
    deck: &mut Deck,
    policy: &dyn Strategy,
) -> Result<RoundSummary, GameError> {
    let mut round = Round::new();
    round.deal(deck)?;
    while round.phase() == Phase::PlayerTurn {
        let hand = round.player();
        if policy.wants_hit(hand.value(), hand.is_soft()) {
            round.player_hit(deck)?;
        } else {
            round.player_stand()?;
        }
    }
    if round.phase() == Phase::DealerTurn {
        round.play_dealer(deck)?;
    }
    let outcome = round.outcome()?;
    Ok(RoundSummary {
        outcome,
        player_total: round.player().value(),
        dealer_total: round.dealer().value(),
        player_cards: round.player().cards().to_vec(),
        dealer_cards: round.dealer().cards().to_vec(),
    })
}

/// Configuration for one simulation batch.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub rounds: u64,
    pub threshold: u8,
    /// `None` draws a fresh random seed; the report echoes whichever seed
    /// was used.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rounds: 10_000,
            threshold: DEFAULT_THRESHOLD,
            seed: None,
        }
    }
}

/// Tallies for one batch. `wins + losses + pushes == rounds` always holds.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct SimReport {
    pub rounds: u64,
    pub wins: u64,
    pub losses: u64,
    pub pushes: u64,
    /// The seed the batch actually ran with.
    pub seed: u64,
}

impl SimReport {
    pub fn win_rate(&self) -> f64 {
        self.wins as f64 / self.rounds as f64
    }

    pub fn loss_rate(&self) -> f64 {
        self.losses as f64 / self.rounds as f64
    }

    pub fn push_rate(&self) -> f64 {
        self.pushes as f64 / self.rounds as f64
    }

    /// Per-round expectation in wager units: win rate minus loss rate.
    pub fn expected_return(&self) -> f64 {
        self.win_rate() - self.loss_rate()
    }
}

/// Play `config.rounds` rounds with a fixed-threshold policy against one
/// shared auto-reshuffling deck and tally the outcomes.
pub fn simulate(config: &SimConfig) -> Result<SimReport, SimError> {
    if config.rounds == 0 {
        return Err(SimError::InvalidRounds { rounds: 0 });
    }
    let policy = FixedThreshold::new(config.threshold)?;
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());

    let mut deck = Deck::new_with_seed(seed);
    let mut report = SimReport {
        rounds: config.rounds,
        wins: 0,
        losses: 0,
        pushes: 0,
        seed,
    };
    for _ in 0..config.rounds {
        match play_round(&mut deck, &policy)?.outcome {
            Outcome::Win => report.wins += 1,
            Outcome::Loss => report.losses += 1,
            Outcome::Push => report.pushes += 1,
        }
    }
    Ok(report)
}

/// Configuration for a threshold sweep.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Rounds per threshold, not in total.
    pub rounds: u64,
    pub thresholds: RangeInclusive<u8>,
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            rounds: 10_000,
            thresholds: DEFAULT_SWEEP_RANGE,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SweepEntry {
    pub threshold: u8,
    pub report: SimReport,
}

/// Sweep results in ascending threshold order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub entries: Vec<SweepEntry>,
    /// Threshold with the highest expected return; ties go to the lowest
    /// threshold.
    pub best: u8,
}

/// Run one independent batch per threshold, in parallel.
///
/// Each threshold gets its own deck seeded by [`derive_seed`] from the
/// base seed and the threshold itself, so the sweep is reproducible and
/// the entries arrive in ascending threshold order no matter how rayon
/// schedules them.
pub fn sweep(config: &SweepConfig) -> Result<SweepReport, SimError> {
    if config.rounds == 0 {
        return Err(SimError::InvalidRounds { rounds: 0 });
    }
    let (from, to) = (*config.thresholds.start(), *config.thresholds.end());
    if config.thresholds.is_empty() {
        return Err(SimError::EmptyThresholds { from, to });
    }
    validate_threshold(from)?;
    validate_threshold(to)?;
    let base = config.seed.unwrap_or_else(|| rand::rng().random());

    let entries: Vec<SweepEntry> = config
        .thresholds
        .clone()
        .into_par_iter()
        .map(|threshold| {
            let sim = SimConfig {
                rounds: config.rounds,
                threshold,
                seed: Some(derive_seed(base, u64::from(threshold))),
            };
            simulate(&sim).map(|report| SweepEntry { threshold, report })
        })
        .collect::<Result<_, _>>()?;

    // First maximum in ascending order: ties resolve to the lowest
    // threshold.
    let mut best = from;
    let mut best_return = f64::NEG_INFINITY;
    for entry in &entries {
        let ret = entry.report.expected_return();
        if ret > best_return {
            best = entry.threshold;
            best_return = ret;
        }
    }

    Ok(SweepReport { entries, best })
}
