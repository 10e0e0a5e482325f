//! Analytic decision tables over the fresh 52-card rank population.
//!
//! Everything in this module is closed-form over rank counts (four copies
//! of each rank, 52 cards total) and deliberately independent of any live
//! deck: the tables describe the single-draw odds a fresh deck offers,
//! which is what a hit/stand chart is built from.

use serde::{Deserialize, Serialize};

use crate::cards::{all_ranks, Rank};
use crate::rules::{BLACKJACK, DECK_SIZE};

const CARDS_PER_RANK: f64 = 4.0;
const DECK_CARDS: f64 = DECK_SIZE as f64;

/// Probability, in percent, that a single draw busts the given total.
///
/// An ace counts 1 here because it can always be demoted, so it never busts
/// a hand on its own. A total at or above 21 busts with certainty
/// (`bust_probability(21) == 100.0`); totals of 11 or less cannot bust at
/// all (`bust_probability(11) == 0.0`, even a ten makes exactly 21).
pub fn bust_probability(total: u8) -> f64 {
    if total >= BLACKJACK {
        return 100.0;
    }
    let mut safe_ranks = 0u32;
    for rank in all_ranks() {
        let draw = if rank == Rank::Ace { 1 } else { rank.value() };
        if total + draw <= BLACKJACK {
            safe_ranks += 1;
        }
    }
    (1.0 - (f64::from(safe_ranks) * CARDS_PER_RANK) / DECK_CARDS) * 100.0
}

/// Expected hand value after exactly one hit from the given total.
///
/// Per rank: an ace counts 11 when it fits (total + 11 <= 21) and 1
/// otherwise; a draw that busts contributes a hand value of 0. Each rank
/// carries weight 4/52. Totals at or above 21 return 0.0 since every draw
/// busts.
pub fn hit_expected_value(total: u8) -> f64 {
    if total >= BLACKJACK {
        return 0.0;
    }
    let mut expected = 0.0;
    for rank in all_ranks() {
        let draw = if rank == Rank::Ace {
            if total + 11 <= BLACKJACK {
                11
            } else {
                1
            }
        } else {
            rank.value()
        };
        let new_total = total + draw;
        let value = if new_total > BLACKJACK { 0 } else { new_total };
        expected += f64::from(value) * CARDS_PER_RANK / DECK_CARDS;
    }
    expected
}

/// One row of the hit/stand decision chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionRow {
    pub total: u8,
    /// Percent chance a single draw busts this total.
    pub bust_probability: f64,
    /// Expected hand value after one hit (busts count 0).
    pub hit_expected_value: f64,
}

/// Rows for every total from 4 (the lowest two-card hand) through
/// `max_total`, capped at 21.
pub fn decision_table(max_total: u8) -> Vec<DecisionRow> {
    (4..=max_total.min(BLACKJACK))
        .map(|total| DecisionRow {
            total,
            bust_probability: bust_probability(total),
            hit_expected_value: hit_expected_value(total),
        })
        .collect()
}

/// Draw odds for a single rank in a fresh deck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankProbability {
    pub rank: Rank,
    /// Copies of the rank in the deck (always 4).
    pub count: u8,
    /// Percent chance of drawing this rank.
    pub probability: f64,
}

/// Per-rank draw odds: four copies each, 4/52 per rank.
pub fn rank_probabilities() -> Vec<RankProbability> {
    all_ranks()
        .iter()
        .map(|&rank| RankProbability {
            rank,
            count: 4,
            probability: CARDS_PER_RANK / DECK_CARDS * 100.0,
        })
        .collect()
}

/// Combined odds, in percent, of drawing any ten-count card
/// (Ten, Jack, Queen, King): 16/52.
pub fn ten_group_probability() -> f64 {
    let ten_ranks = all_ranks().iter().filter(|r| r.is_ten_count()).count();
    ten_ranks as f64 * CARDS_PER_RANK / DECK_CARDS * 100.0
}
