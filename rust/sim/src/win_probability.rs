//! Empirical win odds for a player who stands, from dealer playouts.
//!
//! The analytic tables in `vingt-engine` answer "what happens if I draw";
//! this module answers "what happens if I stop". Each trial deals the
//! dealer out of a fresh deck with one copy of the upcard already gone,
//! which is everything the player actually knows at the table.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use vingt_engine::cards::{full_deck, Card, Rank, Suit};
use vingt_engine::hand::Hand;
use vingt_engine::rules::{BLACKJACK, DEALER_STAND_MIN};

use crate::errors::SimError;

/// Trials used by the interactive table when the caller does not choose.
pub const DEFAULT_TRIALS: u64 = 1_000;

/// Estimate the chance, in percent, that standing on `player_total` wins
/// against a dealer showing `upcard`.
///
/// Each trial shuffles a fresh 52-card deck minus one card of the
/// upcard's rank, then plays the dealer from the upcard to the house rule.
/// A dealer bust or a lower dealer total scores 1, a push scores 0.5, a
/// loss 0; the result is `100 * score / trials`.
///
/// A total above 21 is already lost and returns 0 without simulating.
///
/// # Errors
///
/// Returns [`SimError::InvalidTrials`] when `trials` is zero.
pub fn win_probability(
    player_total: u8,
    upcard: Rank,
    trials: u64,
    seed: u64,
) -> Result<f64, SimError> {
    if trials == 0 {
        return Err(SimError::InvalidTrials { trials });
    }
    if player_total > BLACKJACK {
        return Ok(0.0);
    }

    // The suit is invisible to the totals; one concrete card stands in for
    // the rank so exactly one copy leaves the deck.
    let upcard_card = Card {
        suit: Suit::Spades,
        rank: upcard,
    };
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut score = 0.0;

    for _ in 0..trials {
        let mut cards: Vec<Card> = full_deck()
            .into_iter()
            .filter(|card| *card != upcard_card)
            .collect();
        cards.shuffle(&mut rng);

        let mut dealer = Hand::new();
        dealer.push(upcard_card);
        let mut draws = cards.into_iter();
        while dealer.value() < DEALER_STAND_MIN {
            match draws.next() {
                Some(card) => dealer.push(card),
                None => break,
            }
        }

        let dealer_total = dealer.value();
        if dealer_total > BLACKJACK || player_total > dealer_total {
            score += 1.0;
        } else if player_total == dealer_total {
            score += 0.5;
        }
    }

    Ok(100.0 * score / trials as f64)
}
