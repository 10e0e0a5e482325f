use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};

/// A seeded 52-card deck that never runs dry.
///
/// Dealing past the last card transparently rebuilds a full 52-card set and
/// reshuffles it with the deck's own RNG stream, so callers treat the deck
/// as an endless card source. Because the RNG state serializes with the
/// deck, a snapshot reproduces the exact future card sequence, reshuffles
/// included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        let mut deck = Self {
            cards: full_deck(),
            position: 0,
            rng,
        };
        deck.shuffle();
        deck
    }

    /// Rebuild a full 52-card set, shuffle it, and move the cursor back to
    /// the top. The automatic reshuffle in [`Deck::deal_card`] is exactly
    /// this operation.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Deal the next card, reshuffling a fresh set first when the current
    /// one is exhausted. Dealing always succeeds.
    pub fn deal_card(&mut self) -> Card {
        if self.position >= self.cards.len() {
            self.shuffle();
        }
        let c = self.cards[self.position];
        self.position += 1;
        c
    }

    /// Cards left before the next automatic reshuffle.
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
