use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::rules::BLACKJACK;

/// A blackjack hand and its running count.
///
/// Aces enter the count at 11 and are demoted to 1 one at a time while the
/// total exceeds 21. A hand is soft while an ace still counts 11 in its
/// best total.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Best total of the hand: aces count 11 until the hand would bust,
    /// then demote one ace at a time. An empty hand totals 0.
    pub fn value(&self) -> u8 {
        self.evaluate().0
    }

    /// True when an ace still counts 11 in the best total.
    pub fn is_soft(&self) -> bool {
        self.evaluate().1
    }

    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    fn evaluate(&self) -> (u8, bool) {
        let mut total: u16 = 0;
        let mut high_aces: u16 = 0;
        for card in &self.cards {
            total += u16::from(card.value());
            if card.rank == Rank::Ace {
                high_aces += 1;
            }
        }
        while total > u16::from(BLACKJACK) && high_aces > 0 {
            total -= 10;
            high_aces -= 1;
        }
        // clamp instead of wrapping for absurd many-card hands
        (u8::try_from(total).unwrap_or(u8::MAX), high_aces > 0)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
