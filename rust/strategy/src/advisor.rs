//! Probability-based hit/stand advice for interactive play.
//!
//! Turns the numbers the player can see at the table (their bust odds on
//! the next card and their estimated win chance if they stand now) into a
//! one-word recommendation. The rule is deliberately coarse: it exists to
//! explain the numbers, not to outplay the fixed-threshold policies.

use std::fmt;

/// A hit/stand recommendation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Advice {
    Hit,
    Stand,
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advice::Hit => write!(f, "Hit"),
            Advice::Stand => write!(f, "Stand"),
        }
    }
}

/// Recommend hit or stand from the player's total and table odds.
///
/// Both probabilities are percentages in `0.0..=100.0`:
/// `bust_probability` is the chance the next draw busts this total (see
/// the decision tables), `win_probability` the estimated chance of winning
/// if the player stands now.
///
/// The rule, applied in order:
///
/// 1. A made hand (17+) with a better-than-45% win chance stands.
/// 2. A hand that is safe to hit (bust odds under 30%, or a total of 11
///    or less where busting is impossible) hits.
/// 3. Otherwise the win chance arbitrates: over 40% stands, else hit.
///
/// # Example
///
/// ```rust
/// use vingt_strategy::advisor::{advise, Advice};
///
/// // 18 against a weak upcard: stand on the made hand.
/// assert_eq!(advise(18, 61.5, 54.0), Advice::Stand);
///
/// // 9 can never bust: always worth a card.
/// assert_eq!(advise(9, 0.0, 20.0), Advice::Hit);
/// ```
pub fn advise(total: u8, bust_probability: f64, win_probability: f64) -> Advice {
    if total >= 17 && win_probability > 45.0 {
        return Advice::Stand;
    }
    if bust_probability < 30.0 || total <= 11 {
        return Advice::Hit;
    }
    if win_probability > 40.0 {
        Advice::Stand
    } else {
        Advice::Hit
    }
}
