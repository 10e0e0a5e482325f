//! Card, hand, and outcome formatters for terminal display.
//!
//! This module provides pure functions for formatting game elements (cards,
//! hands, round outcomes) for terminal output. It supports Unicode card
//! symbols with ASCII fallback for terminal environments that don't support
//! Unicode rendering.
//!
//! ## Unicode vs ASCII Fallback
//!
//! The module automatically detects whether the terminal supports Unicode
//! symbols by checking environment variables on Windows (WT_SESSION, TERM_PROGRAM,
//! VSCODE_INJECTION) and assumes Unicode support on Unix-like systems.
//!
//! - **Unicode mode**: Uses ♥ ♦ ♣ ♠ symbols
//! - **ASCII mode**: Uses h d c s letters
//!
//! ## Example
//!
//! ```rust
//! use vingt_engine::cards::{Card, Rank, Suit};
//! use vingt_cli::formatters::{format_card, format_hand};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let hand = vec![ace_spades];
//! assert!(format_hand(&hand).starts_with("A"));
//! ```

use vingt_engine::cards::{Card, Rank, Suit};
use vingt_engine::round::Outcome;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
///
/// # Returns
///
/// `true` if Unicode symbols are supported, `false` for ASCII fallback
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit as a string using Unicode symbols with ASCII fallback.
///
/// # Unicode symbols
/// - Hearts: ♥
/// - Diamonds: ♦
/// - Clubs: ♣
/// - Spades: ♠
///
/// # ASCII fallback
/// - Hearts: h
/// - Diamonds: d
/// - Clubs: c
/// - Spades: s
///
/// # Arguments
///
/// * `suit` - The suit to format
///
/// # Returns
///
/// Formatted suit as a String
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as a string (2-10, J, Q, K, A).
///
/// Ten renders as "10", the usual blackjack chart convention.
///
/// # Arguments
///
/// * `rank` - The rank to format
///
/// # Returns
///
/// String representation of the rank
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
    .to_string()
}

/// Format a Card as a string combining rank and suit.
///
/// # Arguments
///
/// * `card` - The card to format
///
/// # Returns
///
/// String like "A♠" (Unicode) or "As" (ASCII)
///
/// # Example
///
/// ```rust
/// use vingt_engine::cards::{Card, Rank, Suit};
/// # use vingt_cli::formatters::format_card;
///
/// let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
/// let formatted = format_card(&ace_spades);
/// assert!(formatted == "A♠" || formatted == "As");
/// ```
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a hand (list of cards) as a space-separated string.
///
/// # Arguments
///
/// * `cards` - Slice of cards in dealt order
///
/// # Returns
///
/// String like "A♠ 7♥" or "" for an empty hand
pub fn format_hand(cards: &[Card]) -> String {
    let formatted_cards: Vec<String> = cards.iter().map(format_card).collect();
    formatted_cards.join(" ")
}

/// Format a round outcome from the player's side.
///
/// # Arguments
///
/// * `outcome` - The resolved outcome to format
///
/// # Returns
///
/// One of "win", "loss", "push"
pub fn format_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "win",
        Outcome::Loss => "loss",
        Outcome::Push => "push",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rank() {
        assert_eq!(format_rank(&Rank::Two), "2");
        assert_eq!(format_rank(&Rank::Ten), "10");
        assert_eq!(format_rank(&Rank::Jack), "J");
        assert_eq!(format_rank(&Rank::Queen), "Q");
        assert_eq!(format_rank(&Rank::King), "K");
        assert_eq!(format_rank(&Rank::Ace), "A");
    }

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        // Test that format_suit returns valid output (either Unicode or ASCII)
        let hearts = format_suit(&Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");

        let diamonds = format_suit(&Suit::Diamonds);
        assert!(diamonds == "♦" || diamonds == "d");

        let clubs = format_suit(&Suit::Clubs);
        assert!(clubs == "♣" || clubs == "c");

        let spades = format_suit(&Suit::Spades);
        assert!(spades == "♠" || spades == "s");
    }

    #[test]
    fn test_format_card() {
        let ace_spades = Card {
            rank: Rank::Ace,
            suit: Suit::Spades,
        };
        let formatted = format_card(&ace_spades);
        assert!(formatted == "A♠" || formatted == "As");
    }

    #[test]
    fn test_format_hand_empty() {
        let empty: Vec<Card> = vec![];
        assert_eq!(format_hand(&empty), "");
    }

    #[test]
    fn test_format_hand_with_cards() {
        let hand = vec![
            Card {
                rank: Rank::Ace,
                suit: Suit::Spades,
            },
            Card {
                rank: Rank::King,
                suit: Suit::Hearts,
            },
        ];
        let formatted = format_hand(&hand);
        assert!(formatted.starts_with("A"));
        assert!(formatted.contains("K"));
        assert!(formatted.contains(' '), "cards should be space-separated");
    }

    #[test]
    fn test_format_ten_uses_two_digits() {
        let ten = Card {
            rank: Rank::Ten,
            suit: Suit::Clubs,
        };
        assert!(format_card(&ten).starts_with("10"));
    }

    #[test]
    fn test_format_outcome_names() {
        assert_eq!(format_outcome(Outcome::Win), "win");
        assert_eq!(format_outcome(Outcome::Loss), "loss");
        assert_eq!(format_outcome(Outcome::Push), "push");
    }
}
