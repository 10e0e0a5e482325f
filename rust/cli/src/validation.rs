//! Input parsing and validation for interactive commands.
//!
//! This module provides functions for parsing and validating user input in
//! interactive CLI commands. It handles:
//! - Table action parsing (hit, stand, advice, bet, deal)
//! - Dealer upcard parsing for the advise command
//!
//! ## Error Handling
//!
//! Validation functions return structured `Result` types or custom enums
//! (like `ParseResult`) to provide clear error messages to users.

use vingt_engine::cards::Rank;

/// A table action parsed from interactive input.
///
/// `Hit`, `Stand`, and `Advice` belong to an open player turn; `Deal` and
/// `Bet` belong to the pause between rounds. The play loop accepts any of
/// them at either prompt and lets the session state reject the ones that
/// don't fit the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    /// Draw one more card
    Hit,
    /// End the player turn and let the dealer play out
    Stand,
    /// Show bust and win probabilities for the current hand
    Advice,
    /// Start the next round
    Deal,
    /// Change the per-round bet to the given amount
    Bet(i64),
}

/// Result type for parsing user input into table actions.
///
/// This enum represents the three possible outcomes when parsing user input
/// in interactive gameplay commands:
/// - Valid table action (hit, stand, bet, etc.)
/// - Quit command (user wants to exit)
/// - Invalid input with error message
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid table action parsed from input
    Action(TableAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a TableAction or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "h" or "hit" → Hit
/// - "s", "stand", or "stay" → Stand
/// - "a" or "advice" → Advice
/// - "d" or "deal" → Deal
/// - "b X" or "bet X" → Bet with amount X
/// - "q" or "quit" → Quit command
///
/// # Arguments
///
/// * `input` - User input string to parse
///
/// # Returns
///
/// `ParseResult` indicating success, quit, or error with message
///
/// # Example
///
/// ```rust
/// # use vingt_cli::validation::{parse_table_action, ParseResult, TableAction};
/// assert_eq!(
///     parse_table_action("hit"),
///     ParseResult::Action(TableAction::Hit)
/// );
///
/// assert_eq!(
///     parse_table_action("bet 5"),
///     ParseResult::Action(TableAction::Bet(5))
/// );
///
/// assert_eq!(parse_table_action("q"), ParseResult::Quit);
///
/// match parse_table_action("invalid") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_table_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    // Check for quit commands first
    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    match parts[0] {
        "hit" | "h" => ParseResult::Action(TableAction::Hit),
        "stand" | "stay" | "s" => ParseResult::Action(TableAction::Stand),
        "advice" | "a" => ParseResult::Action(TableAction::Advice),
        "deal" | "d" => ParseResult::Action(TableAction::Deal),
        "bet" | "b" => {
            if parts.len() < 2 {
                return ParseResult::Invalid("Bet requires an amount (e.g., 'bet 5')".to_string());
            }
            match parts[1].parse::<i64>() {
                Ok(amount) if amount > 0 => ParseResult::Action(TableAction::Bet(amount)),
                Ok(_) => ParseResult::Invalid("Bet amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid("Invalid bet amount".to_string()),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: hit, stand, advice, deal, bet <amount>, q",
            parts[0]
        )),
    }
}

/// Parse a dealer upcard rank from user input.
///
/// Accepts "2" through "10" plus the face letters, case-insensitive; "T" is
/// an accepted alias for ten.
///
/// # Arguments
///
/// * `input` - Rank string to parse (e.g. "7", "10", "k")
///
/// # Returns
///
/// * `Ok(Rank)` - Parsed rank
/// * `Err(String)` - Unrecognized rank with error message
///
/// # Example
///
/// ```rust
/// # use vingt_cli::validation::parse_rank;
/// use vingt_engine::cards::Rank;
///
/// assert_eq!(parse_rank("7"), Ok(Rank::Seven));
/// assert_eq!(parse_rank("10"), Ok(Rank::Ten));
/// assert_eq!(parse_rank("t"), Ok(Rank::Ten));
/// assert_eq!(parse_rank("A"), Ok(Rank::Ace));
/// assert!(parse_rank("11").is_err());
/// ```
pub fn parse_rank(input: &str) -> Result<Rank, String> {
    let raw = input.trim();
    match raw.to_uppercase().as_str() {
        "2" => Ok(Rank::Two),
        "3" => Ok(Rank::Three),
        "4" => Ok(Rank::Four),
        "5" => Ok(Rank::Five),
        "6" => Ok(Rank::Six),
        "7" => Ok(Rank::Seven),
        "8" => Ok(Rank::Eight),
        "9" => Ok(Rank::Nine),
        "10" | "T" => Ok(Rank::Ten),
        "J" => Ok(Rank::Jack),
        "Q" => Ok(Rank::Queen),
        "K" => Ok(Rank::King),
        "A" => Ok(Rank::Ace),
        // Echo the input as typed, not the uppercased working copy.
        _ => Err(format!(
            "Invalid upcard '{}'. Expected 2-10, J, Q, K, or A",
            raw
        )),
    }
}
