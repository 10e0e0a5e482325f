//! Random number generator verification command.
//!
//! The `rng` command verifies the properties of the ChaCha20 random number
//! generator used by the blackjack engine. It prints a sample of raw values
//! and the first cards of a deck shuffled with the same seed, so determinism
//! can be checked at both layers.
//!
//! ## Purpose
//!
//! This command is primarily used for:
//! - Verifying RNG determinism (same seed produces same sequence)
//! - Debugging random number generation issues
//! - Confirming that deck shuffles derive from the seed alone

use crate::error::CliError;
use crate::formatters::format_hand;
use rand::{RngCore, SeedableRng};
use std::io::Write;
use vingt_engine::deck::Deck;

/// Handle the rng command - verify random number generator properties.
///
/// Generates and displays a sample of random numbers using the ChaCha20 RNG
/// with the specified seed (or a random seed if not provided), then deals the
/// top five cards of a deck shuffled from that same seed.
///
/// # Arguments
///
/// * `seed` - Optional seed value for the RNG (uses random seed if None)
/// * `out` - Output stream for RNG sample values
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(CliError)` on write failure
///
/// # Example
///
/// ```ignore
/// # use vingt_cli::commands::handle_rng_command;
/// # use std::io;
/// let mut out = io::stdout();
/// handle_rng_command(Some(12345), &mut out).expect("RNG command failed");
/// ```
pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(s);
    let mut vals = vec![];
    for _ in 0..5 {
        vals.push(rng.next_u64());
    }
    writeln!(out, "RNG sample: {:?}", vals)?;

    let mut deck = Deck::new_with_seed(s);
    let mut cards = Vec::with_capacity(5);
    for _ in 0..5 {
        cards.push(deck.deal_card());
    }
    writeln!(out, "Deck sample: {}", format_hand(&cards))?;
    Ok(())
}
