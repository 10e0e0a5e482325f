//! Deal command handler for single round dealing and display.
//!
//! This module provides the `deal` command which deals one round's opening
//! hands and displays the player's cards with their total alongside the
//! dealer's upcard. The dealer's hole card stays hidden, matching what a
//! player would see at the table. The command supports optional seeding for
//! deterministic dealing.

use crate::error::CliError;
use crate::formatters::{format_card, format_hand};
use std::io::Write;
use vingt_engine::game::GameState;

/// Handle the deal command.
///
/// Deals one round's opening hands in table order (player, player, dealer,
/// dealer) and prints the player's hand with its total plus the dealer's
/// upcard. Supports optional seeding for deterministic dealing and
/// reproducibility.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
///
/// # Examples
///
/// ```ignore
/// // Internal command handler - not part of public API
/// use vingt_cli::commands::deal::handle_deal_command;
/// let mut out = Vec::new();
/// handle_deal_command(Some(42), &mut out).unwrap();
/// ```
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    // Stakes are irrelevant for a bare deal; any valid pair works.
    let mut game = GameState::new(base_seed, 100, 1)?;
    game.start_round()?;

    let player = game.player_hand();
    let upcard = game
        .dealer_upcard()
        .ok_or_else(|| CliError::Engine("dealer upcard missing after deal".into()))?;

    writeln!(
        out,
        "Player: {} ({})",
        format_hand(player.cards()),
        player.value()
    )?;
    writeln!(out, "Dealer: {} [hidden]", format_card(&upcard))?;
    Ok(())
}
