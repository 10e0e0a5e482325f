//! Analytic probability table command.
//!
//! This module provides the `tables` command which prints the closed-form
//! single-draw chart: for each hand total, the chance that one more card
//! busts the hand and the expected hand value after that draw. The chart is
//! followed by per-rank draw odds for a fresh deck, including the combined
//! ten-count group.
//!
//! Everything here is computed analytically from deck composition; no
//! simulation or RNG is involved.

use crate::error::CliError;
use crate::formatters::format_rank;
use std::io::Write;
use vingt_engine::rules::BLACKJACK;
use vingt_engine::tables::{decision_table, rank_probabilities, ten_group_probability};

/// Handle the tables command.
///
/// Prints the bust-probability and hit-expectation chart for totals from 4
/// through `max_total` (capped at 21), then the per-rank draw odds.
///
/// # Arguments
///
/// * `max_total` - Highest hand total to chart (defaults to 21)
/// * `out` - Output stream for the chart
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
pub fn handle_tables_command(max_total: Option<u8>, out: &mut dyn Write) -> Result<(), CliError> {
    let max = max_total.unwrap_or(BLACKJACK);

    writeln!(out, "Single-Draw Decision Chart")?;
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out, "Total  Bust %  Hit EV")?;
    for row in decision_table(max) {
        writeln!(
            out,
            "{:>5}  {:>6.2}  {:>6.2}",
            row.total, row.bust_probability, row.hit_expected_value
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Rank draw odds (fresh deck):")?;
    for rank in rank_probabilities() {
        writeln!(
            out,
            "  {}: {} cards ({:.2}%)",
            format_rank(&rank.rank),
            rank.count,
            rank.probability
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Ten-count group (T J Q K): {:.2}%",
        ten_group_probability()
    )?;
    Ok(())
}
