//! Hit/stand advice command.
//!
//! This module provides the `advise` command which combines the analytic
//! bust odds for a hand total with an empirical win estimate against a
//! dealer upcard and prints a one-word recommendation. The win estimate
//! comes from seeded dealer playouts, so the same seed and trial count
//! always reproduce the same advice.

use crate::error::CliError;
use crate::formatters::format_rank;
use crate::ui;
use crate::validation;
use std::io::Write;
use vingt_engine::tables::bust_probability;
use vingt_sim::win_probability::{win_probability, DEFAULT_TRIALS};
use vingt_strategy::advisor::advise;

/// Handle the advise command.
///
/// Computes the bust probability for `total`, estimates the win probability
/// of standing against `upcard` via seeded dealer playouts, and prints the
/// resulting recommendation.
///
/// # Arguments
///
/// * `total` - Player hand total (clap enforces 4..=21)
/// * `upcard` - Dealer upcard rank as entered on the command line
/// * `trials` - Playouts behind the win estimate (defaults to 1000)
/// * `seed` - RNG seed for the playouts (random if omitted)
/// * `out` - Output stream for the recommendation
/// * `err` - Error stream for validation messages
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(CliError::InvalidInput)` for an unparseable upcard or zero trials
pub fn handle_advise_command(
    total: u8,
    upcard: &str,
    trials: Option<u64>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let rank = match validation::parse_rank(upcard) {
        Ok(r) => r,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };
    let trials = trials.unwrap_or(DEFAULT_TRIALS);
    if trials == 0 {
        ui::write_error(err, "trials must be >= 1")?;
        return Err(CliError::InvalidInput("trials must be >= 1".into()));
    }
    let seed = seed.unwrap_or_else(rand::random);

    let bust = bust_probability(total);
    let win = win_probability(total, rank, trials, seed)?;
    let advice = advise(total, bust, win);

    writeln!(out, "Total {} vs dealer {}", total, format_rank(&rank))?;
    writeln!(out, "Bust probability: {:.2}%", bust)?;
    writeln!(
        out,
        "Win probability: {:.2}%  ({} trials, seed {})",
        win, trials, seed
    )?;
    writeln!(out, "Advice: {}", advice)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_advise(total: u8, upcard: &str, trials: Option<u64>, seed: Option<u64>) -> String {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_advise_command(total, upcard, trials, seed, &mut out, &mut err).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_advise_command_output_shape() {
        let output = run_advise(16, "7", Some(200), Some(42));

        assert!(output.contains("Total 16 vs dealer 7"));
        assert!(output.contains("Bust probability:"));
        assert!(output.contains("Win probability:"));
        assert!(output.contains("Advice:"));
    }

    #[test]
    fn test_advise_twenty_one_always_stands() {
        // Standing on 21 scores at least a push in every playout, so the
        // win estimate stays above the stand cutoff for any seed.
        let output = run_advise(21, "A", Some(50), Some(7));
        assert!(output.contains("Advice: Stand"));
    }

    #[test]
    fn test_advise_low_total_always_hits() {
        // A 4 cannot bust on one card; the bust rule alone decides.
        let output = run_advise(4, "K", Some(50), Some(7));
        assert!(output.contains("Bust probability: 0.00%"));
        assert!(output.contains("Advice: Hit"));
    }

    #[test]
    fn test_advise_deterministic_for_seed() {
        let a = run_advise(15, "9", Some(300), Some(99));
        let b = run_advise(15, "9", Some(300), Some(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_advise_ten_aliases_agree() {
        // "T" and "10" name the same rank, so seeded runs must match.
        let t = run_advise(14, "T", Some(120), Some(5));
        let ten = run_advise(14, "10", Some(120), Some(5));
        assert_eq!(t, ten);
    }

    #[test]
    fn test_advise_rejects_bad_upcard() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_advise_command(16, "Z", None, Some(1), &mut out, &mut err);

        assert!(result.is_err());
        let error_output = String::from_utf8(err).unwrap();
        assert!(error_output.contains("Invalid upcard 'Z'"));
    }

    #[test]
    fn test_advise_rejects_zero_trials() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_advise_command(16, "7", Some(0), Some(1), &mut out, &mut err);

        assert!(result.is_err());
        let error_output = String::from_utf8(err).unwrap();
        assert!(error_output.contains("trials must be >= 1"));
    }
}
