//! Threshold sweep command handler.
//!
//! This module provides the `sweep` command which runs one independent
//! Monte Carlo batch per hit threshold across a range and reports the
//! per-threshold rates side by side, ending with the threshold whose
//! expected return came out on top. Ties resolve to the lowest threshold,
//! so repeated runs with the same seed always name the same winner.

use crate::commands::resolve_config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;
use vingt_sim::monte_carlo::{sweep, SweepConfig, DEFAULT_SWEEP_RANGE};

/// Handle the sweep command.
///
/// Runs `rounds` rounds per threshold over `from..=to` (defaulting to the
/// comparison range 11..=20) and prints one tally line per threshold plus
/// the best performer.
///
/// # Arguments
///
/// * `rounds` - Rounds per threshold (defaults to the configured round count)
/// * `from` - Lowest threshold (defaults to 11)
/// * `to` - Highest threshold (defaults to 20)
/// * `seed` - Base seed; per-threshold decks derive from it (random if omitted)
/// * `out` - Output stream for the sweep table
/// * `err` - Output stream for error messages
///
/// # Returns
///
/// `Ok(())` on success, or `CliError` on failure. An inverted range
/// surfaces the simulator's empty-range error.
pub fn handle_sweep_command(
    rounds: Option<u64>,
    from: Option<u8>,
    to: Option<u8>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_config(err)?;
    let total = rounds.unwrap_or(config.rounds);
    if total == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let from = from.unwrap_or(*DEFAULT_SWEEP_RANGE.start());
    let to = to.unwrap_or(*DEFAULT_SWEEP_RANGE.end());
    let base_seed = seed.unwrap_or_else(rand::random);

    let report = sweep(&SweepConfig {
        rounds: total,
        thresholds: from..=to,
        seed: Some(base_seed),
    })?;

    writeln!(
        out,
        "sweep: rounds={} thresholds={}..={} seed={}",
        total, from, to, base_seed
    )?;
    writeln!(out, "Threshold   Win %  Loss %  Push %   Return")?;
    for entry in &report.entries {
        let r = &entry.report;
        writeln!(
            out,
            "{:>9}  {:>6.2}  {:>6.2}  {:>6.2}  {:+.4}",
            entry.threshold,
            r.win_rate() * 100.0,
            r.loss_rate() * 100.0,
            r.push_rate() * 100.0,
            r.expected_return()
        )?;
    }

    let best = report
        .entries
        .iter()
        .find(|e| e.threshold == report.best)
        .ok_or_else(|| CliError::Engine("best threshold missing from entries".into()))?;
    writeln!(
        out,
        "Best threshold: {} (return {:+.4})",
        best.threshold,
        best.report.expected_return()
    )?;
    Ok(())
}
