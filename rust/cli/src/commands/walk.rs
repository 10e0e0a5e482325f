//! Capital walk command handler.
//!
//! This module provides the `walk` command which tracks a bankroll through
//! a session of rounds. One walk prints the trajectory summary; `--walks K`
//! with K > 1 runs K independent walks in parallel and reports the ruin
//! distribution instead. The stake is clamped to the remaining capital, so
//! a bankroll can reach zero but never go negative.

use crate::commands::resolve_config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;
use vingt_sim::capital::{
    capital_distribution, simulate_capital, DistributionConfig, WalkConfig,
};

/// Handle the walk command.
///
/// Builds a [`WalkConfig`] from arguments and configuration defaults, then
/// either runs a single walk or a distribution of `walks` walks.
///
/// # Arguments
///
/// * `rounds` - Upper bound on rounds per walk (defaults to the configured round count)
/// * `capital` - Starting capital (defaults to the configured capital)
/// * `bet` - Stake per round (defaults to the configured bet)
/// * `threshold` - Hit threshold (defaults to the configured threshold)
/// * `seed` - Base seed; multi-walk runs derive one seed per walk (random if omitted)
/// * `walks` - Number of independent walks (defaults to 1)
/// * `out` - Output stream for the report
/// * `err` - Output stream for error messages
///
/// # Returns
///
/// `Ok(())` on success, or `CliError` on failure
pub fn handle_walk_command(
    rounds: Option<u64>,
    capital: Option<i64>,
    bet: Option<i64>,
    threshold: Option<u8>,
    seed: Option<u64>,
    walks: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_config(err)?;
    let total = rounds.unwrap_or(config.rounds);
    if total == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let capital = capital.unwrap_or(config.starting_capital);
    if capital < 1 {
        ui::write_error(err, "capital must be >= 1")?;
        return Err(CliError::InvalidInput("capital must be >= 1".to_string()));
    }
    let bet = bet.unwrap_or(config.bet);
    if bet < 1 {
        ui::write_error(err, "bet must be >= 1")?;
        return Err(CliError::InvalidInput("bet must be >= 1".to_string()));
    }
    let walks = walks.unwrap_or(1);
    if walks == 0 {
        ui::write_error(err, "walks must be >= 1")?;
        return Err(CliError::InvalidInput("walks must be >= 1".to_string()));
    }
    let threshold = threshold.unwrap_or(config.threshold);
    let base_seed = seed.unwrap_or_else(rand::random);

    let walk = WalkConfig {
        initial_capital: capital,
        bet,
        rounds: total,
        threshold,
        seed: Some(base_seed),
    };

    if walks == 1 {
        let report = simulate_capital(&walk)?;
        writeln!(
            out,
            "walk: rounds={} threshold={} capital={} bet={} seed={}",
            total, threshold, capital, bet, base_seed
        )?;
        writeln!(out, "Starting capital: {}", capital)?;
        writeln!(out, "Final capital: {}", report.final_capital)?;
        writeln!(out, "Rounds survived: {}", report.rounds_played)?;
        writeln!(out, "Ruined: {}", if report.ruined { "yes" } else { "no" })?;
        return Ok(());
    }

    let report = capital_distribution(&DistributionConfig { walks, walk })?;
    writeln!(
        out,
        "walk: rounds={} threshold={} capital={} bet={} seed={} walks={}",
        total, threshold, capital, bet, base_seed, walks
    )?;
    writeln!(
        out,
        "Ruined: {}/{} ({:.1}%)",
        report.ruined,
        report.walks,
        report.ruin_rate * 100.0
    )?;
    match report.mean_rounds_to_ruin() {
        Some(mean) => writeln!(out, "Mean rounds to ruin: {:.1}", mean)?,
        None => writeln!(out, "Mean rounds to ruin: n/a")?,
    }
    writeln!(out, "Mean final capital: {:.2}", report.mean_final_capital)?;
    writeln!(
        out,
        "Final capital range: {}..={}",
        report.min_final_capital, report.max_final_capital
    )?;
    Ok(())
}
