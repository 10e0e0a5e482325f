//! Simulation command handler for Monte Carlo round batches.
//!
//! This module provides the `sim` command which plays a batch of rounds
//! with a fixed-threshold policy against one shared auto-reshuffling deck
//! and reports outcome tallies, percent rates, and the expected return.
//! Round records can be appended to a JSONL file for later aggregation by
//! the `stats` command.
//!
//! # Environment Variables
//!
//! - `VINGT_SIM_BREAK_AFTER`: Break after N rounds (for testing)
//!
//! # Examples
//!
//! ```no_run
//! use vingt_cli::commands::sim::handle_sim_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//!
//! // Run 1000 rounds with seed 42
//! handle_sim_command(Some(1000), Some(16), Some(42), None, &mut out, &mut err).unwrap();
//! ```

use crate::commands::resolve_config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;
use std::io::Write;
use vingt_engine::deck::Deck;
use vingt_engine::logger::{format_round_id, RoundRecord};
use vingt_engine::round::Outcome;
use vingt_sim::monte_carlo::{play_round, SimReport};
use vingt_strategy::threshold::FixedThreshold;

/// Handle the sim command: run a Monte Carlo round batch.
///
/// Plays `rounds` rounds over one shared deck and prints a tally summary.
/// Defaults for the round count and threshold come from the resolved
/// configuration; the seed is drawn at random when not given and echoed in
/// the output either way.
///
/// # Arguments
///
/// * `rounds` - Number of rounds (defaults to the configured round count)
/// * `threshold` - Hit threshold (defaults to the configured threshold)
/// * `seed` - Deck seed (random if omitted)
/// * `output` - Path to append round records to (JSONL format)
/// * `out` - Output stream for normal messages
/// * `err` - Output stream for error messages
///
/// # Returns
///
/// `Ok(())` on success, or `CliError` on failure
///
/// # Environment Variables
///
/// - `VINGT_SIM_BREAK_AFTER`: Break after N rounds (for testing)
pub fn handle_sim_command(
    rounds: Option<u64>,
    threshold: Option<u8>,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_config(err)?;
    let total = rounds.unwrap_or(config.rounds);
    if total == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let threshold = threshold.unwrap_or(config.threshold);
    let policy = FixedThreshold::new(threshold)?;
    let base_seed = seed.unwrap_or_else(rand::random);

    let break_after = std::env::var("VINGT_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u64>().ok());

    let mut writer = match output.as_deref() {
        Some(outp) => {
            let path = std::path::Path::new(outp);
            if let Err(e) = ensure_parent_dir(path) {
                ui::write_error(err, &e)?;
                return Err(CliError::Io(std::io::Error::other(e)));
            }
            if std::fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false) {
                ui::display_warning(err, &format!("Appending to existing file {}", outp))?;
            }
            match std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
            {
                Ok(file) => Some(std::io::BufWriter::new(file)),
                Err(e) => {
                    ui::write_error(err, &format!("Failed to open {}: {}", outp, e))?;
                    return Err(CliError::Io(e));
                }
            }
        }
        None => None,
    };

    writeln!(
        out,
        "sim: rounds={} threshold={} seed={}",
        total, threshold, base_seed
    )?;

    let date = chrono::Utc::now().format("%Y%m%d").to_string();
    let mut deck = Deck::new_with_seed(base_seed);
    let mut wins = 0u64;
    let mut losses = 0u64;
    let mut pushes = 0u64;
    let mut completed = 0u64;

    for i in 0..total {
        let summary = play_round(&mut deck, &policy)?;
        match summary.outcome {
            Outcome::Win => wins += 1,
            Outcome::Loss => losses += 1,
            Outcome::Push => pushes += 1,
        }

        if let Some(w) = writer.as_mut() {
            let record = RoundRecord {
                round_id: format_round_id(&date, (i + 1) as u32),
                seed: Some(base_seed),
                threshold,
                player: summary.player_cards,
                dealer: summary.dealer_cards,
                player_total: summary.player_total,
                dealer_total: summary.dealer_total,
                outcome: Some(summary.outcome),
                net_units: Some(i64::from(summary.outcome.net_units())),
                ts: Some(chrono::Utc::now().to_rfc3339()),
                meta: None,
            };
            let json_str = match serde_json::to_string(&record) {
                Ok(s) => s,
                Err(e) => {
                    ui::write_error(err, &format!("Failed to serialize round: {}", e))?;
                    return Err(CliError::InvalidInput(format!(
                        "Failed to serialize round: {}",
                        e
                    )));
                }
            };
            if let Err(e) = writeln!(w, "{}", json_str) {
                ui::write_error(err, "Failed to write round to file")?;
                return Err(CliError::Io(e));
            }
        }

        completed += 1;

        if let Some(b) = break_after
            && completed == b
        {
            if let Some(w) = writer.as_mut()
                && let Err(e) = w.flush()
            {
                ui::write_error(err, "Failed to flush simulation output")?;
                return Err(CliError::Io(e));
            }
            writeln!(out, "Interrupted: saved {}/{}", completed, total)?;
            return Err(CliError::Interrupted(format!(
                "Interrupted: saved {}/{}",
                completed, total
            )));
        }
    }

    if let Some(mut w) = writer.take()
        && let Err(e) = w.flush()
    {
        ui::write_error(err, "Failed to flush simulation output")?;
        return Err(CliError::Io(e));
    }

    let report = SimReport {
        rounds: total,
        wins,
        losses,
        pushes,
        seed: base_seed,
    };
    writeln!(out, "Wins: {} ({:.2}%)", report.wins, report.win_rate() * 100.0)?;
    writeln!(
        out,
        "Losses: {} ({:.2}%)",
        report.losses,
        report.loss_rate() * 100.0
    )?;
    writeln!(
        out,
        "Pushes: {} ({:.2}%)",
        report.pushes,
        report.push_rate() * 100.0
    )?;
    writeln!(out, "Expected return: {:+.4}", report.expected_return())?;
    writeln!(out, "Simulated: {} rounds", completed)?;
    Ok(())
}
