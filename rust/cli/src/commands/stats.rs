//! Statistics aggregation command for round record analysis.
//!
//! This module provides functionality to aggregate statistics from JSONL
//! round record files. It computes summary metrics including total rounds,
//! outcome tallies, and net settlement units, and validates that each
//! record's outcome agrees with its recorded settlement.

use crate::error::CliError;
use crate::io_utils::read_text_auto;
use crate::ui;
use std::io::Write;
use std::path::Path;
use vingt_engine::logger::RoundRecord;
use vingt_engine::round::Outcome;

/// Aggregates statistics from JSONL round record files.
///
/// Reads round record files (JSONL or .jsonl.zst) and computes summary
/// statistics including total rounds and the win/loss/push distribution.
///
/// # Arguments
///
/// * `input` - Path to a JSONL file or directory containing round records
/// * `out` - Output stream for statistics report
/// * `err` - Output stream for error messages and warnings
///
/// # Returns
///
/// `Result<(), CliError>`: `Ok(())` when statistics are valid, otherwise an
/// `Err` that maps to exit code `2`.
///
/// # Validation
///
/// - Detects corrupted or incomplete records
/// - Verifies settlement coherence (a win must record positive net units,
///   a loss negative, a push zero)
/// - Reports warnings for skipped records
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    run_stats(&input, out, err)
}

/// Internal statistics aggregation implementation
fn run_stats(input: &str, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    struct StatsState {
        rounds: u64,
        wins: u64,
        losses: u64,
        pushes: u64,
        net_units: i64,
        skipped: u64,
        corrupted: u64,
        stats_ok: bool,
    }

    fn consume_stats_content(
        content: String,
        state: &mut StatsState,
        err: &mut dyn Write,
    ) -> Result<(), CliError> {
        let has_trailing_nl = content.ends_with('\n');
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        for (i, line) in lines.iter().enumerate() {
            let rec: RoundRecord = match serde_json::from_str(line) {
                Ok(v) => v,
                Err(_) => {
                    // A truncated final line means an interrupted writer,
                    // not a corrupt history.
                    if i == lines.len() - 1 && !has_trailing_nl {
                        state.skipped += 1;
                    } else {
                        state.corrupted += 1;
                    }
                    continue;
                }
            };

            if let (Some(outcome), Some(net)) = (rec.outcome, rec.net_units) {
                let coherent = match outcome {
                    Outcome::Win => net > 0,
                    Outcome::Loss => net < 0,
                    Outcome::Push => net == 0,
                };
                if !coherent {
                    state.stats_ok = false;
                    ui::write_error(
                        err,
                        &format!("Settlement mismatch at round {}", rec.round_id),
                    )?;
                }
            }

            state.rounds += 1;
            match rec.outcome {
                Some(Outcome::Win) => state.wins += 1,
                Some(Outcome::Loss) => state.losses += 1,
                Some(Outcome::Push) => state.pushes += 1,
                None => {}
            }
            state.net_units += rec.net_units.unwrap_or(0);
        }
        Ok(())
    }

    let path = Path::new(input);
    let mut state = StatsState {
        rounds: 0,
        wins: 0,
        losses: 0,
        pushes: 0,
        net_units: 0,
        skipped: 0,
        corrupted: 0,
        stats_ok: true,
    };

    if path.is_dir() {
        let mut stack = vec![path.to_path_buf()];
        while let Some(d) = stack.pop() {
            let rd = match std::fs::read_dir(&d) {
                Ok(v) => v,
                Err(_) => continue,
            };
            for e in rd.filter_map(Result::ok) {
                let p = e.path();
                if p.is_dir() {
                    stack.push(p);
                } else if let Some(fname) = p.file_name().and_then(|f| f.to_str())
                    && (fname.ends_with(".jsonl") || fname.ends_with(".jsonl.zst"))
                {
                    match read_text_auto(&p.to_string_lossy()) {
                        Ok(content) => {
                            consume_stats_content(content, &mut state, err)?;
                        }
                        Err(_) => {
                            state.corrupted += 1;
                        }
                    }
                }
            }
        }
    } else {
        match read_text_auto(input) {
            Ok(s) => consume_stats_content(s, &mut state, err)?,
            Err(e) => {
                ui::write_error(err, &format!("Failed to read {}: {}", input, e))?;
                return Err(CliError::Config(format!("Failed to read {}: {}", input, e)));
            }
        }
    }

    if state.corrupted > 0 {
        ui::write_error(
            err,
            &format!("Skipped {} corrupted record(s)", state.corrupted),
        )?;
    }
    if state.skipped > 0 {
        ui::write_error(
            err,
            &format!("Discarded {} incomplete final line(s)", state.skipped),
        )?;
    }
    if !path.is_dir() && state.rounds == 0 && (state.corrupted > 0 || state.skipped > 0) {
        ui::write_error(err, "Invalid record")?;
        return Err(CliError::InvalidInput("Invalid record".to_string()));
    }

    let summary = serde_json::json!({
        "rounds": state.rounds,
        "outcomes": { "win": state.wins, "loss": state.losses, "push": state.pushes },
        "net_units": state.net_units,
    });
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;
    if state.stats_ok {
        Ok(())
    } else {
        Err(CliError::InvalidInput(
            "Statistics validation failed".to_string(),
        ))
    }
}
