//! # Vingt CLI Library
//!
//! This library provides the command-line interface for the vingt blackjack
//! engine. It exposes subcommands for playing, simulating, analyzing, and
//! aggregating blackjack rounds.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["vingt", "sim", "--rounds", "100", "--seed", "7"];
//! let code = vingt_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `sim`: Run Monte Carlo batches and record round histories
//! - `sweep`: Compare expected returns across a range of hit thresholds
//! - `walk`: Track a bankroll through a session, alone or in bulk
//! - `play`: Play rounds interactively against the dealer
//! - `deal`: Deal one round's opening hands for inspection
//! - `tables`: Print the single-draw bust and expectation chart
//! - `advise`: Advise hit or stand for a total against a dealer upcard
//! - `stats`: Aggregate statistics from JSONL round record files
//! - `cfg`: Display current configuration settings
//! - `rng`: Verify RNG determinism

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

// Import CLI types from cli module
use cli::{Commands, VingtCli};

// Import utility functions from extracted modules
use commands::{
    handle_advise_command, handle_cfg_command, handle_deal_command, handle_play_command,
    handle_rng_command, handle_sim_command, handle_stats_command, handle_sweep_command,
    handle_tables_command, handle_walk_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["vingt", "deal", "--seed", "42"];
/// let code = vingt_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
///
/// # Available Commands
///
/// - `sim --rounds N --threshold T --output FILE`: Simulate N rounds and save records
/// - `sweep --rounds N --from A --to B`: Rank hit thresholds by expected return
/// - `walk --rounds N --capital C --bet B [--walks K]`: Bankroll trajectories
/// - `play --capital C --bet B`: Play rounds interactively
/// - `deal --seed N`: Deal a single round with optional seed
/// - `tables --max-total T`: Print the single-draw decision chart
/// - `advise --total T --upcard R`: Hit-or-stand advice for one decision
/// - `stats --input PATH`: Display statistics from round record files
/// - `cfg`: Display configuration settings
/// - `rng --seed N`: Test RNG output
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &[
        "sim", "sweep", "walk", "play", "deal", "tables", "advise", "stats", "cfg", "rng",
    ];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = VingtCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    // Print clap error first
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "");
                    write_or_exit!(err, "Vingt Blackjack CLI");
                    write_or_exit!(err, "Usage: vingt <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: vingt --help");
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Sim {
                rounds,
                threshold,
                seed,
                output,
            } => match handle_sim_command(rounds, threshold, seed, output, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Sweep {
                rounds,
                from,
                to,
                seed,
            } => match handle_sweep_command(rounds, from, to, seed, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Walk {
                rounds,
                capital,
                bet,
                threshold,
                seed,
                walks,
            } => match handle_walk_command(rounds, capital, bet, threshold, seed, walks, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Play { seed, capital, bet } => {
                // Use stdin for real input (supports both TTY and piped stdin)
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                match handle_play_command(seed, capital, bet, out, err, &mut stdin_lock) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(e) => {
                        write_or_exit!(err, "Error: {}", e);
                        exit_code::ERROR
                    }
                }
            }
            Commands::Deal { seed } => match handle_deal_command(seed, out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Tables { max_total } => match handle_tables_command(max_total, out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Advise {
                total,
                upcard,
                trials,
                seed,
            } => match handle_advise_command(total, &upcard, trials, seed, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Stats { input } => match handle_stats_command(input, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Cfg => match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Rng { seed } => match handle_rng_command(seed, out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
        },
    }
}
