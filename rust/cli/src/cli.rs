//! Command-line argument definitions for the vingt CLI.
//!
//! This module holds the clap derive types: the top-level [`VingtCli`]
//! parser and the [`Commands`] enum with one variant per subcommand.
//! Argument parsing is kept separate from command execution; the handlers
//! in [`crate::commands`] receive plain values.
//!
//! Flags left unset fall back to the resolved configuration (see
//! [`crate::config`]) where a command documents it; otherwise handlers
//! apply their own defaults.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `vingt` binary.
#[derive(Debug, Parser)]
#[command(name = "vingt", version, about = "Blackjack simulation and analysis toolkit")]
pub struct VingtCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// All vingt subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a Monte Carlo batch of rounds with a fixed hit threshold
    Sim {
        /// Number of rounds to simulate (default from config)
        #[arg(long)]
        rounds: Option<u64>,
        /// Hit while the hand total is at or below this value
        #[arg(long, value_parser = clap::value_parser!(u8).range(4..=21))]
        threshold: Option<u8>,
        /// Base RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Append round records to this file (JSONL)
        #[arg(long)]
        output: Option<String>,
    },
    /// Compare expected returns across a range of hit thresholds
    Sweep {
        /// Rounds per threshold (default from config)
        #[arg(long)]
        rounds: Option<u64>,
        /// Lowest threshold to try
        #[arg(long, value_parser = clap::value_parser!(u8).range(4..=21))]
        from: Option<u8>,
        /// Highest threshold to try
        #[arg(long, value_parser = clap::value_parser!(u8).range(4..=21))]
        to: Option<u8>,
        /// Base RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Track a bankroll over a session of rounds
    Walk {
        /// Upper bound on rounds per walk (default from config)
        #[arg(long)]
        rounds: Option<u64>,
        /// Starting capital (default from config)
        #[arg(long)]
        capital: Option<i64>,
        /// Stake per round, clamped to the remaining capital (default from config)
        #[arg(long)]
        bet: Option<i64>,
        /// Hit while the hand total is at or below this value
        #[arg(long, value_parser = clap::value_parser!(u8).range(4..=21))]
        threshold: Option<u8>,
        /// Base RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Number of independent walks; more than one reports a ruin distribution
        #[arg(long)]
        walks: Option<u64>,
    },
    /// Play rounds interactively against the dealer
    Play {
        /// RNG seed for the session (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Starting capital (default from config)
        #[arg(long)]
        capital: Option<i64>,
        /// Stake per round (default from config)
        #[arg(long)]
        bet: Option<i64>,
    },
    /// Deal one round's opening hands for inspection
    Deal {
        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the single-draw bust and expectation chart
    Tables {
        /// Highest hand total to chart
        #[arg(long, value_parser = clap::value_parser!(u8).range(4..=21))]
        max_total: Option<u8>,
    },
    /// Advise hit or stand for a hand total against a dealer upcard
    Advise {
        /// Player hand total
        #[arg(long, value_parser = clap::value_parser!(u8).range(4..=21))]
        total: u8,
        /// Dealer upcard rank (2-10, J, Q, K, A)
        #[arg(long)]
        upcard: String,
        /// Playouts behind the win probability estimate
        #[arg(long)]
        trials: Option<u64>,
        /// RNG seed for the playouts (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Aggregate statistics from round record files
    Stats {
        /// JSONL file, directory tree, or .jsonl.zst archive
        #[arg(long)]
        input: String,
    },
    /// Display current configuration settings
    Cfg,
    /// Verify RNG determinism by sampling values
    Rng {
        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}
