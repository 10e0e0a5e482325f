//! # Play Command
//!
//! Interactive blackjack rounds against the house dealer.
//!
//! This module provides the `handle_play_command` function for playing
//! rounds at the vingt table. The player sees their own hand and the
//! dealer's upcard, chooses hit or stand each turn, and watches the dealer
//! play out to the house rule once they stop. Between rounds the bet can be
//! changed; the session ends on quit, end of input, or an empty bankroll.
//!
//! ## Features
//!
//! - Interactive input validation with clear error messages
//! - On-demand advice (bust odds plus a seeded win estimate for the hand)
//! - Bet changes between rounds, with the stake clamped to remaining capital
//! - Graceful quit handling (user can exit with 'q' or 'quit', or EOF)
//! - Session summary with win/loss/push tallies and final capital

use crate::commands::resolve_config;
use crate::error::CliError;
use crate::formatters::{format_card, format_hand, format_outcome};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_table_action, ParseResult, TableAction};
use std::io::{BufRead, Write};
use vingt_engine::game::GameState;
use vingt_engine::round::Phase;
use vingt_engine::tables::bust_probability;
use vingt_sim::win_probability::{win_probability, DEFAULT_TRIALS};
use vingt_strategy::advisor::advise;

/// Handle the play command: interactive blackjack rounds.
///
/// # Arguments
///
/// * `seed` - RNG seed for the session's card stream (default: random)
/// * `capital` - Starting capital (default: from configuration)
/// * `bet` - Stake per round (default: from configuration)
/// * `out` - Output stream for table display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for player actions
///
/// # Returns
///
/// * `Ok(())` on a completed session (quit, EOF, or ruin)
/// * `Err(CliError)` for invalid stakes, engine failures, or I/O errors
///
/// # Examples
///
/// ```ignore
/// use vingt_cli::commands::handle_play_command;
/// use std::io::{stdin, stdout, stderr};
///
/// let mut out = stdout();
/// let mut err = stderr();
/// let mut input = stdin().lock();
///
/// handle_play_command(None, None, None, &mut out, &mut err, &mut input).unwrap();
/// ```
pub fn handle_play_command(
    seed: Option<u64>,
    capital: Option<i64>,
    bet: Option<i64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let config = resolve_config(err)?;
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
    let seed = seed.unwrap_or_else(rand::random);

    writeln!(out, "play: capital={} bet={} seed={}", capital, bet, seed)?;

    let mut game = GameState::new(seed, capital, bet)?;
    let mut quit_requested = false;

    while !quit_requested {
        let round_no = game.rounds_played() + 1;
        game.start_round()?;
        writeln!(out, "Round {} (bet {})", round_no, game.wager())?;
        let upcard = game
            .dealer_upcard()
            .ok_or_else(|| CliError::Engine("dealer upcard missing after deal".into()))?;
        writeln!(out, "Dealer: {} [hidden]", format_card(&upcard))?;
        writeln!(
            out,
            "Player: {} ({})",
            format_hand(game.player_hand().cards()),
            game.player_hand().value()
        )?;

        // A dealt 21 settles inside start_round and skips this loop entirely.
        while game.phase() == Phase::PlayerTurn {
            write!(out, "Enter action (h=hit, s=stand, a=advice, q=quit): ")?;
            out.flush()?;
            match read_stdin_line(stdin) {
                None => {
                    quit_requested = true;
                    break;
                }
                Some(input) => match parse_table_action(&input) {
                    ParseResult::Action(TableAction::Hit) => {
                        let total = game.hit()?;
                        writeln!(
                            out,
                            "Player: {} ({})",
                            format_hand(game.player_hand().cards()),
                            total
                        )?;
                    }
                    ParseResult::Action(TableAction::Stand) => game.stand()?,
                    ParseResult::Action(TableAction::Advice) => {
                        let total = game.player_hand().value();
                        let bust = bust_probability(total);
                        let win = win_probability(total, upcard.rank, DEFAULT_TRIALS, seed)?;
                        let verdict = advise(total, bust, win);
                        writeln!(
                            out,
                            "Bust: {:.2}%  Win: {:.2}%  Advice: {}",
                            bust, win, verdict
                        )?;
                    }
                    ParseResult::Action(TableAction::Bet(amount)) => {
                        if let Err(e) = game.set_bet(amount) {
                            ui::write_error(err, &e.to_string())?;
                        }
                    }
                    ParseResult::Action(TableAction::Deal) => {
                        ui::write_error(err, "Round already in progress")?;
                    }
                    ParseResult::Quit => {
                        quit_requested = true;
                        break;
                    }
                    ParseResult::Invalid(msg) => {
                        ui::write_error(err, &msg)?;
                    }
                },
            }
        }
        if quit_requested {
            break;
        }

        writeln!(
            out,
            "Dealer: {} ({})",
            format_hand(game.dealer_hand().cards()),
            game.dealer_hand().value()
        )?;
        let outcome = game
            .last_outcome()
            .ok_or_else(|| CliError::Engine("round ended without an outcome".into()))?;
        writeln!(
            out,
            "Result: {}  Capital: {}",
            format_outcome(outcome),
            game.capital()
        )?;

        if game.is_ruined() {
            writeln!(out, "Out of capital.")?;
            break;
        }

        // Pause between rounds: change the bet, deal the next round, or quit.
        loop {
            write!(out, "Next round (d=deal, b N=bet, q=quit): ")?;
            out.flush()?;
            match read_stdin_line(stdin) {
                None => {
                    quit_requested = true;
                    break;
                }
                Some(input) => match parse_table_action(&input) {
                    ParseResult::Action(TableAction::Deal) => break,
                    ParseResult::Action(TableAction::Bet(amount)) => match game.set_bet(amount) {
                        Ok(()) => writeln!(out, "Bet set to {}", amount)?,
                        Err(e) => ui::write_error(err, &e.to_string())?,
                    },
                    ParseResult::Action(
                        TableAction::Hit | TableAction::Stand | TableAction::Advice,
                    ) => {
                        ui::write_error(err, "No round in progress")?;
                    }
                    ParseResult::Quit => {
                        quit_requested = true;
                        break;
                    }
                    ParseResult::Invalid(msg) => {
                        ui::write_error(err, &msg)?;
                    }
                },
            }
        }
    }

    writeln!(
        out,
        "Rounds played: {}  W-L-P: {}-{}-{}  Final capital: {}",
        game.rounds_played(),
        game.wins(),
        game.losses(),
        game.pushes(),
        game.capital()
    )?;
    Ok(())
}
