//! Command handler modules for the vingt CLI.
//!
//! Each subcommand is implemented in its own module file with a consistent
//! pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum
//!
//! Handlers never call `std::process::exit`; they return errors and let
//! [`crate::run`] map them to exit codes.

pub mod advise;
pub mod cfg;
pub mod deal;
pub mod play;
pub mod rng;
pub mod sim;
pub mod stats;
pub mod sweep;
pub mod tables;
pub mod walk;

pub use advise::handle_advise_command;
pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;
pub use sweep::handle_sweep_command;
pub use tables::handle_tables_command;
pub use walk::handle_walk_command;

use std::io::Write;

use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;

/// Loads the resolved configuration for a handler, reporting failures on `err`.
///
/// Commands that take defaults from the config file or environment call this
/// before touching their arguments, so a broken config fails the command
/// instead of being silently replaced by built-in defaults.
pub(crate) fn resolve_config(err: &mut dyn Write) -> Result<Config, CliError> {
    match config::load() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            let msg = e.to_string();
            ui::write_error(err, &msg)?;
            Err(CliError::Config(msg))
        }
    }
}
