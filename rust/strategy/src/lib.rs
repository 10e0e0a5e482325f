//! # vingt-strategy: Player Policies for Blackjack Simulation
//!
//! Provides the player-side decision policies driven by the simulator and
//! the interactive table. The engine owns the rules (the hard stop at 21,
//! the dealer's draw-to-17); a policy only answers one question: given the
//! current hand, does the player want another card?
//!
//! ## Core Components
//!
//! - [`Strategy`] - Trait defining the hit/stand decision interface
//! - [`threshold`] - Fixed-threshold policy, the workhorse of every sweep
//! - [`advisor`] - Probability-based hit/stand advice for interactive play
//! - [`create_strategy`] - Factory function for creating policies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use vingt_strategy::{create_strategy, Strategy};
//!
//! // Hit while the total is 16 or less.
//! let policy = create_strategy("threshold:16");
//! assert_eq!(policy.name(), "threshold");
//!
//! assert!(policy.wants_hit(16, false));
//! assert!(!policy.wants_hit(17, false));
//! ```
//!
//! ## Policy Names
//!
//! Currently supported policy specs:
//! - `"threshold"` - Fixed threshold at the default of 16
//! - `"threshold:N"` - Fixed threshold at N (4 through 21)

pub mod advisor;
pub mod threshold;

/// Trait defining the interface for player hit/stand policies.
///
/// Implementors decide from the hand total alone: the deck is hidden and
/// the dealer's upcard is deliberately not part of the signature, because
/// every policy in this crate is a function of the player's own hand. The
/// engine enforces the stop at 21 regardless of what a policy answers, so
/// a policy that always wants a card is still safe to drive.
///
/// # Required Methods
///
/// - [`wants_hit`](Strategy::wants_hit) - Decide whether to draw another card
/// - [`name`](Strategy::name) - Return the policy's identifier
///
/// # Example Implementation
///
/// ```rust
/// use vingt_strategy::Strategy;
///
/// struct NeverBust;
///
/// impl Strategy for NeverBust {
///     fn wants_hit(&self, total: u8, _soft: bool) -> bool {
///         // A total of 11 or less cannot bust on the next card.
///         total <= 11
///     }
///
///     fn name(&self) -> &str {
///         "never-bust"
///     }
/// }
/// ```
pub trait Strategy: Send + Sync {
    /// Decide whether the player wants another card.
    ///
    /// # Arguments
    ///
    /// * `total` - Best current hand total (aces already demoted as needed)
    /// * `soft` - Whether an ace still counts 11 in that total
    fn wants_hit(&self, total: u8, soft: bool) -> bool;

    /// Return the name/identifier of this policy.
    fn name(&self) -> &str;
}

/// Factory function to create policies from a spec string.
///
/// # Arguments
///
/// * `spec` - Policy spec: a name, optionally with a `:` parameter
///
/// # Supported Specs
///
/// - `"threshold"` - Fixed threshold at the default of 16
/// - `"threshold:N"` - Fixed threshold at N (4 through 21)
///
/// # Example
///
/// ```rust
/// use vingt_strategy::create_strategy;
///
/// let policy = create_strategy("threshold:12");
/// assert!(!policy.wants_hit(13, false));
/// ```
///
/// # Panics
///
/// Panics on an unknown policy name or an out-of-range threshold. Callers
/// that accept user input validate the string first; the factory itself is
/// for configuration that is already trusted.
pub fn create_strategy(spec: &str) -> Box<dyn Strategy> {
    let (name, param) = match spec.split_once(':') {
        Some((name, param)) => (name, Some(param)),
        None => (spec, None),
    };
    match name {
        "threshold" => {
            let threshold = match param {
                Some(raw) => raw
                    .parse::<u8>()
                    .unwrap_or_else(|_| panic!("Invalid threshold parameter: {}", raw)),
                None => vingt_engine::rules::DEFAULT_THRESHOLD,
            };
            match threshold::FixedThreshold::new(threshold) {
                Ok(policy) => Box::new(policy),
                Err(e) => panic!("Invalid policy spec {:?}: {}", spec, e),
            }
        }
        _ => panic!("Unknown policy type: {}", name),
    }
}
