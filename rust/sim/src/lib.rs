//! # vingt-sim: Monte Carlo Simulation for Blackjack Policies
//!
//! Plays large batches of rounds through the `vingt-engine` state machine
//! and aggregates the results: win rates per threshold, capital
//! trajectories under a fixed bet, ruin statistics across many walks, and
//! empirical dealer-playout win odds for the interactive advisor.
//!
//! Everything here is deterministic for a fixed seed. Batch runs that fan
//! out over rayon (the threshold sweep, the capital distribution) derive
//! one seed per unit of work from the base seed and the unit's index, so
//! scheduling order never changes a result.
//!
//! ## Core Components
//!
//! - [`monte_carlo`] - Round batches and the threshold sweep
//! - [`capital`] - Capital walks and ruin distribution
//! - [`win_probability`] - Dealer-playout win odds for a standing total
//!
//! ## Quick Start
//!
//! ```rust
//! use vingt_sim::monte_carlo::{simulate, SimConfig};
//!
//! let report = simulate(&SimConfig {
//!     rounds: 1_000,
//!     threshold: 16,
//!     seed: Some(42),
//! })?;
//!
//! assert_eq!(report.wins + report.losses + report.pushes, 1_000);
//! println!("expected return: {:+.4}", report.expected_return());
//! # Ok::<(), vingt_sim::SimError>(())
//! ```

pub mod capital;
pub mod errors;
pub mod monte_carlo;
pub mod win_probability;

pub use errors::SimError;

/// Mix a base seed and a unit index into an independent per-unit seed.
///
/// SplitMix64 finalizer over `base ^ (index * golden gamma)`. Stable
/// across releases: recorded seeds keep replaying the same runs. Used by
/// the threshold sweep (index = threshold) and the capital distribution
/// (index = walk number), so each parallel unit owns an RNG stream that
/// does not depend on scheduling.
pub fn derive_seed(base: u64, index: u64) -> u64 {
    let mut z = base ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
