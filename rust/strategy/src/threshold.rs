//! Fixed-threshold policy implementation.
//!
//! The policy every sweep is built from: hit while the hand total is at or
//! below a fixed threshold, stand above it. Simple enough to reason about
//! analytically, rich enough that the win rate over the threshold range
//! has a real maximum to find.

use vingt_engine::errors::GameError;
use vingt_engine::rules::{validate_threshold, DEFAULT_THRESHOLD};

use crate::Strategy;

/// Hit while the hand total is at or below a fixed threshold.
///
/// The decision ignores softness on purpose: the policy mirrors the
/// simplest playable rule, and keeping it a pure function of the total is
/// what makes the threshold sweep a one-dimensional search.
///
/// # Strategy
///
/// - `total <= threshold`: hit
/// - `total > threshold`: stand
///
/// A threshold of 21 turns the policy into "hit until the engine stops
/// you"; the engine's hard stop at 21 keeps even that safe. Thresholds
/// below 4 are rejected because no two-card hand totals less than 4.
///
/// # Example
///
/// ```rust
/// use vingt_strategy::threshold::FixedThreshold;
/// use vingt_strategy::Strategy;
///
/// let policy = FixedThreshold::new(16)?;
/// assert!(policy.wants_hit(16, false));
/// assert!(!policy.wants_hit(17, true));
/// # Ok::<(), vingt_engine::errors::GameError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedThreshold {
    threshold: u8,
}

impl FixedThreshold {
    /// Create a policy with the given threshold.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidThreshold`] when the threshold is
    /// outside 4 through 21.
    pub fn new(threshold: u8) -> Result<Self, GameError> {
        validate_threshold(threshold)?;
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }
}

impl Default for FixedThreshold {
    /// The conventional default threshold of 16: one below the dealer's
    /// stand rule.
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Strategy for FixedThreshold {
    fn wants_hit(&self, total: u8, _soft: bool) -> bool {
        total <= self.threshold
    }

    fn name(&self) -> &str {
        "threshold"
    }
}
