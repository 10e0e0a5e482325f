use crate::errors::GameError;

/// The target total; any hand above this is bust.
pub const BLACKJACK: u8 = 21;

/// The dealer stands at this total or higher and hits strictly below it.
pub const DEALER_STAND_MIN: u8 = 17;

/// Cards in a single deck.
pub const DECK_SIZE: usize = 52;

/// Lowest accepted player hit threshold. Four is the lowest two-card total
/// a player can hold, so anything below it never changes a decision.
pub const MIN_THRESHOLD: u8 = 4;

/// Highest accepted player hit threshold.
pub const MAX_THRESHOLD: u8 = 21;

/// Threshold used when none is configured.
pub const DEFAULT_THRESHOLD: u8 = 16;

/// Validates a fixed-threshold policy parameter.
///
/// A threshold of `t` means the player keeps hitting while their total is
/// at most `t`. Values outside [`MIN_THRESHOLD`]..=[`MAX_THRESHOLD`] are
/// rejected rather than clamped so a typo never silently simulates a
/// different strategy.
///
/// # Errors
///
/// Returns [`GameError::InvalidThreshold`] when `threshold` is out of range.
///
/// # Examples
///
/// ```
/// use vingt_engine::rules::validate_threshold;
/// use vingt_engine::errors::GameError;
///
/// assert!(validate_threshold(16).is_ok());
/// assert!(matches!(
///     validate_threshold(3),
///     Err(GameError::InvalidThreshold { .. })
/// ));
/// assert!(matches!(
///     validate_threshold(22),
///     Err(GameError::InvalidThreshold { .. })
/// ));
/// ```
pub fn validate_threshold(threshold: u8) -> Result<(), GameError> {
    if threshold < MIN_THRESHOLD || threshold > MAX_THRESHOLD {
        return Err(GameError::InvalidThreshold {
            threshold,
            min: MIN_THRESHOLD,
            max: MAX_THRESHOLD,
        });
    }
    Ok(())
}
