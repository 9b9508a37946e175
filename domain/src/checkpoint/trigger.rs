//! Checkpoint trigger.

/// Whether a checkpoint runs after exchange `turn_index`.
///
/// True exactly at positive multiples of `interval`, and never when
/// checkpoints are disabled or the interval is zero.
pub fn should_trigger(turn_index: u32, interval: u32, enabled: bool) -> bool {
    enabled && interval > 0 && turn_index > 0 && turn_index % interval == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_at_multiples() {
        let fired: Vec<u32> = (0..=10).filter(|t| should_trigger(*t, 3, true)).collect();
        assert_eq!(fired, vec![3, 6, 9]);
    }

    #[test]
    fn test_never_when_disabled() {
        assert!((0..=20).all(|t| !should_trigger(t, 2, false)));
    }

    #[test]
    fn test_zero_interval_never_fires() {
        assert!((0..=20).all(|t| !should_trigger(t, 0, true)));
    }

    #[test]
    fn test_turn_zero_is_not_a_checkpoint() {
        assert!(!should_trigger(0, 1, true));
        assert!(should_trigger(1, 1, true));
    }
}
