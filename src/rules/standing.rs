//! Elimination and warning thresholds.

use serde::{Deserialize, Serialize};

/// Cumulative score at or above which a player is out.
pub const ELIMINATION_THRESHOLD: u32 = 201;

/// Cumulative score at or above which a player is flagged as close to
/// elimination.
pub const WARNING_THRESHOLD: u32 = 150;

/// Where a player's running total sits relative to the thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Standing {
    /// Below the warning threshold.
    Safe,
    /// In `[WARNING_THRESHOLD, ELIMINATION_THRESHOLD)`.
    Warning,
    /// At or above the elimination threshold.
    Eliminated,
}

impl Standing {
    /// Classify a running total.
    ///
    /// ```
    /// use least_count::rules::Standing;
    ///
    /// assert_eq!(Standing::for_total(149), Standing::Safe);
    /// assert_eq!(Standing::for_total(150), Standing::Warning);
    /// assert_eq!(Standing::for_total(200), Standing::Warning);
    /// assert_eq!(Standing::for_total(201), Standing::Eliminated);
    /// ```
    #[must_use]
    pub const fn for_total(total: u32) -> Self {
        if total >= ELIMINATION_THRESHOLD {
            Standing::Eliminated
        } else if total >= WARNING_THRESHOLD {
            Standing::Warning
        } else {
            Standing::Safe
        }
    }

    #[must_use]
    pub const fn is_eliminated(self) -> bool {
        matches!(self, Standing::Eliminated)
    }

    #[must_use]
    pub const fn is_warning(self) -> bool {
        matches!(self, Standing::Warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(Standing::for_total(0), Standing::Safe);
        assert_eq!(Standing::for_total(WARNING_THRESHOLD - 1), Standing::Safe);
        assert_eq!(Standing::for_total(WARNING_THRESHOLD), Standing::Warning);
        assert_eq!(Standing::for_total(ELIMINATION_THRESHOLD - 1), Standing::Warning);
        assert_eq!(Standing::for_total(ELIMINATION_THRESHOLD), Standing::Eliminated);
        assert_eq!(Standing::for_total(u32::MAX), Standing::Eliminated);
    }

    #[test]
    fn test_warning_and_eliminated_exclusive() {
        for total in 0..400 {
            let s = Standing::for_total(total);
            assert!(!(s.is_warning() && s.is_eliminated()));
        }
    }
}
