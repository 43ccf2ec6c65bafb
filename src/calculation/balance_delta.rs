//! Balance delta calculation.
//!
//! This module computes the signed per-category change between an old and a
//! new leave split, for applying to a persisted balance record elsewhere.

use crate::models::{BalanceDelta, LeaveSplit};

/// Computes the signed change in each leave category between two splits.
///
/// # Arguments
///
/// * `old` - The previously stored split; use [`LeaveSplit::ZERO`] for a
///   new request
/// * `next` - The split about to be stored
///
/// # Returns
///
/// A [`BalanceDelta`] with `next - old` per category. Positive values mean
/// the edit consumes more balance; negative values mean a refund.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::leave_delta;
/// use leave_engine::models::LeaveSplit;
///
/// let old = LeaveSplit { annual_days: 2, off_days: 3 };
/// let next = LeaveSplit { annual_days: 1, off_days: 2 };
///
/// let delta = leave_delta(&old, &next);
/// assert_eq!(delta.annual_delta, -1);
/// assert_eq!(delta.off_delta, -1);
/// ```
pub fn leave_delta(old: &LeaveSplit, next: &LeaveSplit) -> BalanceDelta {
    BalanceDelta {
        annual_delta: next.annual_days as i32 - old.annual_days as i32,
        off_delta: next.off_days as i32 - old.off_days as i32,
    }
}
