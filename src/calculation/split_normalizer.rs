//! Split normalization logic.
//!
//! This module coerces a proposed annual/off day split to non-negative
//! integers and caps its sum at the workday requirement of the associated
//! range. Off days are the more flexible allocation and are reduced first
//! when the proposal exceeds the requirement.

use serde::{Deserialize, Serialize};

use crate::models::LeaveSplit;

/// A proposed split after coercion and capping.
///
/// Invariant: `total == annual_days + off_days` and
/// `total <= required_days` for the `required_days` the split was
/// normalized against.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{NormalizedSplit, normalize_split};
///
/// let normalized = normalize_split(5, 2.0, 4.0);
/// assert_eq!(
///     normalized,
///     NormalizedSplit {
///         annual_days: 2,
///         off_days: 3,
///         total: 5,
///     },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSplit {
    /// Coerced days drawn from the annual-leave balance.
    pub annual_days: u32,
    /// Coerced days drawn from the off-day balance.
    pub off_days: u32,
    /// The capped sum of both categories.
    pub total: u32,
}

impl NormalizedSplit {
    /// The normalized values as a plain [`LeaveSplit`].
    pub fn split(&self) -> LeaveSplit {
        LeaveSplit {
            annual_days: self.annual_days,
            off_days: self.off_days,
        }
    }
}

/// Coerces a raw day count to a non-negative integer.
///
/// Non-finite values clamp to 0; finite values round to the nearest integer
/// and clamp below at 0.
fn coerce_day_count(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    let rounded = value.round();
    if rounded <= 0.0 { 0 } else { rounded as u32 }
}

/// Normalizes a proposed split against the range's workday requirement.
///
/// # Arguments
///
/// * `required_days` - The workdays the requested range contains
/// * `annual_days` - Proposed annual days, as received from the client
/// * `off_days` - Proposed off days, as received from the client
///
/// # Returns
///
/// A [`NormalizedSplit`] whose `total` never exceeds `required_days`.
/// Proposals already within bound pass through unchanged.
///
/// # Behavior
///
/// When the coerced sum exceeds `required_days`, `off_days` is reduced
/// first (down to 0), then `annual_days`, until the sum fits. Callers that
/// want annual days reduced first must pre-adjust the proposal before
/// calling.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::normalize_split;
///
/// // Within bound: pass through
/// let n = normalize_split(5, 2.0, 2.0);
/// assert_eq!((n.annual_days, n.off_days, n.total), (2, 2, 4));
///
/// // Over bound: off days absorb the overflow
/// let n = normalize_split(5, 2.0, 4.0);
/// assert_eq!((n.annual_days, n.off_days, n.total), (2, 3, 5));
///
/// // Off days exhausted: annual days absorb the rest
/// let n = normalize_split(3, 5.0, 2.0);
/// assert_eq!((n.annual_days, n.off_days, n.total), (3, 0, 3));
///
/// // Raw client numbers are rounded and clamped
/// let n = normalize_split(5, 2.4, -1.0);
/// assert_eq!((n.annual_days, n.off_days, n.total), (2, 0, 2));
/// ```
pub fn normalize_split(required_days: u32, annual_days: f64, off_days: f64) -> NormalizedSplit {
    // Widen so extreme client values cannot overflow the sum
    let mut annual = u64::from(coerce_day_count(annual_days));
    let mut off = u64::from(coerce_day_count(off_days));

    let mut overflow = (annual + off).saturating_sub(u64::from(required_days));
    if overflow > 0 {
        let reduced = overflow.min(off);
        off -= reduced;
        overflow -= reduced;
    }
    if overflow > 0 {
        annual -= overflow.min(annual);
    }

    NormalizedSplit {
        annual_days: annual as u32,
        off_days: off as u32,
        total: (annual + off) as u32,
    }
}
