use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::constants::{MAX_NEGATIVE_ADJUSTMENT, MAX_POSITIVE_ADJUSTMENT};

/// Per-category confidence adjustment clamped to [-50, +20].
///
/// Negative values lower the classifier's confidence in a category for a
/// tenant; the positive range is reserved for future confidence boosts.
///
/// Serializes as a bare integer. Decoding goes through `From<i32>`, so
/// out-of-range values in stored documents are clamped on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct Adjustment(i32);

impl Adjustment {
    /// The most negative adjustment a category can carry.
    pub const FLOOR: Adjustment = Adjustment(MAX_NEGATIVE_ADJUSTMENT);
    /// The most positive adjustment a category can carry.
    pub const CEILING: Adjustment = Adjustment(MAX_POSITIVE_ADJUSTMENT);
    /// The neutral adjustment.
    pub const ZERO: Adjustment = Adjustment(0);

    /// Create a new Adjustment, clamping to [-50, +20].
    pub fn new(value: i32) -> Self {
        Self(value.clamp(MAX_NEGATIVE_ADJUSTMENT, MAX_POSITIVE_ADJUSTMENT))
    }

    /// Derive the adjustment for a pattern from its correction count:
    /// `count * BASE_ADJUSTMENT_PER_CORRECTION`, floored at -50. The
    /// marginal penalty diminishes to zero once the floor is hit.
    pub fn from_correction_count(count: u64) -> Self {
        let raw = i64::from(crate::constants::BASE_ADJUSTMENT_PER_CORRECTION)
            .saturating_mul(count as i64);
        Self::new(raw.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }

    /// Get the raw i32 value.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Sum a sequence of adjustments, clamping the result.
    pub fn sum<I: IntoIterator<Item = Adjustment>>(iter: I) -> Self {
        let total: i64 = iter.into_iter().map(|a| i64::from(a.0)).sum();
        Self::new(total.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }
}

impl Default for Adjustment {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

impl From<i32> for Adjustment {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<Adjustment> for i32 {
    fn from(a: Adjustment) -> Self {
        a.0
    }
}

impl Add for Adjustment {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0.saturating_add(rhs.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_below_floor() {
        assert_eq!(Adjustment::new(-120).value(), -50);
    }

    #[test]
    fn clamps_above_ceiling() {
        assert_eq!(Adjustment::new(75).value(), 20);
    }

    #[test]
    fn from_count_diminishes_at_floor() {
        assert_eq!(Adjustment::from_correction_count(3).value(), -15);
        assert_eq!(Adjustment::from_correction_count(10).value(), -50);
        assert_eq!(Adjustment::from_correction_count(10_000).value(), -50);
    }

    #[test]
    fn sum_clamps() {
        let total = Adjustment::sum([Adjustment::new(-30), Adjustment::new(-30)]);
        assert_eq!(total.value(), -50);
    }

    #[test]
    fn decode_clamps_out_of_range_values() {
        let below: Adjustment = serde_json::from_str("-120").unwrap();
        assert_eq!(below.value(), -50);
        let above: Adjustment = serde_json::from_str("75").unwrap();
        assert_eq!(above.value(), 20);
    }

    #[test]
    fn wire_format_is_a_bare_integer() {
        assert_eq!(serde_json::to_string(&Adjustment::new(-15)).unwrap(), "-15");
    }
}
