//! Cost - the single-level conflict score.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Integer conflict cost of a schedule.
///
/// Unlike a fitness score, a `Cost` is minimized: lower is strictly better.
/// Rewards are negative contributions, so a total may drop below zero.
///
/// # Examples
///
/// ```
/// use crewforge_core::Cost;
///
/// let penalties = Cost::of(150);
/// let reward = Cost::of(-10);
///
/// assert_eq!(penalties + reward, Cost::of(140));
/// assert!(reward.is_better_than(penalties));
/// assert!(Cost::ZERO.is_zero());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Cost {
    value: i64,
}

impl Cost {
    /// The zero cost: a conflict-free schedule.
    pub const ZERO: Cost = Cost { value: 0 };

    /// Creates a cost with the given value.
    #[inline]
    pub const fn of(value: i64) -> Self {
        Cost { value }
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.value
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Returns true if `self` is strictly lower than `other`.
    #[inline]
    pub fn is_better_than(&self, other: Cost) -> bool {
        self.value < other.value
    }

    /// Scales the cost by an integer count, e.g. a rule weight times its hits.
    #[inline]
    pub const fn times(&self, count: i64) -> Self {
        Cost::of(self.value * count)
    }
}

impl Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost::of(self.value + other.value)
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, other: Self) {
        self.value += other.value;
    }
}

impl Sub for Cost {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Cost::of(self.value - other.value)
    }
}

impl Neg for Cost {
    type Output = Self;

    fn neg(self) -> Self {
        Cost::of(-self.value)
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, Add::add)
    }
}

impl fmt::Debug for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cost({})", self.value)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<i64> for Cost {
    fn from(value: i64) -> Self {
        Cost::of(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_is_better() {
        let low = Cost::of(-20);
        let high = Cost::of(80);

        assert!(low < high);
        assert!(low.is_better_than(high));
        assert!(!high.is_better_than(low));
        assert!(!low.is_better_than(low));
    }

    #[test]
    fn test_arithmetic() {
        let a = Cost::of(100);
        let b = Cost::of(-10);

        assert_eq!(a + b, Cost::of(90));
        assert_eq!(a - b, Cost::of(110));
        assert_eq!(-a, Cost::of(-100));
        assert_eq!(b.times(2), Cost::of(-20));

        let mut c = Cost::ZERO;
        c += a;
        assert_eq!(c, a);
    }

    #[test]
    fn test_sum() {
        let total: Cost = [1, 100, -10, 250].into_iter().map(Cost::of).sum();
        assert_eq!(total, Cost::of(341));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Cost::of(-30)), "-30");
        assert_eq!(format!("{:?}", Cost::of(7)), "Cost(7)");
    }
}
