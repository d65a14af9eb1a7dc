//! Expected differences and the outcomes derived from them.
//!
//! A [`Delta`] is what the caller asks for: "this value should change by
//! exactly 2" or "by anything from -1 to 3". An [`Expected`] is that request
//! anchored to the value observed before the block ran.

use std::fmt;
use std::ops::RangeInclusive;

use crate::amount::Amount;

/// The expected change in a watched value.
///
/// Built from a plain amount or an inclusive range via `From`, so builder
/// methods and the `changes!` macro accept either form directly.
///
/// # Example
///
/// ```rust
/// use drift::Delta;
///
/// assert_eq!(Delta::from(-2i64), Delta::Exact(-2));
/// assert_eq!(Delta::from(-1i64..=3), Delta::Within(-1, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delta<T> {
    /// The value must change by exactly this amount (possibly zero or
    /// negative).
    Exact(T),
    /// The change must fall within this range, inclusive at both ends.
    Within(T, T),
}

impl<T: Amount> Delta<T> {
    /// Anchor this difference to the value observed before the block ran.
    pub(crate) fn applied_to(self, before: T) -> Expected<T> {
        match self {
            Delta::Exact(difference) => Expected::Exactly(before + difference),
            Delta::Within(low, high) => Expected::Between(before + low, before + high),
        }
    }
}

impl<T: Amount> Default for Delta<T> {
    fn default() -> Self {
        Delta::Exact(T::ONE)
    }
}

impl<T: Amount> From<T> for Delta<T> {
    fn from(difference: T) -> Self {
        Delta::Exact(difference)
    }
}

impl<T: Amount> From<RangeInclusive<T>> for Delta<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        let (low, high) = range.into_inner();
        Delta::Within(low, high)
    }
}

impl<T: Amount> fmt::Display for Delta<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delta::Exact(difference) => write!(f, "{}", difference),
            Delta::Within(low, high) => write!(f, "{}..={}", low, high),
        }
    }
}

/// The outcome an expectation will accept after the block has run.
///
/// Fixed the instant an expectation is constructed and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected<T> {
    /// The after-value must equal this.
    Exactly(T),
    /// The after-value must lie in this interval, inclusive at both ends.
    Between(T, T),
}

impl<T: Amount> Expected<T> {
    /// Whether an observed after-value satisfies this outcome.
    pub fn admits(&self, value: T) -> bool {
        match *self {
            Expected::Exactly(want) => value == want,
            Expected::Between(low, high) => low <= value && value <= high,
        }
    }
}

impl<T: Amount> fmt::Display for Expected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Exactly(want) => write!(f, "{}", want),
            Expected::Between(low, high) => write!(f, "{}..={}", low, high),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_plus_one() {
        assert_eq!(Delta::<i64>::default(), Delta::Exact(1));
    }

    #[test]
    fn exact_applied_to_before_value() {
        assert_eq!(Delta::Exact(2).applied_to(3i64), Expected::Exactly(5));
        assert_eq!(Delta::Exact(-2).applied_to(3i64), Expected::Exactly(1));
    }

    #[test]
    fn range_applied_to_before_value() {
        assert_eq!(Delta::Within(-1, 3).applied_to(3i64), Expected::Between(2, 6));
    }

    #[test]
    fn between_is_inclusive_at_both_ends() {
        let expected = Expected::Between(2i64, 6);
        assert!(expected.admits(2));
        assert!(expected.admits(4));
        assert!(expected.admits(6));
        assert!(!expected.admits(1));
        assert!(!expected.admits(7));
    }

    #[test]
    fn exactly_admits_only_the_match() {
        let expected = Expected::Exactly(4i64);
        assert!(expected.admits(4));
        assert!(!expected.admits(3));
        assert!(!expected.admits(5));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Delta::Exact(-2i64).to_string(), "-2");
        assert_eq!(Delta::Within(-1i64, 3).to_string(), "-1..=3");
        assert_eq!(Expected::Exactly(4i64).to_string(), "4");
        assert_eq!(Expected::Between(2i64, 6).to_string(), "2..=6");
    }
}
