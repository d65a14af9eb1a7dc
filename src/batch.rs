//! Input normalization.
//!
//! The assertion entry points accept a single expression, an ordered
//! collection of expressions sharing one difference, or an ordered keyed
//! form pairing each expression with its own difference. Everything
//! normalizes to a [`Batch`], and a batch plus an optional global
//! difference normalizes to an ordered list of (expression, delta) pairs.

use crate::amount::Amount;
use crate::delta::Delta;
use crate::error::Error;
use crate::expression::Expression;

/// A normalized, ordered collection of expectations.
#[derive(Debug)]
pub enum Batch<'a, T: Amount> {
    /// Expressions that all share one difference (the global one, or the
    /// default of `+1`).
    Uniform(Vec<Expression<'a, T>>),
    /// Expressions each carrying their own difference. Supplying a global
    /// difference on top of this form is a usage error.
    Keyed(Vec<(Expression<'a, T>, Delta<T>)>),
}

impl<'a, T: Amount> Batch<'a, T> {
    /// Resolve the batch against an optional global difference into ordered
    /// (expression, delta) pairs. Nothing is evaluated here; the usage-error
    /// check happens before any probe runs.
    pub(crate) fn into_pairs(
        self,
        difference: Option<Delta<T>>,
    ) -> Result<Vec<(Expression<'a, T>, Delta<T>)>, Error> {
        match self {
            Batch::Keyed(_) if difference.is_some() => Err(Error::ConflictingDifference),
            Batch::Keyed(pairs) => Ok(pairs),
            Batch::Uniform(expressions) => {
                let difference = difference.unwrap_or_default();
                Ok(expressions
                    .into_iter()
                    .map(|expression| (expression, difference))
                    .collect())
            }
        }
    }
}

/// Conversion into a [`Batch`], implemented for every accepted input form.
pub trait IntoExpectations<'a, T: Amount> {
    /// Normalize this input into a batch.
    fn into_batch(self) -> Batch<'a, T>;
}

impl<'a, T: Amount> IntoExpectations<'a, T> for Batch<'a, T> {
    fn into_batch(self) -> Batch<'a, T> {
        self
    }
}

/// A single expression is a one-element collection.
impl<'a, T: Amount> IntoExpectations<'a, T> for Expression<'a, T> {
    fn into_batch(self) -> Batch<'a, T> {
        Batch::Uniform(vec![self])
    }
}

impl<'a, T: Amount> IntoExpectations<'a, T> for Vec<Expression<'a, T>> {
    fn into_batch(self) -> Batch<'a, T> {
        Batch::Uniform(self)
    }
}

impl<'a, T: Amount, const N: usize> IntoExpectations<'a, T> for [Expression<'a, T>; N] {
    fn into_batch(self) -> Batch<'a, T> {
        Batch::Uniform(self.into_iter().collect())
    }
}

impl<'a, T: Amount, D: Into<Delta<T>>> IntoExpectations<'a, T> for Vec<(Expression<'a, T>, D)> {
    fn into_batch(self) -> Batch<'a, T> {
        Batch::Keyed(
            self.into_iter()
                .map(|(expression, difference)| (expression, difference.into()))
                .collect(),
        )
    }
}

impl<'a, T: Amount, D: Into<Delta<T>>, const N: usize> IntoExpectations<'a, T>
    for [(Expression<'a, T>, D); N]
{
    fn into_batch(self) -> Batch<'a, T> {
        Batch::Keyed(
            self.into_iter()
                .map(|(expression, difference)| (expression, difference.into()))
                .collect(),
        )
    }
}

/// Build a keyed batch, pairing each watched expression with its own
/// difference. Differences can mix exact amounts and inclusive ranges.
///
/// # Example
///
/// ```rust
/// use drift::{assert_difference, changes};
/// use std::cell::Cell;
///
/// let hits = Cell::new(0i64);
/// let misses = Cell::new(0i64);
///
/// assert_difference(
///     changes! {
///         hits.get() => 2,
///         misses.get() => 0..=1,
///     },
///     || {
///         hits.set(2);
///         misses.set(1);
///     },
/// );
/// ```
#[macro_export]
macro_rules! changes {
    ($($probe:expr => $difference:expr),+ $(,)?) => {
        $crate::Batch::Keyed(vec![
            $(
                (
                    $crate::Expression::new(stringify!($probe), || $probe),
                    $crate::Delta::from($difference),
                )
            ),+
        ])
    };
}
