//! The difference-assertion orchestrator.
//!
//! This module is the public entry point: it normalizes the caller's
//! expectations, captures every before-value, runs the block under test
//! exactly once, captures every after-value in the same order, and either
//! hands back the block's result or fails with one aggregated report.

use crate::amount::Amount;
use crate::batch::{Batch, IntoExpectations};
use crate::delta::Delta;
use crate::error::{Error, Report};
use crate::expectation::Expectation;

/// Assert that the watched expressions change by the default of `+1` while
/// the block runs, panicking on failure.
///
/// Returns whatever the block returned, so the assertion composes
/// transparently with code that needs the block's result. For a different
/// or ranged delta, or a message prefix, use [`expect_difference`]; for a
/// non-panicking variant, use [`try_assert_difference`].
///
/// # Example
///
/// ```rust
/// use drift::{assert_difference, watch};
/// use std::cell::RefCell;
///
/// let articles = RefCell::new(vec!["one", "two"]);
///
/// assert_difference(watch!(articles.borrow().len() as i64), || {
///     articles.borrow_mut().push("three");
/// });
/// ```
///
/// # Panics
///
/// Panics if any expectation fails, with a message enumerating every
/// failing expression. A panic raised by the block itself propagates
/// untouched.
pub fn assert_difference<'a, T: Amount, R>(
    expectations: impl IntoExpectations<'a, T>,
    block: impl FnOnce() -> R,
) -> R {
    DifferenceAssertion::new(expectations).check(block)
}

/// Non-panicking form of [`assert_difference`].
///
/// # Example
///
/// ```rust
/// use drift::{try_assert_difference, watch, Error};
/// use std::cell::Cell;
///
/// let value = Cell::new(3i64);
///
/// let error = try_assert_difference(watch!(value.get()), || {}).unwrap_err();
/// assert!(matches!(error, Error::Failed(_)));
/// ```
pub fn try_assert_difference<'a, T: Amount, R>(
    expectations: impl IntoExpectations<'a, T>,
    block: impl FnOnce() -> R,
) -> Result<R, Error> {
    DifferenceAssertion::new(expectations).run(block)
}

/// Start building a difference assertion.
///
/// This is the fluent entry point: configure the expected difference and an
/// optional message, then finish with [`DifferenceAssertion::check`] or
/// [`DifferenceAssertion::run`].
///
/// # Example
///
/// ```rust
/// use drift::{expect_difference, watch};
/// use std::cell::Cell;
///
/// let articles = Cell::new(10i64);
///
/// expect_difference(watch!(articles.get()))
///     .by(-1)
///     .message("the article should be destroyed")
///     .check(|| articles.set(9));
/// ```
pub fn expect_difference<'a, T: Amount>(
    expectations: impl IntoExpectations<'a, T>,
) -> DifferenceAssertion<'a, T> {
    DifferenceAssertion::new(expectations)
}

/// Builder for a difference assertion over one or more watched expressions.
///
/// Terminal methods consume the builder: every expectation is single-use,
/// bound to exactly one execution of the block under test.
#[derive(Debug)]
pub struct DifferenceAssertion<'a, T: Amount> {
    batch: Batch<'a, T>,
    difference: Option<Delta<T>>,
    message: Option<String>,
}

impl<'a, T: Amount> DifferenceAssertion<'a, T> {
    /// Create an assertion over the given expectations.
    pub fn new(expectations: impl IntoExpectations<'a, T>) -> Self {
        Self {
            batch: expectations.into_batch(),
            difference: None,
            message: None,
        }
    }

    /// Set the expected difference shared by every expression: an exact
    /// amount or an inclusive range.
    ///
    /// Rejected at run time with [`Error::ConflictingDifference`] if the
    /// expectations already carry per-expression differences.
    ///
    /// # Example
    ///
    /// ```rust
    /// use drift::{expect_difference, watch};
    /// use std::cell::Cell;
    ///
    /// let value = Cell::new(3i64);
    ///
    /// expect_difference(watch!(value.get()))
    ///     .by(-1..=3)
    ///     .check(|| value.set(6));
    /// ```
    pub fn by(mut self, difference: impl Into<Delta<T>>) -> Self {
        self.difference = Some(difference.into());
        self
    }

    /// Prefix the aggregated failure text with a message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Run the block and evaluate every expectation, without panicking.
    ///
    /// The sequence is fixed: the usage-error check, then every before-value
    /// in input order, then the block exactly once, then every after-value
    /// in the same order. A probe failure at either capture point aborts
    /// with [`Error::Eval`]; a panic from the block unwinds untouched, with
    /// no after-capture and no report.
    pub fn run<R>(self, block: impl FnOnce() -> R) -> Result<R, Error> {
        let pairs = self.batch.into_pairs(self.difference)?;

        let mut expectations = Vec::with_capacity(pairs.len());
        for (expression, difference) in pairs {
            expectations.push(Expectation::new(expression, difference)?);
        }

        let result = block();

        for expectation in &mut expectations {
            expectation.capture_after()?;
        }

        let failures: Vec<String> = expectations
            .iter()
            .filter_map(|expectation| expectation.failure())
            .collect();

        if failures.is_empty() {
            Ok(result)
        } else {
            Err(Error::Failed(Report::new(self.message, failures)))
        }
    }

    /// Run the block and panic if any expectation fails.
    ///
    /// Returns the block's result on success.
    ///
    /// # Panics
    ///
    /// Panics with the aggregated failure report, or on a usage error or
    /// probe failure.
    pub fn check<R>(self, block: impl FnOnce() -> R) -> R {
        match self.run(block) {
            Ok(result) => result,
            Err(error) => panic!("assertion failed: {}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Expression;
    use crate::watch;
    use std::cell::{Cell, RefCell};

    #[test]
    fn run_threads_the_block_result() {
        let value = Cell::new(0i64);
        let result = expect_difference(watch!(value.get()))
            .by(1)
            .run(|| {
                value.set(1);
                "done"
            })
            .unwrap();
        assert_eq!(result, "done");
    }

    #[test]
    fn before_values_are_captured_in_order_before_the_block() {
        let log = RefCell::new(Vec::new());
        let a = Cell::new(0i64);
        let b = Cell::new(0i64);
        let batch = vec![
            (
                Expression::new("a", || {
                    log.borrow_mut().push("a");
                    a.get()
                }),
                Delta::Exact(1),
            ),
            (
                Expression::new("b", || {
                    log.borrow_mut().push("b");
                    b.get()
                }),
                Delta::Exact(1),
            ),
        ];
        try_assert_difference(batch, || {
            log.borrow_mut().push("block");
            a.set(1);
            b.set(1);
        })
        .unwrap();
        assert_eq!(*log.borrow(), ["a", "b", "block", "a", "b"]);
    }

    #[test]
    fn an_empty_batch_trivially_passes() {
        let result = try_assert_difference(Vec::<Expression<i64>>::new(), || 7).unwrap();
        assert_eq!(result, 7);
    }
}
