//! The per-expression evaluation unit.
//!
//! An expectation owns one expression's full lifecycle: the before-value is
//! captured the instant it is constructed, the expected outcome is derived
//! from it and never recomputed, and the after-value is written exactly once
//! when the orchestrator triggers it after the block under test has run.
//! Expectations are single-use and never leave the crate.

use crate::amount::Amount;
use crate::delta::{Delta, Expected};
use crate::error::Error;
use crate::expression::Expression;

#[derive(Debug)]
pub(crate) struct Expectation<'a, T: Amount> {
    expression: Expression<'a, T>,
    difference: Delta<T>,
    expected: Expected<T>,
    after: Option<T>,
}

impl<'a, T: Amount> Expectation<'a, T> {
    /// Build an expectation, evaluating the expression immediately to fix
    /// its before-value and expected outcome.
    pub(crate) fn new(expression: Expression<'a, T>, difference: Delta<T>) -> Result<Self, Error> {
        let before = expression.eval()?;
        let expected = difference.applied_to(before);
        Ok(Self {
            expression,
            difference,
            expected,
            after: None,
        })
    }

    /// Re-evaluate the expression and store the result as the after-value.
    /// Called exactly once, after the block under test has fully executed.
    pub(crate) fn capture_after(&mut self) -> Result<(), Error> {
        self.after = Some(self.expression.eval()?);
        Ok(())
    }

    pub(crate) fn passed(&self) -> bool {
        match self.after {
            Some(after) => self.expected.admits(after),
            None => false,
        }
    }

    /// The failure line for this expectation, or `None` if it passed.
    pub(crate) fn failure(&self) -> Option<String> {
        if self.passed() {
            return None;
        }
        let after = self.after?;
        Some(format!(
            "{:?} didn't change by {} (expecting {}, but got {})",
            self.expression.label(),
            self.difference,
            self.expected,
            after
        ))
    }
}
