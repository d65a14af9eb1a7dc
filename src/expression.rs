//! Watched expressions.
//!
//! An [`Expression`] pairs a label with a zero-argument probe closure. The
//! closure reads whatever caller state it closes over, so the lexical scope
//! at the call site decides exactly what is inspected; evaluating the
//! expression is invoking the closure. The [`watch!`] macro derives the
//! label from the watched Rust expression itself.

use std::fmt;

use crate::amount::Amount;
use crate::error::Error;

/// A labelled, repeatable probe over caller-owned state.
///
/// The label identifies the expression in failure messages; the probe is
/// evaluated once before the block under test runs and once after. Probes
/// borrow from the enclosing scope, so callers keep mutable state behind
/// `Cell`, `RefCell`, or atomics and let the block write through them.
///
/// # Example
///
/// ```rust
/// use drift::Expression;
/// use std::cell::Cell;
///
/// let hits = Cell::new(0i64);
/// let expression = Expression::new("hits", || hits.get());
/// assert_eq!(expression.label(), "hits");
/// ```
pub struct Expression<'a, T> {
    label: String,
    probe: Box<dyn Fn() -> anyhow::Result<T> + 'a>,
}

impl<'a, T: Amount> Expression<'a, T> {
    /// Watch an infallible probe.
    pub fn new(label: impl Into<String>, probe: impl Fn() -> T + 'a) -> Self {
        Self {
            label: label.into(),
            probe: Box::new(move || Ok(probe())),
        }
    }

    /// Watch a probe that can itself fail.
    ///
    /// A probe error aborts the whole assertion as [`Error::Eval`], at
    /// whichever capture point it occurs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use drift::Expression;
    /// use std::cell::Cell;
    ///
    /// let reading = Cell::new(Some(7i64));
    /// let gauge = Expression::fallible("gauge", || {
    ///     reading.get().ok_or_else(|| anyhow::anyhow!("gauge offline"))
    /// });
    /// assert_eq!(gauge.label(), "gauge");
    /// ```
    pub fn fallible(label: impl Into<String>, probe: impl Fn() -> anyhow::Result<T> + 'a) -> Self {
        Self {
            label: label.into(),
            probe: Box::new(probe),
        }
    }

    /// The label shown in failure messages.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn eval(&self) -> Result<T, Error> {
        (self.probe)().map_err(|source| Error::Eval {
            expression: self.label.clone(),
            source,
        })
    }
}

impl<T> fmt::Debug for Expression<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expression")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Watch a Rust expression, labelling it with its own source text.
///
/// `watch!(value.get())` is shorthand for
/// `Expression::new("value.get()", || value.get())`. An explicit label can
/// be given as a first argument: `watch!("articles", counts.get())`.
///
/// # Example
///
/// ```rust
/// use drift::{assert_difference, watch};
/// use std::cell::Cell;
///
/// let hits = Cell::new(0i64);
/// assert_difference(watch!(hits.get()), || hits.set(1));
/// ```
#[macro_export]
macro_rules! watch {
    ($label:literal, $probe:expr) => {
        $crate::Expression::new($label, || $probe)
    };
    ($probe:expr) => {
        $crate::Expression::new(stringify!($probe), || $probe)
    };
}
