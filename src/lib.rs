//! # drift
//!
//! Before/after difference assertions for Rust tests.
//!
//! [`assert_difference`] evaluates one or more watched expressions before
//! and after a block of code runs, and asserts that each value changed by
//! an expected amount: an exact delta or an inclusive range. It lets test
//! authors say "this side effect happened" in one line instead of capturing
//! before/after state by hand, and it plugs into Rust's native `#[test]`
//! framework.
//!
//! ## Quick Start
//!
//! ```rust
//! use drift::{assert_difference, watch};
//! use std::cell::RefCell;
//!
//! let articles = RefCell::new(vec!["one", "two"]);
//!
//! assert_difference(watch!(articles.borrow().len() as i64), || {
//!     articles.borrow_mut().push("three");
//! });
//! ```
//!
//! Probes borrow the state they watch, so anything the block mutates lives
//! behind `Cell`, `RefCell`, or an atomic, the same interior-mutability
//! shapes tests already use for shared counters.
//!
//! ## Explicit and Ranged Differences
//!
//! The default difference is `+1`. A shared difference applies to a whole
//! list of expressions, and the `changes!` form pairs each expression with
//! its own, exact or ranged:
//!
//! ```rust
//! use drift::{changes, expect_difference, watch};
//! use std::cell::Cell;
//!
//! let sent = Cell::new(0i64);
//! let queued = Cell::new(0i64);
//!
//! // One difference shared by every expression.
//! expect_difference([watch!(sent.get()), watch!(queued.get())])
//!     .by(2)
//!     .check(|| {
//!         sent.set(2);
//!         queued.set(2);
//!     });
//!
//! // Or one difference per expression.
//! expect_difference(changes! {
//!     sent.get() => 0..=1,
//!     queued.get() => -2,
//! })
//! .check(|| {
//!     sent.set(3);
//!     queued.set(0);
//! });
//! ```
//!
//! ## The Block's Result
//!
//! On success the assertion returns whatever the block returned:
//!
//! ```rust
//! use drift::{assert_difference, watch};
//! use std::cell::RefCell;
//!
//! let deliveries = RefCell::new(Vec::new());
//!
//! let email = assert_difference(watch!(deliveries.borrow().len() as i64), || {
//!     deliveries.borrow_mut().push("reset password".to_string());
//!     deliveries.borrow().last().cloned().unwrap()
//! });
//! assert_eq!(email, "reset password");
//! ```
//!
//! ## Failures
//!
//! Every failing expectation is reported in one combined failure, not just
//! the first:
//!
//! ```rust,should_panic
//! use drift::{assert_difference, watch};
//! use std::cell::Cell;
//!
//! let value = Cell::new(3i64);
//!
//! // panics: "value.get()" didn't change by 1 (expecting 4, but got 3)
//! assert_difference(watch!(value.get()), || {});
//! ```
//!
//! Use [`try_assert_difference`] or [`DifferenceAssertion::run`] for a
//! non-panicking [`Result`], with usage errors, probe failures, and failed
//! expectations distinguished structurally by [`Error`].

pub mod amount;
pub mod assertion;
pub mod batch;
pub mod delta;
pub mod error;
pub mod expression;

mod expectation;

// Entry points
pub use assertion::{assert_difference, expect_difference, try_assert_difference, DifferenceAssertion};

// Input forms
pub use batch::{Batch, IntoExpectations};
pub use expression::Expression;

// Differences and outcomes
pub use amount::Amount;
pub use delta::{Delta, Expected};

// Failure reporting
pub use error::{Error, Report};
