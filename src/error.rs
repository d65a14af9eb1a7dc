//! Error types for difference assertions.
//!
//! The three failure channels are distinguished structurally so callers can
//! tell a misuse of the API apart from a probe that could not be evaluated
//! and from the designed failure mode, an expectation that did not hold.

use std::fmt;

/// Error type for a difference assertion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A keyed batch already names a difference per expression; supplying a
    /// global one on top is a usage error, raised before anything is
    /// evaluated.
    #[error("a keyed batch of expectations cannot take a global difference")]
    ConflictingDifference,

    /// A probe could not be evaluated, at either the before- or the
    /// after-capture point. The probe's own error is preserved as the source.
    #[error("failed to evaluate {expression:?}: {source}")]
    Eval {
        /// Label of the expression whose probe failed.
        expression: String,
        /// The probe's underlying error.
        source: anyhow::Error,
    },

    /// One or more expectations did not hold. The report carries every
    /// individual failure, not just the first.
    #[error("{0}")]
    Failed(Report),
}

/// The aggregated outcome of a failed difference assertion.
///
/// Holds one line per failing expectation, in input order, plus the optional
/// caller-supplied message. `Display` renders the combined text: the message
/// (terminated by `.` and a newline) followed by the failure lines separated
/// by blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    message: Option<String>,
    failures: Vec<String>,
}

impl Report {
    pub(crate) fn new(message: Option<String>, failures: Vec<String>) -> Self {
        Self { message, failures }
    }

    /// The caller-supplied message prefix, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The individual failure lines, in input order.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = &self.message {
            writeln!(f, "{}.", message)?;
        }
        write!(f, "{}", self.failures.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_joins_failures_with_a_blank_line() {
        let report = Report::new(None, vec!["first".to_string(), "second".to_string()]);
        assert_eq!(report.to_string(), "first\n\nsecond");
    }

    #[test]
    fn report_prefixes_the_message() {
        let report = Report::new(Some("context".to_string()), vec!["first".to_string()]);
        assert_eq!(report.to_string(), "context.\nfirst");
    }

    #[test]
    fn conflicting_difference_display() {
        assert_eq!(
            Error::ConflictingDifference.to_string(),
            "a keyed batch of expectations cannot take a global difference"
        );
    }

    #[test]
    fn eval_display_names_the_expression() {
        let error = Error::Eval {
            expression: "gauge".to_string(),
            source: anyhow::anyhow!("offline"),
        };
        assert_eq!(error.to_string(), "failed to evaluate \"gauge\": offline");
    }
}
