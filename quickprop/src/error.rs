//! Failure types produced by a property run.

use std::fmt;

/// Why a single trial failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// The predicate returned `false`
    Falsified,
    /// The predicate panicked or returned an `Err`
    Raised { diagnostic: String },
}

impl PropertyError {
    pub fn raised(diagnostic: impl Into<String>) -> Self {
        Self::Raised {
            diagnostic: diagnostic.into(),
        }
    }

    /// The panic message or error text, if the predicate raised one
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            PropertyError::Falsified => None,
            PropertyError::Raised { diagnostic } => Some(diagnostic),
        }
    }
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyError::Falsified => write!(f, "Property falsified"),
            PropertyError::Raised { diagnostic } => {
                write!(f, "Property raised: {}", diagnostic)
            }
        }
    }
}

impl std::error::Error for PropertyError {}

/// The counter-example that ended a run
#[derive(Debug, Clone)]
pub struct TestFailure<T> {
    /// The value the predicate rejected
    pub value: T,
    /// `Debug` rendering of `value`, captured before the predicate ran
    pub serialized: String,
    /// 1-based number of the failing trial
    pub trial: usize,
    /// Iterations the run was configured for
    pub iterations: usize,
    pub cause: PropertyError,
    /// Where the predicate panicked, as `file:line:column`
    pub location: Option<String>,
}

impl<T> TestFailure<T> {
    pub fn new(
        value: T,
        serialized: String,
        trial: usize,
        iterations: usize,
        cause: PropertyError,
    ) -> Self {
        Self {
            value,
            serialized,
            trial,
            iterations,
            cause,
            location: None,
        }
    }

    /// Attach the source location of a panic
    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    /// One-line description of the failure
    pub fn summary(&self) -> String {
        match &self.cause {
            PropertyError::Falsified => format!(
                "Property falsified on trial {}/{} with input: {}",
                self.trial, self.iterations, self.serialized
            ),
            PropertyError::Raised { diagnostic } => {
                let mut summary = format!(
                    "Property raised on trial {}/{} with input: {}: {}",
                    self.trial, self.iterations, self.serialized, diagnostic
                );
                if let Some(location) = &self.location {
                    summary.push_str(&format!(" (at {})", location));
                }
                summary
            }
        }
    }

    /// Multi-line report suitable for test output
    pub fn detailed_report(&self) -> String {
        let mut report = String::new();
        report.push_str("Property test failed\n");
        report.push_str(&format!("  cause: {}\n", self.cause));
        report.push_str(&format!("  trial: {} of {}\n", self.trial, self.iterations));
        report.push_str(&format!("  input: {}\n", self.serialized));
        if let Some(location) = &self.location {
            report.push_str(&format!("  location: {}\n", location));
        }
        if let Some(diagnostic) = self.cause.diagnostic() {
            report.push_str("  diagnostic:\n");
            for line in diagnostic.lines() {
                report.push_str(&format!("    {}\n", line));
            }
        }
        report
    }
}

impl<T> fmt::Display for TestFailure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

impl<T: fmt::Debug> std::error::Error for TestFailure<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}
