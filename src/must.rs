//! Escalation of resource-release failures.
//!
//! A failed close or flush means data may not have reached its destination.
//! These helpers turn such a failure into a [`ResourceReleaseFault`] that the
//! caller must escalate; it is never discarded.

use std::io;
use thiserror::Error;
use tracing::error;

/// A resource could not be released cleanly.
#[derive(Debug, Error)]
#[error("{operation}: {error}")]
#[must_use = "a release fault must be escalated"]
pub struct ResourceReleaseFault {
    operation: String,
    #[source]
    error: io::Error,
}

impl ResourceReleaseFault {
    /// Label of the operation that failed, e.g. "close config file".
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Terminate with a message naming the failed operation.
    pub fn escalate(self) -> ! {
        error!(operation = %self.operation, error = %self.error, "Resource release failed");
        panic!("resource release failed: {}", self);
    }
}

/// Classify the result of a release operation without escalating.
pub fn check_release(operation: &str, result: io::Result<()>) -> Result<(), ResourceReleaseFault> {
    result.map_err(|error| ResourceReleaseFault {
        operation: operation.to_string(),
        error,
    })
}

/// Continue if the release succeeded, otherwise escalate.
pub fn assert_clean(operation: &str, result: io::Result<()>) {
    if let Err(fault) = check_release(operation, result) {
        fault.escalate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken_pipe() -> io::Error {
        io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed")
    }

    #[test]
    fn test_assert_clean_ok_is_noop() {
        assert_clean("close config file", Ok(()));
    }

    #[test]
    #[should_panic(expected = "close config file")]
    fn test_assert_clean_err_panics_with_label() {
        assert_clean("close config file", Err(broken_pipe()));
    }

    #[test]
    fn test_check_release_ok() {
        assert!(check_release("flush stdout", Ok(())).is_ok());
    }

    #[test]
    fn test_check_release_err_keeps_label_and_source() {
        let fault = check_release("flush stdout", Err(broken_pipe())).unwrap_err();

        assert_eq!(fault.operation(), "flush stdout");
        let message = fault.to_string();
        assert!(message.contains("flush stdout"));
        assert!(message.contains("pipe closed"));
        assert!(std::error::Error::source(&fault).is_some());
    }

    #[test]
    #[should_panic(expected = "resource release failed: flush stdout")]
    fn test_escalate_panics() {
        let fault = check_release("flush stdout", Err(broken_pipe())).unwrap_err();
        fault.escalate();
    }
}
