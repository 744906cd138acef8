use std::fmt;

/// Failure classes surfaced by page actions
#[derive(Debug)]
pub enum HarnessError {
    /// No element matched the locator
    ElementNotFound(String),
    /// An element's text did not equal the expected value
    TextMismatch {
        locator: String,
        expected: String,
        actual: String,
    },
    /// Anything else (driver transport, script execution, ...)
    Other(anyhow::Error),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::ElementNotFound(locator) => {
                write!(f, "Element not found: {}", locator)
            }
            HarnessError::TextMismatch {
                locator,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Text mismatch for {}: expected '{}', actual '{}'",
                    locator, expected, actual
                )
            }
            HarnessError::Other(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for HarnessError {
    /// Classify an anyhow error from a page action. Typed errors are
    /// recovered by downcast; resolution failures are recognized by the
    /// message the page layer attaches.
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<HarnessError>() {
            Ok(typed) => typed,
            Err(err) => {
                let msg = err.to_string();
                if msg.starts_with("Element not found:") || msg.contains("no such element") {
                    HarnessError::ElementNotFound(msg)
                } else {
                    HarnessError::Other(err)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;
