use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type CheckResult = Result<(), AssertionFailure>;

/// A failed check. The message is rendered once, when the failure is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("Test failed!\n{message}")]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(target: "pruefwerk::failure", %message, "assertion failed");
        Self { message }
    }

    pub fn expected_actual(expected: impl AsRef<str>, actual: impl AsRef<str>) -> Self {
        Self::new(format!(
            "Expected: {}\nActual: {}",
            expected.as_ref(),
            actual.as_ref()
        ))
    }

    /// Composite report for `all`: a header line followed by one entry per failed
    /// element. Every line of a nested message is indented by the width of its index.
    pub fn multiple_failures(total_items: usize, errors: &[ItemFailure]) -> Self {
        let mut sections = Vec::with_capacity(errors.len() + 1);
        sections.push(format!(
            "Assert.all() failure: {} of {} items in the collection did not pass",
            errors.len(),
            total_items
        ));

        for error in errors {
            let index = error.index.to_string();
            let padding = " ".repeat(index.len());
            let nested = error
                .message
                .split('\n')
                .map(|line| format!("{padding}{line}"))
                .collect::<Vec<_>>()
                .join("\n");
            sections.push(format!("{index}     {}\n{nested}", error.element));
        }

        Self::new(sections.join("\n"))
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

/// One element rejected by `all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFailure {
    pub index: usize,
    pub element: String,
    pub message: String,
}

impl ItemFailure {
    pub fn new(index: usize, element: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            index,
            element: element.into(),
            message: message.into(),
        }
    }
}
