use std::any::type_name;
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;

use crate::{
    raised::{capture, capture_async, Outcome, Raised},
    render::short_type_name,
    AssertionFailure, CheckResult,
};

/// An error type that a raised error is downcast against.
#[derive(Clone, Copy)]
pub struct ErrorClass {
    name: &'static str,
    matches: fn(&(dyn StdError + Send + Sync + 'static)) -> bool,
}

impl ErrorClass {
    pub fn of<E: StdError + 'static>() -> Self {
        Self {
            name: type_name::<E>(),
            matches: |err| err.is::<E>(),
        }
    }

    pub fn name(&self) -> String {
        short_type_name(self.name)
    }
}

impl fmt::Debug for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorClass").field(&self.name).finish()
    }
}

/// What `throws` expects the method to raise.
#[derive(Debug, Clone)]
pub enum ExpectedError {
    /// The raised error's text must equal this.
    Message(String),
    /// The raised error must be of this type.
    Type(ErrorClass),
}

impl ExpectedError {
    pub fn message(message: impl Into<String>) -> Self {
        ExpectedError::Message(message.into())
    }

    pub fn of<E: StdError + 'static>() -> Self {
        ExpectedError::Type(ErrorClass::of::<E>())
    }

    fn matches(&self, raised: &Raised) -> bool {
        match (self, raised) {
            (ExpectedError::Message(message), raised) => raised.text() == *message,
            (ExpectedError::Type(class), Raised::Error(err)) => (class.matches)(&**err),
            (ExpectedError::Type(_), Raised::Panic(_)) => false,
        }
    }
}

impl fmt::Display for ExpectedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedError::Message(message) => f.write_str(message),
            ExpectedError::Type(class) => f.write_str(&class.name()),
        }
    }
}

impl From<&str> for ExpectedError {
    fn from(message: &str) -> Self {
        ExpectedError::message(message)
    }
}

impl From<String> for ExpectedError {
    fn from(message: String) -> Self {
        ExpectedError::Message(message)
    }
}

pub fn does_not_throw<O: Outcome>(method: impl FnOnce() -> O) -> CheckResult {
    capture(method).map_err(rethrown)
}

pub fn throws<O: Outcome>(
    method: impl FnOnce() -> O,
    expected: Option<ExpectedError>,
) -> CheckResult {
    let raised = match capture(method) {
        Ok(()) => return Err(nothing_thrown(expected.as_ref())),
        Err(raised) => raised,
    };

    match expected {
        None => Ok(()),
        Some(expected) if expected.matches(&raised) => Ok(()),
        Some(ExpectedError::Message(message)) => {
            Err(AssertionFailure::expected_actual(message, raised.text()))
        }
        Some(ExpectedError::Type(class)) => Err(AssertionFailure::expected_actual(
            format!("instance of {}", class.name()),
            raised.text(),
        )),
    }
}

/// Resolves once `future` has settled.
pub async fn does_not_throw_async<F>(future: F) -> CheckResult
where
    F: Future,
    F::Output: Outcome,
{
    capture_async(future).await.map_err(rethrown)
}

/// Resolves once `future` has settled. A mismatch renders the matcher's plain text for
/// both message and type matchers, unlike [`throws`].
pub async fn throws_async<F>(future: F, expected: Option<ExpectedError>) -> CheckResult
where
    F: Future,
    F::Output: Outcome,
{
    let raised = match capture_async(future).await {
        Ok(()) => return Err(nothing_thrown(expected.as_ref())),
        Err(raised) => raised,
    };

    match expected {
        None => Ok(()),
        Some(expected) if expected.matches(&raised) => Ok(()),
        Some(expected) => Err(AssertionFailure::expected_actual(
            expected.to_string(),
            raised.text(),
        )),
    }
}

fn rethrown(raised: Raised) -> AssertionFailure {
    AssertionFailure::expected_actual("no error", raised.text())
}

fn nothing_thrown(expected: Option<&ExpectedError>) -> AssertionFailure {
    let wanted = match expected {
        None => "an error to be thrown".to_string(),
        Some(ExpectedError::Message(message)) => message.clone(),
        Some(ExpectedError::Type(class)) => format!("instance of {}", class.name()),
    };
    AssertionFailure::expected_actual(wanted, "no error thrown")
}
