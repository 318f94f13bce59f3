use std::error::Error as StdError;
use std::fmt;
use std::future::Future;

use crate::AssertionFailure;

pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Whatever a method under test raised: an `Err` it returned or a panic it unwound with.
#[derive(Debug)]
pub enum Raised {
    Error(BoxError),
    Panic(String),
}

impl Raised {
    pub fn is<E: StdError + 'static>(&self) -> bool {
        match self {
            Raised::Error(err) => err.is::<E>(),
            Raised::Panic(_) => false,
        }
    }

    /// Assertion failures contribute their raw message, not the `Test failed!` form.
    pub fn text(&self) -> String {
        match self {
            Raised::Error(err) => match err.downcast_ref::<AssertionFailure>() {
                Some(failure) => failure.message().to_string(),
                None => err.to_string(),
            },
            Raised::Panic(message) => message.clone(),
        }
    }
}

impl fmt::Display for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Return types a method under test may have.
pub trait Outcome {
    fn into_raised(self) -> Result<(), Raised>;
}

impl Outcome for () {
    fn into_raised(self) -> Result<(), Raised> {
        Ok(())
    }
}

impl<T, E> Outcome for Result<T, E>
where
    E: Into<BoxError>,
{
    fn into_raised(self) -> Result<(), Raised> {
        self.map(|_| ()).map_err(|err| Raised::Error(err.into()))
    }
}

#[cfg(feature = "catch-panics")]
pub(crate) fn capture<O: Outcome>(method: impl FnOnce() -> O) -> Result<(), Raised> {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(method)) {
        Ok(outcome) => outcome.into_raised(),
        Err(payload) => Err(panic_raised(payload)),
    }
}

#[cfg(not(feature = "catch-panics"))]
pub(crate) fn capture<O: Outcome>(method: impl FnOnce() -> O) -> Result<(), Raised> {
    method().into_raised()
}

#[cfg(feature = "catch-panics")]
pub(crate) async fn capture_async<F>(future: F) -> Result<(), Raised>
where
    F: Future,
    F::Output: Outcome,
{
    use futures_util::FutureExt;

    match std::panic::AssertUnwindSafe(future).catch_unwind().await {
        Ok(outcome) => outcome.into_raised(),
        Err(payload) => Err(panic_raised(payload)),
    }
}

#[cfg(not(feature = "catch-panics"))]
pub(crate) async fn capture_async<F>(future: F) -> Result<(), Raised>
where
    F: Future,
    F::Output: Outcome,
{
    future.await.into_raised()
}

#[cfg(feature = "catch-panics")]
fn panic_raised(payload: Box<dyn std::any::Any + Send>) -> Raised {
    let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "Box<dyn Any>".to_string()
    };
    tracing::debug!(target: "pruefwerk::panic", %message, "captured panic");
    Raised::Panic(message)
}

#[cfg(test)]
mod tests {
    use super::{capture, Outcome};
    use crate::AssertionFailure;

    #[test]
    fn unit_outcome_raises_nothing() {
        assert!(().into_raised().is_ok());
        assert!(capture(|| ()).is_ok());
    }

    #[test]
    fn err_outcome_keeps_error_text() {
        let raised = capture(|| Err::<u8, _>("boom")).unwrap_err();
        assert_eq!(raised.text(), "boom");
        assert_eq!(raised.to_string(), "boom");
    }

    #[test]
    fn assertion_failures_contribute_raw_message() {
        let raised = Err::<(), _>(AssertionFailure::new("Expected: 1\nActual: 2"))
            .into_raised()
            .unwrap_err();
        assert!(raised.is::<AssertionFailure>());
        assert_eq!(raised.text(), "Expected: 1\nActual: 2");
    }

    #[cfg(feature = "catch-panics")]
    #[test]
    fn panics_become_raised_values() {
        use super::Raised;

        fn explode() {
            panic!("kaboom {}", 7);
        }

        match capture(explode) {
            Err(Raised::Panic(message)) => assert_eq!(message, "kaboom 7"),
            other => panic!("unexpected capture result: {other:?}"),
        }
    }
}
