//! Check operations.
//!
//! Every check returns [`CheckResult`](crate::CheckResult): `Ok(())` when it passes, or
//! an [`AssertionFailure`](crate::AssertionFailure) describing what went wrong. Checks
//! are plain functions and keep no state between calls.
//!
//! ```
//! use pruefwerk::assert::{self, Contains, InRange};
//!
//! fn check() -> pruefwerk::CheckResult {
//!     assert::equal(4, 2 + 2)?;
//!     assert::contains(&[1, 2, 3], Contains::predicate(|n: &i32| *n > 2))?;
//!     assert::in_range(5, InRange::bounds(1, 10))?;
//!     Ok(())
//! }
//!
//! assert!(check().is_ok());
//! ```

mod collection;
mod exceptions;
mod properties;
mod range;
mod scalar;
mod strings;
mod types;

pub use collection::{all, contains, does_not_contain, empty, Contains};
pub use exceptions::{
    does_not_throw, does_not_throw_async, throws, throws_async, ErrorClass, ExpectedError,
};
pub use properties::{has_property, property_equal};
pub use range::{in_range, InRange, NumberRange, Span};
pub use scalar::{equal, is_false, is_not_undefined, is_true, is_undefined, not_equal};
pub use strings::{ends_with, matches, starts_with};
pub use types::{is_checkable_type, is_instance_of, is_type, CheckableType, ClassRef};
