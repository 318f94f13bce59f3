pub mod assert;
pub mod error;
pub mod raised;
pub mod render;

pub use error::{AssertionFailure, CheckResult, ItemFailure};
pub use raised::{BoxError, Outcome, Raised};
pub use assert::{
    all,
    contains,
    does_not_contain,
    does_not_throw,
    does_not_throw_async,
    empty,
    ends_with,
    equal,
    has_property,
    in_range,
    is_checkable_type,
    is_false,
    is_instance_of,
    is_not_undefined,
    is_true,
    is_type,
    is_undefined,
    matches,
    not_equal,
    property_equal,
    starts_with,
    throws,
    throws_async,
    CheckableType,
    ClassRef,
    Contains,
    ErrorClass,
    ExpectedError,
    InRange,
    NumberRange,
    Span,
};
