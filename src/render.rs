//! Display text and serde projections for values embedded in failure messages.

use std::fmt::Debug;

use serde::Serialize;
use serde_json::Value;

use crate::AssertionFailure;

mod shape;

pub(crate) use shape::shape_tag;

pub fn render<T: Debug + ?Sized>(value: &T) -> String {
    format!("{value:?}")
}

/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                segment.clear();
            }
            c if c.is_alphanumeric() || c == '_' => segment.push(c),
            other => {
                out.push_str(&segment);
                segment.clear();
                out.push(other);
            }
        }
    }

    out.push_str(&segment);
    out
}

pub(crate) fn project<T: Serialize + ?Sized>(value: &T) -> Result<Value, AssertionFailure> {
    serde_json::to_value(value).map_err(inspect_failure)
}

pub(crate) fn inspect_failure(err: serde_json::Error) -> AssertionFailure {
    AssertionFailure::new(format!("could not inspect value: {err}"))
}
