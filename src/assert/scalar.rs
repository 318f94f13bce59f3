use std::fmt::Debug;

use crate::{render::render, AssertionFailure, CheckResult};

pub fn equal<E, A>(expected: E, actual: A) -> CheckResult
where
    E: PartialEq<A> + Debug,
    A: Debug,
{
    if expected == actual {
        Ok(())
    } else {
        Err(AssertionFailure::expected_actual(
            render(&expected),
            render(&actual),
        ))
    }
}

pub fn not_equal<E, A>(expected: E, actual: A) -> CheckResult
where
    E: PartialEq<A> + Debug,
    A: Debug,
{
    if expected == actual {
        Err(AssertionFailure::expected_actual(
            format!("not {}", render(&expected)),
            render(&actual),
        ))
    } else {
        Ok(())
    }
}

pub fn is_true(value: bool) -> CheckResult {
    equal(true, value)
}

pub fn is_false(value: bool) -> CheckResult {
    equal(false, value)
}

/// `None` plays the part of the undefined sentinel.
pub fn is_undefined<T: PartialEq + Debug>(value: &Option<T>) -> CheckResult {
    equal(&None::<T>, value)
}

pub fn is_not_undefined<T>(value: &Option<T>) -> CheckResult {
    match value {
        Some(_) => Ok(()),
        None => Err(AssertionFailure::expected_actual("not None", "None")),
    }
}
