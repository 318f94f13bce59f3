use regex::Regex;

use crate::{AssertionFailure, CheckResult};

pub fn starts_with(value: &str, prefix: &str) -> CheckResult {
    if value.starts_with(prefix) {
        Ok(())
    } else {
        Err(AssertionFailure::expected_actual(
            format!("string starting with {prefix:?}"),
            format!("{value:?}"),
        ))
    }
}

pub fn ends_with(value: &str, suffix: &str) -> CheckResult {
    if value.ends_with(suffix) {
        Ok(())
    } else {
        Err(AssertionFailure::expected_actual(
            format!("string ending with {suffix:?}"),
            format!("{value:?}"),
        ))
    }
}

pub fn matches(value: &str, pattern: &str) -> CheckResult {
    let regex = Regex::new(pattern)
        .map_err(|err| AssertionFailure::new(format!("invalid pattern {pattern:?}: {err}")))?;

    if regex.is_match(value) {
        Ok(())
    } else {
        Err(AssertionFailure::expected_actual(
            format!("string matching /{pattern}/"),
            format!("{value:?}"),
        ))
    }
}
