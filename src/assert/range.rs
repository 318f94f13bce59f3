use std::fmt;
use std::ops::{Range, RangeInclusive};

use crate::{AssertionFailure, CheckResult};

/// A numeric range supplied by the caller. Its `Display` text is used in failures.
pub trait NumberRange: fmt::Display {
    fn is_number_within(&self, number: f64) -> bool;
}

/// Adapts std ranges to [`NumberRange`].
#[derive(Debug, Clone, PartialEq)]
pub struct Span<R>(pub R);

impl fmt::Display for Span<RangeInclusive<f64>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0.start(), self.0.end())
    }
}

impl NumberRange for Span<RangeInclusive<f64>> {
    fn is_number_within(&self, number: f64) -> bool {
        self.0.contains(&number)
    }
}

impl fmt::Display for Span<Range<f64>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} (exclusive)", self.0.start, self.0.end)
    }
}

impl NumberRange for Span<Range<f64>> {
    fn is_number_within(&self, number: f64) -> bool {
        self.0.contains(&number)
    }
}

pub enum InRange<'a> {
    /// Inclusive on both ends.
    Bounds { min: f64, max: f64 },
    Range(&'a dyn NumberRange),
}

impl<'a> InRange<'a> {
    pub fn bounds(min: impl Into<f64>, max: impl Into<f64>) -> Self {
        InRange::Bounds {
            min: min.into(),
            max: max.into(),
        }
    }

    pub fn range(range: &'a dyn NumberRange) -> Self {
        InRange::Range(range)
    }
}

impl<'a, R: NumberRange> From<&'a R> for InRange<'a> {
    fn from(range: &'a R) -> Self {
        InRange::Range(range)
    }
}

pub fn in_range<'a>(number: impl Into<f64>, range: impl Into<InRange<'a>>) -> CheckResult {
    let number = number.into();

    match range.into() {
        InRange::Bounds { min, max } => {
            if min <= number && number <= max {
                Ok(())
            } else {
                Err(AssertionFailure::expected_actual(
                    format!("{min}-{max}"),
                    number.to_string(),
                ))
            }
        }
        InRange::Range(range) => {
            if range.is_number_within(number) {
                Ok(())
            } else {
                Err(AssertionFailure::expected_actual(
                    range.to_string(),
                    number.to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::{in_range, InRange, NumberRange, Span};

    #[test]
    fn inclusive_bounds() {
        assert!(in_range(5, InRange::bounds(1, 10)).is_ok());
        assert!(in_range(1, InRange::bounds(1, 10)).is_ok());
        assert!(in_range(10, InRange::bounds(1, 10)).is_ok());

        let failure = in_range(0, InRange::bounds(1, 10)).unwrap_err();
        assert_eq!(failure.message(), "Expected: 1-10\nActual: 0");
    }

    #[test]
    fn std_ranges() {
        let inclusive = Span(0.5..=1.5);
        let half_open = Span(0.0..1.0);

        assert!(in_range(1.5, &inclusive).is_ok());
        assert!(in_range(0.25, &half_open).is_ok());
        assert_eq!(
            in_range(1, &half_open).unwrap_err().message(),
            "Expected: 0-1 (exclusive)\nActual: 1"
        );
    }

    struct Even;

    impl fmt::Display for Even {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("even numbers")
        }
    }

    impl NumberRange for Even {
        fn is_number_within(&self, number: f64) -> bool {
            number % 2.0 == 0.0
        }
    }

    #[test]
    fn caller_supplied_range() {
        assert!(in_range(4, InRange::range(&Even)).is_ok());
        assert_eq!(
            in_range(3, &Even).unwrap_err().message(),
            "Expected: even numbers\nActual: 3"
        );
    }
}
