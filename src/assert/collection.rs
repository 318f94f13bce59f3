use std::fmt::Debug;

use crate::{
    raised::{capture, Outcome},
    render::render,
    AssertionFailure, CheckResult, ItemFailure,
};

/// How `contains` looks for a match.
pub enum Contains<'a, T> {
    Element(T),
    Predicate(Box<dyn Fn(&T) -> bool + 'a>),
}

impl<'a, T> Contains<'a, T> {
    pub fn element(element: T) -> Self {
        Contains::Element(element)
    }

    pub fn predicate(predicate: impl Fn(&T) -> bool + 'a) -> Self {
        Contains::Predicate(Box::new(predicate))
    }
}

pub fn empty<T: Debug>(items: &[T]) -> CheckResult {
    if items.is_empty() {
        Ok(())
    } else {
        Err(AssertionFailure::expected_actual("[]", render(items)))
    }
}

pub fn contains<T>(items: &[T], matcher: Contains<'_, T>) -> CheckResult
where
    T: PartialEq + Debug,
{
    match matcher {
        Contains::Element(element) => {
            if items.contains(&element) {
                Ok(())
            } else {
                Err(AssertionFailure::expected_actual(
                    format!("collection containing {}", render(&element)),
                    render(items),
                ))
            }
        }
        Contains::Predicate(predicate) => {
            if items.iter().any(|item| predicate(item)) {
                Ok(())
            } else {
                Err(AssertionFailure::expected_actual(
                    "collection with an element matching the predicate",
                    render(items),
                ))
            }
        }
    }
}

pub fn does_not_contain<T>(element: &T, items: &[T]) -> CheckResult
where
    T: PartialEq + Debug,
{
    if items.contains(element) {
        Err(AssertionFailure::expected_actual(
            format!("collection without {}", render(element)),
            render(items),
        ))
    } else {
        Ok(())
    }
}

/// Runs `check` on every element and reports every rejected one together.
///
/// Iteration never stops early. A rejection is an `Err` returned by `check` or a panic
/// raised inside it. The total in the report is the number of elements actually
/// visited, so lazy iterators are counted as they are consumed.
pub fn all<I, F, O>(items: I, mut check: F) -> CheckResult
where
    I: IntoIterator,
    I::Item: Debug,
    F: FnMut(&I::Item) -> O,
    O: Outcome,
{
    let mut visited = 0;
    let mut failures = Vec::new();

    for (index, item) in items.into_iter().enumerate() {
        visited += 1;
        if let Err(raised) = capture(|| check(&item)) {
            tracing::trace!(target: "pruefwerk::all", index, %raised, "element rejected");
            failures.push(ItemFailure::new(index, render(&item), raised.text()));
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(AssertionFailure::multiple_failures(visited, &failures))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{all, contains, does_not_contain, empty, Contains};
    use crate::assert::equal;

    #[test]
    fn empty_requires_zero_items() {
        assert!(empty::<u8>(&[]).is_ok());
        assert_eq!(
            empty(&["x"]).unwrap_err().message(),
            "Expected: []\nActual: [\"x\"]"
        );
        assert!(empty(&[vec![1]]).is_err());
    }

    #[test]
    fn contains_by_equality() {
        assert!(contains(&[1, 2, 3], Contains::element(2)).is_ok());
        assert_eq!(
            contains(&[1, 2, 3], Contains::element(9))
                .unwrap_err()
                .message(),
            "Expected: collection containing 9\nActual: [1, 2, 3]"
        );
    }

    #[test]
    fn contains_by_predicate() {
        assert!(contains(&["a", "bb"], Contains::predicate(|s: &&str| s.len() == 2)).is_ok());
        assert!(contains(&["a", "bb"], Contains::predicate(|s: &&str| s.is_empty())).is_err());
    }

    #[test]
    fn all_passes_when_every_element_passes() {
        assert!(all(vec![2, 4, 6], |n| equal(0, n % 2)).is_ok());
        assert!(all(Vec::<u8>::new(), |_| Err::<(), _>("never called")).is_ok());
    }

    #[test]
    fn all_visits_every_element() {
        let mut seen = Vec::new();
        let result = all(0..5, |n| {
            seen.push(*n);
            Err::<(), _>("no")
        });

        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert!(result
            .unwrap_err()
            .message()
            .starts_with("Assert.all() failure: 5 of 5 items"));
    }

    #[test]
    fn all_accepts_plain_errors() {
        let failure = all(["ok", "bad"], |s| {
            if *s == "bad" {
                Err(format!("rejected {s}"))
            } else {
                Ok(())
            }
        })
        .unwrap_err();

        assert_eq!(
            failure.message(),
            "Assert.all() failure: 1 of 2 items in the collection did not pass\n\
             1     \"bad\"\n rejected bad"
        );
    }

    proptest! {
        #[test]
        fn does_not_contain_negates_contains(
            items in prop::collection::vec(-5i32..5, 0..8),
            needle in -6i32..6,
        ) {
            prop_assert_eq!(
                contains(&items, Contains::element(needle)).is_ok(),
                items.contains(&needle)
            );
            prop_assert_ne!(
                contains(&items, Contains::element(needle)).is_ok(),
                does_not_contain(&needle, &items).is_ok()
            );
        }

        #[test]
        fn all_reports_each_rejected_index(mask in prop::collection::vec(any::<bool>(), 0..40)) {
            let result = all(0..mask.len(), |i| {
                if mask[*i] {
                    Err(format!("rejected {i}\nsecond line"))
                } else {
                    Ok(())
                }
            });

            let rejected: Vec<usize> = (0..mask.len()).filter(|i| mask[*i]).collect();
            if rejected.is_empty() {
                prop_assert!(result.is_ok());
            } else {
                let mut expected = vec![format!(
                    "Assert.all() failure: {} of {} items in the collection did not pass",
                    rejected.len(),
                    mask.len()
                )];
                for i in &rejected {
                    let pad = " ".repeat(i.to_string().len());
                    expected.push(format!("{i}     {i}\n{pad}rejected {i}\n{pad}second line"));
                }
                let failure = result.unwrap_err();
                prop_assert_eq!(failure.message(), expected.join("\n"));
            }
        }
    }
}
