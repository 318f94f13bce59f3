//! Dynamic field access. The object is projected through serde into a JSON value and
//! fields are looked up by name, so any `Serialize` type can be inspected.

use serde::Serialize;

use crate::{render::project, AssertionFailure, CheckResult};

pub fn property_equal<O, V>(object: &O, property: &str, expected: V) -> CheckResult
where
    O: Serialize + ?Sized,
    V: Serialize,
{
    let fields = project(object)?;
    let expected = project(&expected)?;

    match fields.get(property) {
        Some(actual) if *actual == expected => Ok(()),
        Some(actual) => Err(AssertionFailure::expected_actual(
            format!("{property} = {expected}"),
            format!("{property} = {actual}"),
        )),
        None => Err(AssertionFailure::expected_actual(
            format!("{property} = {expected}"),
            format!("{property} = <missing>"),
        )),
    }
}

/// Presence only; a field holding `null` still counts.
pub fn has_property<O>(object: &O, property: &str) -> CheckResult
where
    O: Serialize + ?Sized,
{
    let fields = project(object)?;

    match fields.as_object() {
        Some(map) if map.contains_key(property) => Ok(()),
        _ => Err(AssertionFailure::expected_actual(
            format!("value with property {property:?}"),
            fields.to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::Serialize;

    use super::{has_property, property_equal};

    #[derive(Serialize)]
    struct Base {
        id: u32,
    }

    #[derive(Serialize)]
    struct Account {
        name: String,
        nickname: Option<String>,
        #[serde(flatten)]
        base: Base,
    }

    fn account() -> Account {
        Account {
            name: "ada".to_string(),
            nickname: None,
            base: Base { id: 7 },
        }
    }

    #[test]
    fn compares_named_field() {
        assert!(property_equal(&account(), "name", "ada").is_ok());
        assert!(property_equal(&account(), "id", 7).is_ok());

        let failure = property_equal(&account(), "name", "bob").unwrap_err();
        assert_eq!(
            failure.message(),
            "Expected: name = \"bob\"\nActual: name = \"ada\""
        );
    }

    #[test]
    fn missing_field_is_reported() {
        let failure = property_equal(&account(), "email", "a@b.c").unwrap_err();
        assert_eq!(
            failure.message(),
            "Expected: email = \"a@b.c\"\nActual: email = <missing>"
        );
    }

    #[test]
    fn presence_ignores_value() {
        assert!(has_property(&account(), "nickname").is_ok());
        assert!(has_property(&account(), "id").is_ok());
        assert!(has_property(&account(), "email").is_err());

        let mut map = BTreeMap::new();
        map.insert("key", 1);
        assert!(has_property(&map, "key").is_ok());
    }

    #[test]
    fn scalars_have_no_properties() {
        let failure = has_property(&5, "len").unwrap_err();
        assert_eq!(
            failure.message(),
            "Expected: value with property \"len\"\nActual: 5"
        );
    }
}
