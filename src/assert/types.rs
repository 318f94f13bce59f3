use std::any::{type_name, TypeId};
use std::fmt::Debug;

use serde::Serialize;

use crate::{
    render::{inspect_failure, project, render, shape_tag, short_type_name},
    AssertionFailure, CheckResult,
};

/// A reference to a concrete Rust type, compared by `TypeId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRef {
    id: TypeId,
    name: &'static str,
}

impl ClassRef {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn name(&self) -> String {
        short_type_name(self.name)
    }
}

pub enum CheckableType<'a> {
    /// One of `null`, `boolean`, `number`, `string`, `array`, `object`.
    Tag(&'a str),
    Class(ClassRef),
}

// TODO: name the guard in the failure once guards carry a description.
pub fn is_type<T>(value: &T, guard: Option<&dyn Fn(&T) -> bool>) -> CheckResult
where
    T: Debug + ?Sized,
{
    match guard {
        Some(guard) if guard(value) => Ok(()),
        _ => Err(AssertionFailure::expected_actual(
            "value to pass type guard",
            render(value),
        )),
    }
}

/// Class identity only, so `T` needs no serde support. The failure names `T`.
pub fn is_instance_of<T>(_value: &T, class: ClassRef) -> CheckResult
where
    T: ?Sized + 'static,
{
    if class.id == TypeId::of::<T>() {
        Ok(())
    } else {
        Err(class_mismatch(class, short_type_name(type_name::<T>())))
    }
}

pub fn is_checkable_type<T>(value: &T, expected: CheckableType<'_>) -> CheckResult
where
    T: Serialize + ?Sized + 'static,
{
    match expected {
        CheckableType::Tag(tag) => {
            let actual = shape_tag(value).map_err(inspect_failure)?;
            if actual == tag {
                Ok(())
            } else {
                Err(AssertionFailure::expected_actual(tag, actual))
            }
        }
        CheckableType::Class(class) => {
            if class.id == TypeId::of::<T>() {
                return Ok(());
            }
            Err(class_mismatch(class, class_actual(value)))
        }
    }
}

/// Objects are named by their type; anything else by its JSON text when serde_json
/// accepts it, by its type otherwise.
fn class_actual<T>(value: &T) -> String
where
    T: Serialize + ?Sized + 'static,
{
    let type_text = || short_type_name(type_name::<T>());

    match shape_tag(value) {
        Ok("object") | Err(_) => type_text(),
        Ok(_) => project(value)
            .map(|projected| projected.to_string())
            .unwrap_or_else(|_| type_text()),
    }
}

fn class_mismatch(class: ClassRef, actual: String) -> AssertionFailure {
    AssertionFailure::expected_actual(format!("instance of {}", class.name()), actual)
}
