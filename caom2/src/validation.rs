//! Type and range validators shared by typed containers and entity setters.
//!
//! Both validators accept an optional value and an [`Override`] describing which
//! alternative, if any, is tolerated when the primary check fails. They return
//! `Ok(())` on success and a [`Caom2Error`] naming the offending field otherwise.

use std::fmt;

use crate::error::{Caom2Error, Caom2Result};
use crate::typed::{PermittedTypes, Typed};

/// The alternative accepted by a validator when the primary check fails.
///
/// * `Absent` - a missing value (`None`) is accepted. This is the default and
///   matches an optional attribute that may simply be unset.
/// * `Value(v)` - a value equal to `v` is accepted even if it would otherwise
///   fail, e.g. a sentinel outside the range.
/// * `Disabled` - no alternative at all; a missing value is rejected too and
///   error messages omit the alternative.
///
/// # Examples
///
/// ```
/// use caom2::validation::{value_check, Override};
///
/// // An unset redshift is fine by default ...
/// assert!(value_check(None, -0.5, 1200.0, "redshift", &Override::Absent).is_ok());
/// // ... but not when the override is disabled.
/// assert!(value_check(None, -0.5, 1200.0, "redshift", &Override::Disabled).is_err());
/// // A sentinel outside the range can be let through explicitly.
/// assert!(value_check(Some(-1.0), 0.0, 1.0, "ratio", &Override::Value(-1.0)).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Override<T> {
    #[default]
    Absent,
    Value(T),
    Disabled,
}

impl<T: PartialEq> Override<T> {
    fn accepts(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Override::Absent, None) => true,
            (Override::Value(expected), Some(actual)) => expected == actual,
            _ => false,
        }
    }
}

impl<T: fmt::Display> Override<T> {
    /// The message fragment describing the alternative, e.g. `" or None"`.
    fn alternative(&self) -> String {
        match self {
            Override::Absent => " or None".to_string(),
            Override::Value(v) => format!(" or {}", v),
            Override::Disabled => String::new(),
        }
    }
}

/// Checks that `value` has one of the permitted types, or is accepted by the
/// override.
///
/// # Arguments
///
/// * `value` - The value to check; `None` stands for an unset attribute
/// * `permitted` - Tags accepted for this field
/// * `field` - Field name used in the error message
/// * `override_value` - Alternative accepted when the type check fails
///
/// # Errors
///
/// [`Caom2Error::TypeMismatch`] naming the expected types, the field and the
/// received type.
///
/// # Examples
///
/// ```
/// use caom2::typed::{PermittedTypes, Value, ValueType};
/// use caom2::validation::{type_check, Override};
///
/// let floats = PermittedTypes::single(ValueType::Float);
/// assert!(type_check(Some(&Value::from(1.5)), &floats, "delta", &Override::Disabled).is_ok());
///
/// let err = type_check(Some(&Value::from("x")), &floats, "delta", &Override::Disabled)
///     .unwrap_err();
/// assert_eq!(err.to_string(), "Expected {float} for delta, received str");
/// ```
pub fn type_check<T>(
    value: Option<&T>,
    permitted: &PermittedTypes<T::Tag>,
    field: &str,
    override_value: &Override<T>,
) -> Caom2Result<()>
where
    T: Typed + PartialEq + fmt::Display,
{
    if override_value.accepts(value) {
        return Ok(());
    }
    match value {
        Some(v) if permitted.contains(&v.type_tag()) => Ok(()),
        Some(v) => Err(type_mismatch(
            permitted,
            &override_value.alternative(),
            field,
            v.type_tag().to_string(),
        )),
        None => Err(type_mismatch(
            permitted,
            &override_value.alternative(),
            field,
            "None".to_string(),
        )),
    }
}

/// Membership check used by the typed containers, where no override applies.
pub(crate) fn check_permitted<Tag>(
    tag: Tag,
    permitted: &PermittedTypes<Tag>,
    field: &str,
) -> Caom2Result<()>
where
    Tag: Copy + Ord + fmt::Display,
{
    if permitted.contains(&tag) {
        Ok(())
    } else {
        Err(type_mismatch(permitted, "", field, tag.to_string()))
    }
}

fn type_mismatch<Tag>(
    permitted: &PermittedTypes<Tag>,
    alternative: &str,
    field: &str,
    received: String,
) -> Caom2Error
where
    Tag: fmt::Display,
{
    Caom2Error::TypeMismatch {
        expected: permitted.to_string(),
        alternative: alternative.to_string(),
        field: field.to_string(),
        received,
    }
}

/// Checks that `min_value <= value <= max_value`, or that the value is accepted
/// by the override.
///
/// NaN never lies inside a range.
///
/// # Errors
///
/// [`Caom2Error::RangeViolation`] carrying the bounds, the field and the
/// received value.
///
/// # Examples
///
/// ```
/// use caom2::validation::{value_check, Override};
///
/// assert!(value_check(Some(3), 1, 10, "naxis", &Override::Disabled).is_ok());
///
/// let err = value_check(Some(0), 1, 10, "naxis", &Override::Disabled).unwrap_err();
/// assert_eq!(err.to_string(), "Expected 1 <= naxis <= 10, received 0");
/// ```
pub fn value_check<N>(
    value: Option<N>,
    min_value: N,
    max_value: N,
    field: &str,
    override_value: &Override<N>,
) -> Caom2Result<()>
where
    N: PartialOrd + fmt::Display + Copy,
{
    if override_value.accepts(value.as_ref()) {
        return Ok(());
    }
    match value {
        Some(v) if min_value <= v && v <= max_value => Ok(()),
        _ => Err(Caom2Error::RangeViolation {
            min: min_value.to_string(),
            max: max_value.to_string(),
            alternative: override_value.alternative(),
            field: field.to_string(),
            received: value.map_or_else(|| "None".to_string(), |v| v.to_string()),
        }),
    }
}

/// Validates a component that will be embedded in a URI path.
///
/// A component is invalid if it contains a space, a slash, a backslash or a
/// percent sign.
///
/// # Arguments
///
/// * `caller` - Name of the type doing the validation, used in the message
/// * `name` - Name of the component, e.g. `"collection"`
/// * `component` - The text to check
pub fn validate_path_component(caller: &str, name: &str, component: &str) -> Caom2Result<()> {
    if component.contains([' ', '/', '\\', '%']) {
        return Err(Caom2Error::InvalidPathComponent {
            caller: caller.to_string(),
            name: name.to_string(),
        });
    }
    Ok(())
}
