//! An unordered, duplicate-free collection restricted to a fixed set of types.

use std::collections::hash_set;
use std::collections::HashSet;
use std::hash::Hash;

use super::{PermittedTypes, Typed};
use crate::error::Caom2Result;
use crate::validation::check_permitted;

const FIELD: &str = "TypedSet element";

/// A set of values that must all carry one of the permitted type tags.
///
/// Inserting a value of the wrong type fails, while removing or probing for
/// one never does: [`discard`](Self::discard) and [`contains`](Self::contains)
/// simply find nothing. Iteration order is unspecified.
///
/// # Examples
///
/// ```
/// use caom2::typed::{PermittedTypes, TypedSet, Value, ValueType};
///
/// let mut keywords = TypedSet::new(
///     PermittedTypes::single(ValueType::Str),
///     [Value::from("radio")],
/// )
/// .unwrap();
///
/// keywords.add(Value::from("radio")).unwrap();
/// assert_eq!(keywords.len(), 1);
///
/// keywords.discard(&Value::from("optical"));
/// assert_eq!(keywords.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TypedSet<T: Typed + Eq + Hash> {
    permitted: PermittedTypes<T::Tag>,
    items: HashSet<T>,
}

impl<T: Typed + Eq + Hash> TypedSet<T> {
    /// Creates a set from initial elements, collapsing duplicates.
    ///
    /// Fails without building anything if any element has a type outside
    /// `permitted`.
    pub fn new(
        permitted: PermittedTypes<T::Tag>,
        items: impl IntoIterator<Item = T>,
    ) -> Caom2Result<Self> {
        let mut set = Self::empty(permitted);
        set.update(items)?;
        Ok(set)
    }

    pub fn empty(permitted: PermittedTypes<T::Tag>) -> Self {
        Self {
            permitted,
            items: HashSet::new(),
        }
    }

    pub fn permitted(&self) -> &PermittedTypes<T::Tag> {
        &self.permitted
    }

    /// Adds a value, returning `true` if it was not already present.
    pub fn add(&mut self, value: T) -> Caom2Result<bool> {
        check_permitted(value.type_tag(), &self.permitted, FIELD)?;
        Ok(self.items.insert(value))
    }

    /// Adds every value, or none of them if any has the wrong type.
    pub fn update(&mut self, values: impl IntoIterator<Item = T>) -> Caom2Result<()> {
        let values: Vec<T> = values.into_iter().collect();
        for value in &values {
            check_permitted(value.type_tag(), &self.permitted, FIELD)?;
        }
        self.items.extend(values);
        Ok(())
    }

    /// Removes a value if present. Never fails.
    pub fn discard(&mut self, value: &T) -> bool {
        self.items.remove(value)
    }

    /// Membership test. A value of a type this set cannot hold is simply
    /// absent.
    pub fn contains(&self, value: &T) -> bool {
        self.permitted.contains(&value.type_tag()) && self.items.contains(value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T: Typed + Eq + Hash> IntoIterator for &'a TypedSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Typed + Eq + Hash> IntoIterator for TypedSet<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Caom2Error;
    use crate::typed::{Value, ValueType};

    fn bands() -> TypedSet<Value> {
        TypedSet::new(PermittedTypes::single(ValueType::Str), [Value::from("radio")]).unwrap()
    }

    #[test]
    fn duplicates_collapse_on_construction() {
        let set = TypedSet::new(
            PermittedTypes::single(ValueType::Str),
            [Value::from("a"), Value::from("b"), Value::from("a")],
        )
        .unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn construction_rejects_wrong_type() {
        let result = TypedSet::new(
            PermittedTypes::single(ValueType::Str),
            [Value::from("a"), Value::from(1)],
        );
        assert!(matches!(
            result,
            Err(Caom2Error::TypeMismatch { ref expected, ref received, .. })
                if expected == "{str}" && received == "int"
        ));
    }

    #[test]
    fn add_is_idempotent() {
        let mut set = bands();
        assert!(!set.add(Value::from("radio")).unwrap());
        assert_eq!(set.len(), 1);
        assert!(set.add(Value::from("optical")).unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn add_rejects_wrong_type() {
        let mut set = bands();
        assert!(matches!(
            set.add(Value::from(7)),
            Err(Caom2Error::TypeMismatch { .. })
        ));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn update_validates_everything_first() {
        let mut set = bands();
        let result = set.update([Value::from("optical"), Value::from(1), Value::from("x-ray")]);
        assert!(result.is_err());
        assert_eq!(set, bands());

        set.update([Value::from("optical"), Value::from("x-ray")]).unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn discard_never_fails() {
        let mut set = bands();
        assert!(!set.discard(&Value::from("optical")));
        assert!(!set.discard(&Value::from(3.0)));
        assert_eq!(set.len(), 1);
        assert!(set.discard(&Value::from("radio")));
        assert!(set.is_empty());
    }

    #[test]
    fn contains_foreign_type_is_false() {
        let set = bands();
        assert!(set.contains(&Value::from("radio")));
        assert!(!set.contains(&Value::from(1)));
        assert!(!set.contains(&Value::from(false)));
    }
}
