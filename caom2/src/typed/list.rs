//! An ordered sequence restricted to a fixed set of element types.

use std::fmt;

use super::{PermittedTypes, Typed};
use crate::error::{Caom2Error, Caom2Result};
use crate::validation::check_permitted;

const FIELD: &str = "TypedList element";

/// A mutable, index-ordered sequence whose elements must all carry one of the
/// permitted type tags.
///
/// Every operation that stores an element checks its type first and leaves
/// the list untouched when the check fails.
///
/// # Examples
///
/// ```
/// use caom2::typed::{PermittedTypes, TypedList, Value, ValueType};
///
/// let mixed = TypedList::new(
///     PermittedTypes::from([ValueType::Str, ValueType::Int]),
///     [Value::from(1), Value::from(12), Value::from("ABC")],
/// )
/// .unwrap();
/// assert_eq!(mixed.len(), 3);
///
/// let empty: TypedList<Value> = TypedList::empty(PermittedTypes::single(ValueType::Str));
/// assert!(empty.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TypedList<T: Typed> {
    permitted: PermittedTypes<T::Tag>,
    items: Vec<T>,
}

impl<T: Typed> TypedList<T> {
    /// Creates a list from initial elements.
    ///
    /// All elements are checked before the list is built; the first element
    /// with a type outside `permitted` fails the whole construction.
    pub fn new(
        permitted: PermittedTypes<T::Tag>,
        items: impl IntoIterator<Item = T>,
    ) -> Caom2Result<Self> {
        let items: Vec<T> = items.into_iter().collect();
        for item in &items {
            check_permitted(item.type_tag(), &permitted, FIELD)?;
        }
        Ok(Self { permitted, items })
    }

    pub fn empty(permitted: PermittedTypes<T::Tag>) -> Self {
        Self {
            permitted,
            items: Vec::new(),
        }
    }

    pub fn permitted(&self) -> &PermittedTypes<T::Tag> {
        &self.permitted
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Caom2Result<&T> {
        self.items.get(index).ok_or(Caom2Error::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Caom2Result<T> {
        self.check(&value)?;
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(Caom2Error::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, value))
    }

    /// Inserts `value` before position `index`; `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Caom2Result<()> {
        self.check(&value)?;
        if index > self.items.len() {
            return Err(Caom2Error::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.items.insert(index, value);
        Ok(())
    }

    pub fn append(&mut self, value: T) -> Caom2Result<()> {
        self.check(&value)?;
        self.items.push(value);
        Ok(())
    }

    /// Appends every element of `values`, or none of them if any has the
    /// wrong type.
    pub fn extend(&mut self, values: impl IntoIterator<Item = T>) -> Caom2Result<()> {
        let values: Vec<T> = values.into_iter().collect();
        for value in &values {
            self.check(value)?;
        }
        self.items.extend(values);
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn delete(&mut self, index: usize) -> Caom2Result<T> {
        if index >= self.items.len() {
            return Err(Caom2Error::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn check(&self, value: &T) -> Caom2Result<()> {
        check_permitted(value.type_tag(), &self.permitted, FIELD)
    }
}

impl<T: Typed + PartialEq> TypedList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }
}

impl<'a, T: Typed> IntoIterator for &'a TypedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Typed> IntoIterator for TypedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// One element per line, in order.
impl<T: Typed + fmt::Display> fmt::Display for TypedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
