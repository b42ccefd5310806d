//! Typed collections that enforce homogeneous content at the point of insertion.
//!
//! Entity types embed these containers as attributes and rely on them to reject
//! wrongly-typed content immediately, so that malformed metadata is caught close
//! to where it is produced rather than when an observation is finally persisted.
//!
//! The runtime notion of "type" is a closed set of tags: anything stored in a
//! typed container implements [`Typed`], reporting a tag that the container
//! checks against its [`PermittedTypes`]. [`Value`] is the dynamic scalar used
//! for mixed-type lists and sets; entity types report their own tags.
//!
//! # Examples
//!
//! ```
//! use caom2::typed::{PermittedTypes, TypedList, Value, ValueType};
//!
//! let mut obs_type = TypedList::new(
//!     PermittedTypes::single(ValueType::Str),
//!     [Value::from("calibration"), Value::from("science")],
//! )
//! .unwrap();
//!
//! assert_eq!(obs_type.len(), 2);
//! assert!(obs_type.insert(0, Value::from(42)).is_err());
//! assert_eq!(obs_type.len(), 2);
//! ```

pub mod class_property;
pub mod list;
pub mod ordered_dict;
pub mod set;
pub mod value;

use std::fmt;
use std::hash::Hash;

pub use class_property::ClassProperty;
pub use list::TypedList;
pub use ordered_dict::TypedOrderedDict;
pub use set::TypedSet;
pub use value::{Value, ValueType};

/// A value that can report its runtime type as a tag.
pub trait Typed {
    /// Closed set of type tags this value can report.
    type Tag: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display;

    /// The tag of this particular value.
    fn type_tag(&self) -> Self::Tag;
}

/// A value that carries the key it is stored under in a keyed mapping.
pub trait Keyed {
    type Key: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    /// The key derived from the value itself.
    fn key(&self) -> Self::Key;
}

/// An immutable set of type tags accepted by a typed container.
///
/// Tags are kept sorted and de-duplicated, so two sets built from the same
/// tags in any order compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PermittedTypes<T> {
    tags: Box<[T]>,
}

impl<T: Copy + Ord> PermittedTypes<T> {
    /// Builds a permitted-type set from any collection of tags.
    pub fn new(tags: impl IntoIterator<Item = T>) -> Self {
        let mut tags: Vec<T> = tags.into_iter().collect();
        tags.sort();
        tags.dedup();
        Self {
            tags: tags.into_boxed_slice(),
        }
    }

    /// A set holding exactly one tag.
    pub fn single(tag: T) -> Self {
        Self {
            tags: Box::new([tag]),
        }
    }

    pub fn contains(&self, tag: &T) -> bool {
        self.tags.binary_search(tag).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.tags.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<T: Copy + Ord> FromIterator<T> for PermittedTypes<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Copy + Ord, const N: usize> From<[T; N]> for PermittedTypes<T> {
    fn from(tags: [T; N]) -> Self {
        Self::new(tags)
    }
}

impl<T: fmt::Display> fmt::Display for PermittedTypes<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", tag)?;
        }
        write!(f, "}}")
    }
}
