//! An insertion-ordered mapping whose keys are derived from the values.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::{Keyed, PermittedTypes, Typed};
use crate::error::{Caom2Error, Caom2Result};
use crate::validation::check_permitted;

const FIELD: &str = "TypedOrderedDict value";

/// An insertion-ordered mapping from key to value where every value must
/// carry the declared type tag and be stored under its own key.
///
/// The key is authoritative on the value: [`set`](Self::set) recomputes
/// `value.key()` and rejects the pair if it differs from the supplied key.
/// A type mismatch is reported before a key mismatch.
///
/// Replacing an existing key keeps its original position; new keys are
/// appended. Iteration follows insertion order, not key order.
#[derive(Debug, Clone)]
pub struct TypedOrderedDict<V: Typed + Keyed> {
    declared: V::Tag,
    permitted: PermittedTypes<V::Tag>,
    entries: Vec<(V::Key, V)>,
    index: HashMap<V::Key, usize>,
}

impl<V: Typed + Keyed> TypedOrderedDict<V> {
    /// Creates a mapping from `(key, value)` pairs.
    ///
    /// Every pair is validated as by [`set`](Self::set); the first invalid pair
    /// fails the whole construction.
    pub fn new(
        declared: V::Tag,
        pairs: impl IntoIterator<Item = (V::Key, V)>,
    ) -> Caom2Result<Self> {
        let mut dict = Self::empty(declared);
        for (key, value) in pairs {
            dict.set(key, value)?;
        }
        Ok(dict)
    }

    pub fn empty(declared: V::Tag) -> Self {
        Self {
            declared,
            permitted: PermittedTypes::single(declared),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The type tag every value must carry.
    pub fn declared_type(&self) -> V::Tag {
        self.declared
    }

    /// Checks the value's type, then that `value.key()` equals `key`.
    pub fn check(&self, key: &V::Key, value: &V) -> Caom2Result<()> {
        check_permitted(value.type_tag(), &self.permitted, FIELD)?;
        let found = value.key();
        if &found != key {
            return Err(Caom2Error::KeyMismatch {
                supplied: key.to_string(),
                found: found.to_string(),
            });
        }
        Ok(())
    }

    /// Inserts or replaces the entry at `key`, returning the replaced value.
    pub fn set(&mut self, key: V::Key, value: V) -> Caom2Result<Option<V>> {
        self.check(&key, &value)?;
        match self.index.get(&key) {
            Some(&pos) => Ok(Some(std::mem::replace(&mut self.entries[pos].1, value))),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                Ok(None)
            }
        }
    }

    /// Inserts `value` under its own key.
    pub fn add(&mut self, value: V) -> Caom2Result<Option<V>> {
        let key = value.key();
        self.set(key, value)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        V::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        V::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Removes the entry at `key`. The remaining entries keep their order.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        V::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = self.index.remove(key)?;
        let (_, value) = self.entries.remove(pos);
        for (k, _) in &self.entries[pos..] {
            if let Some(slot) = self.index.get_mut::<V::Key>(k) {
                *slot -= 1;
            }
        }
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V::Key, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &V::Key> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<V: Typed + Keyed + PartialEq> PartialEq for TypedOrderedDict<V> {
    fn eq(&self, other: &Self) -> bool {
        self.declared == other.declared && self.entries == other.entries
    }
}

/// One `key => value` pair per line, in insertion order.
impl<V: Typed + Keyed + fmt::Display> fmt::Display for TypedOrderedDict<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} => {}", key, value)?;
        }
        Ok(())
    }
}
