//! Dynamic scalar values for mixed-type collections.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Typed;
use crate::conversions::dates::IVOA_DATE_FORMAT;

/// Type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Str,
    Int,
    Float,
    Bool,
    Uuid,
    Datetime,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Str => "str",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Bool => "bool",
            ValueType::Uuid => "uuid",
            ValueType::Datetime => "datetime",
        };
        f.write_str(name)
    }
}

/// A scalar metadata value.
///
/// Equality is strict per variant: `Int(1)` and `Float(1.0)` are different
/// values. Floats compare by bit pattern so that `Value` can live in hashed
/// sets; in particular `0.0` and `-0.0` are distinct and a NaN equals itself.
#[derive(Debug, Clone)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Uuid(Uuid),
    Datetime(NaiveDateTime),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }
}

impl Typed for Value {
    type Tag = ValueType;

    fn type_tag(&self) -> ValueType {
        match self {
            Value::Str(_) => ValueType::Str,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Bool(_) => ValueType::Bool,
            Value::Uuid(_) => ValueType::Uuid,
            Value::Datetime(_) => ValueType::Datetime,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Uuid(a), Value::Uuid(b)) => a == b,
            (Value::Datetime(a), Value::Datetime(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_tag().hash(state);
        match self {
            Value::Str(s) => s.hash(state),
            Value::Int(i) => i.hash(state),
            Value::Float(x) => x.to_bits().hash(state),
            Value::Bool(b) => b.hash(state),
            Value::Uuid(u) => u.hash(state),
            Value::Datetime(d) => d.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Uuid(u) => write!(f, "{}", u),
            Value::Datetime(d) => write!(f, "{}", d.format(IVOA_DATE_FORMAT)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Uuid> for Value {
    fn from(u: Uuid) -> Self {
        Value::Uuid(u)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(d: NaiveDateTime) -> Self {
        Value::Datetime(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tags_follow_variants() {
        assert_eq!(Value::from("x").type_tag(), ValueType::Str);
        assert_eq!(Value::from(3).type_tag(), ValueType::Int);
        assert_eq!(Value::from(3.5).type_tag(), ValueType::Float);
        assert_eq!(Value::from(true).type_tag(), ValueType::Bool);
        assert_eq!(Value::from(Uuid::nil()).type_tag(), ValueType::Uuid);
    }

    #[test]
    fn cross_variant_values_are_distinct() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::from("1"), Value::Int(1));

        let set: HashSet<Value> = [Value::Int(1), Value::Float(1.0)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn floats_compare_by_bits() {
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_ne!(Value::Float(0.0), Value::Float(-0.0));
    }

    #[test]
    fn display_renders_bare_values() {
        assert_eq!(Value::from("science").to_string(), "science");
        assert_eq!(Value::from(42).to_string(), "42");

        let date = NaiveDateTime::parse_from_str("2010-07-01T12:34:56.789", "%Y-%m-%dT%H:%M:%S%.f")
            .unwrap();
        assert_eq!(Value::from(date).to_string(), "2010-07-01T12:34:56.789");
    }

    #[test]
    fn value_type_serializes_lowercase() {
        let json = serde_json::to_string(&ValueType::Datetime).unwrap();
        assert_eq!(json, "\"datetime\"");
    }
}
