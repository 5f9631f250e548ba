use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use ahash::HashMap;
use ordered_float::OrderedFloat;
use ordo_sequence::Sequence;

use crate::key::{CollectionKey, Key};

/// An unordered mapping from keys to values.
pub type Mapping = Arc<HashMap<Key, Value>>;

/// A dynamically typed value.
///
/// Values can be nested: a sequence or a mapping can itself be collected
/// into an ordered collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Float(OrderedFloat<f64>),
    String(Arc<str>),
    Sequence(Sequence<Value>),
    Map(Mapping),
}

impl Value {
    /// A short name for the kind of this value.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

// keys of mixed kinds are grouped by kind so a mapping always displays the
// same way
fn display_order(a: &Key, b: &Key) -> Ordering {
    a.canonical_cmp(b).unwrap_or_else(|| a.kind().cmp(&b.kind()))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(d) => write!(f, "{}", d),
            Value::String(s) => write!(f, "{}", s),
            Value::Sequence(s) => write!(f, "{}", s),
            Value::Map(m) => {
                let mut entries = m.iter().collect::<Vec<_>>();
                entries.sort_by(|(a, _), (b, _)| display_order(a, b));
                let entries = entries
                    .into_iter()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .collect::<Vec<_>>();
                write!(f, "{{{}}}", entries.join(", "))
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Float(OrderedFloat(d))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Sequence<Value>> for Value {
    fn from(s: Sequence<Value>) -> Self {
        Value::Sequence(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Sequence(v.into())
    }
}

impl From<HashMap<Key, Value>> for Value {
    fn from(m: HashMap<Key, Value>) -> Self {
        Value::Map(Arc::new(m))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(o: Option<T>) -> Self {
        match o {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
