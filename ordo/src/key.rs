use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use strum_macros::Display;

/// The kind of a key.
///
/// All keys of a collection share one kind; this is checked at every
/// insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum KeyKind {
    Integer,
    String,
    Boolean,
}

/// A type that can be used as the key of an ordered collection.
pub trait CollectionKey: Clone + Eq + Hash + fmt::Debug {
    /// The runtime kind of this key.
    fn kind(&self) -> KeyKind;

    /// The canonical order of keys, used to order unordered mappings.
    ///
    /// This must be a total order over keys of the same kind. `None` means
    /// the keys cannot be compared.
    fn canonical_cmp(&self, other: &Self) -> Option<Ordering>;
}

/// A key that can stand for a position in a sequence.
pub trait PositionalKey: CollectionKey {
    fn from_position(position: usize) -> Self;
}

/// A dynamically typed key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Integer(i64),
    String(Arc<str>),
    Boolean(bool),
}

impl Key {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Key::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::String(s) => Some(s),
            _ => None,
        }
    }
}

impl CollectionKey for Key {
    fn kind(&self) -> KeyKind {
        match self {
            Key::Integer(_) => KeyKind::Integer,
            Key::String(_) => KeyKind::String,
            Key::Boolean(_) => KeyKind::Boolean,
        }
    }

    fn canonical_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Key::Integer(a), Key::Integer(b)) => Some(a.cmp(b)),
            // byte order, which for UTF-8 is code point order
            (Key::String(a), Key::String(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
            (Key::Boolean(a), Key::Boolean(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl PositionalKey for Key {
    fn from_position(position: usize) -> Self {
        Key::Integer(position as i64)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Integer(i) => write!(f, "{}", i),
            Key::String(s) => write!(f, "{}", s),
            Key::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Integer(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Integer(i.into())
    }
}

impl From<usize> for Key {
    fn from(position: usize) -> Self {
        Key::from_position(position)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::String(s.into())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::String(s.into())
    }
}

impl From<Arc<str>> for Key {
    fn from(s: Arc<str>) -> Self {
        Key::String(s)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Boolean(b)
    }
}

// statically typed keys have a single kind, so homogeneity holds by
// construction
macro_rules! static_key {
    ($t:ty, $kind:ident) => {
        impl CollectionKey for $t {
            fn kind(&self) -> KeyKind {
                KeyKind::$kind
            }

            fn canonical_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }
    };
}

static_key!(i64, Integer);
static_key!(usize, Integer);
static_key!(String, String);
static_key!(&str, String);
static_key!(Arc<str>, String);
static_key!(bool, Boolean);

impl PositionalKey for i64 {
    fn from_position(position: usize) -> Self {
        position as i64
    }
}

impl PositionalKey for usize {
    fn from_position(position: usize) -> Self {
        position
    }
}
