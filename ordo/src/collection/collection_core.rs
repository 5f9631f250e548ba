use std::fmt;

use indexmap::IndexMap;
use ordo_sequence::Sequence;

use crate::error;
use crate::key::{CollectionKey, Key};
use crate::value::Value;

/// A mapping view over (part of) a collection, in collection order.
pub type Entries<K, V> = IndexMap<K, V, ahash::RandomState>;

pub type Iter<'a, K, V> =
    std::iter::Zip<ordo_sequence::Iter<'a, K>, ordo_sequence::Iter<'a, V>>;

/// An immutable ordered collection of key/value pairs.
///
/// Keys and values are held as two sequences of the same length. Keys are
/// unique and all of the same [`KeyKind`](crate::KeyKind). Operations that
/// change the collection return a new collection and leave the receiver
/// as it was.
#[derive(Debug, PartialEq, Eq)]
pub struct OrderedCollection<K, V> {
    pub(crate) keys: Sequence<K>,
    pub(crate) values: Sequence<V>,
}

// a published collection never changes, so it can be shared between threads
static_assertions::assert_impl_all!(OrderedCollection<Key, Value>: Send, Sync);

impl<K, V> Clone for OrderedCollection<K, V> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            values: self.values.clone(),
        }
    }
}

impl<K, V> Default for OrderedCollection<K, V> {
    fn default() -> Self {
        Self {
            keys: Sequence::default(),
            values: Sequence::default(),
        }
    }
}

impl<K, V> OrderedCollection<K, V> {
    /// Both sequences must have the same length and the keys must already
    /// be valid.
    pub(crate) fn from_parts(keys: Sequence<K>, values: Sequence<V>) -> Self {
        debug_assert_eq!(keys.len(), values.len());
        Self { keys, values }
    }

    /// The number of pairs.
    pub fn size(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    pub fn keys(&self) -> &Sequence<K> {
        &self.keys
    }

    pub fn values(&self) -> &Sequence<V> {
        &self.values
    }

    /// The pair at position `index`.
    pub fn get(&self, index: usize) -> error::Result<(&K, &V)> {
        Ok((self.keys.get(index)?, self.values.get(index)?))
    }

    pub fn first(&self) -> error::Result<(&K, &V)> {
        if self.is_empty() {
            return Err(error::Error::EmptyAccess);
        }
        self.get(0)
    }

    pub fn last(&self) -> error::Result<(&K, &V)> {
        if self.is_empty() {
            return Err(error::Error::EmptyAccess);
        }
        self.get(self.size() - 1)
    }

    /// Pairs in collection order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.keys.iter().zip(self.values.iter())
    }
}

impl<K: CollectionKey, V> OrderedCollection<K, V> {
    pub(crate) fn position(&self, key: &K) -> Option<usize> {
        self.keys.index(key)
    }

    /// The value of `key`, if present.
    pub fn get_value(&self, key: &K) -> Option<&V> {
        self.position(key).and_then(|i| self.values.all().get(i))
    }

    /// Whether every one of `keys` is present. An empty list of keys is
    /// never present.
    pub fn has(&self, keys: &[K]) -> bool {
        !keys.is_empty() && keys.iter().all(|key| self.position(key).is_some())
    }
}

impl<K: CollectionKey, V: PartialEq> OrderedCollection<K, V> {
    /// Whether `key` is present with exactly `value`.
    pub fn contains(&self, key: &K, value: &V) -> bool {
        self.get_value(key) == Some(value)
    }

    /// The key of the first pair holding `value`.
    pub fn key_of(&self, value: &V) -> Option<&K> {
        self.values.index(value).and_then(|i| self.keys.all().get(i))
    }
}

impl<K: CollectionKey, V: Clone> OrderedCollection<K, V> {
    /// All pairs as a mapping view.
    pub fn all(&self) -> Entries<K, V> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// The pairs at positions `start..=end`.
    ///
    /// `end` defaults to, and is clamped to, the last position. The view is
    /// empty if `start` lies beyond the collection.
    pub fn slice(&self, start: usize, end: Option<usize>) -> Entries<K, V> {
        if start >= self.size() {
            return Entries::default();
        }
        let last = self.size() - 1;
        let end = end.map_or(last, |end| end.min(last));
        self.iter()
            .enumerate()
            .skip(start)
            .take_while(|(i, _)| *i <= end)
            .map(|(_, (k, v))| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for OrderedCollection<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>();
        write!(f, "{{{}}}", entries.join(", "))
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedCollection<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn hello_world() -> OrderedCollection<usize, &'static str> {
        OrderedCollection::from_values(vec!["Hello", "World"])
    }

    #[test]
    fn test_size_matches_sequences() {
        let c = hello_world();
        assert_eq!(c.size(), 2);
        assert_eq!(c.keys().len(), c.size());
        assert_eq!(c.values().len(), c.size());
    }

    #[test]
    fn test_get() {
        let c = hello_world();
        assert_eq!(c.get(0), Ok((&0, &"Hello")));
        assert_eq!(c.get(1), Ok((&1, &"World")));
        assert_eq!(c.get(2), Err(error::Error::IndexOutOfRange));
    }

    #[test]
    fn test_first_and_last() {
        let c = OrderedCollection::<usize, _>::from_values(vec!["Hello", "Middle", "World"]);
        assert_eq!(c.first(), Ok((&0, &"Hello")));
        assert_eq!(c.last(), Ok((&2, &"World")));
    }

    #[test]
    fn test_first_and_last_empty() {
        let c = OrderedCollection::<usize, i64>::empty();
        assert_eq!(c.first(), Err(error::Error::EmptyAccess));
        assert_eq!(c.last(), Err(error::Error::EmptyAccess));
    }

    #[test]
    fn test_get_value() {
        let c = hello_world();
        assert_eq!(c.get_value(&1), Some(&"World"));
        assert_eq!(c.get_value(&5), None);
    }

    #[test]
    fn test_contains() {
        let c = hello_world();
        assert!(c.contains(&0, &"Hello"));
        assert!(!c.contains(&0, &"World"));
        assert!(!c.contains(&3, &"Hello"));
    }

    #[test]
    fn test_has() {
        let c = hello_world();
        assert!(c.has(&[0]));
        assert!(c.has(&[0, 1]));
        assert!(!c.has(&[0, 2]));
        assert!(!c.has(&[]));
    }

    #[test]
    fn test_key_of() {
        let c = hello_world();
        assert_eq!(c.key_of(&"World"), Some(&1));
        assert_eq!(c.key_of(&"Random"), None);
    }

    #[test]
    fn test_all() {
        let c = hello_world();
        let all = c.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all.get_index(0), Some((&0, &"Hello")));
        assert_eq!(all.get(&1), Some(&"World"));
    }

    #[test]
    fn test_slice() {
        let c = OrderedCollection::<usize, _>::from_values(vec!["a", "b", "c", "d"]);
        let slice = c.slice(1, Some(2));
        assert_eq!(slice.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        let slice = c.slice(2, None);
        assert_eq!(slice.values().copied().collect::<Vec<_>>(), vec!["c", "d"]);
        let slice = c.slice(1, Some(100));
        assert_eq!(slice.len(), 3);
    }

    #[test]
    fn test_slice_beyond_range() {
        let c = hello_world();
        assert!(c.slice(5, None).is_empty());
        assert!(c.slice(2, None).is_empty());
    }

    #[test]
    fn test_slice_end_before_start() {
        let c = OrderedCollection::<usize, _>::from_values(vec!["a", "b", "c"]);
        assert!(c.slice(2, Some(1)).is_empty());
    }

    #[test]
    fn test_display() {
        assert_snapshot!(hello_world().to_string(), @"{0: Hello, 1: World}");
    }

    #[test]
    fn test_iter() {
        let c = hello_world();
        let pairs = c.iter().collect::<Vec<_>>();
        assert_eq!(pairs, vec![(&0, &"Hello"), (&1, &"World")]);
    }
}
