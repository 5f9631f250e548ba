use ahash::{HashSet, HashSetExt};
use ordo_sequence::Sequence;

use crate::error;
use crate::key::{CollectionKey, Key, PositionalKey};
use crate::linearize::{Canonical, Linearizer};
use crate::source::Source;
use crate::value::Value;

use super::collection_core::OrderedCollection;

// every key must be unique and of the kind of the first key
pub(crate) fn validate_keys<K: CollectionKey>(keys: &[K]) -> error::Result<()> {
    let Some(first) = keys.first() else {
        return Ok(());
    };
    let kind = first.kind();
    let mut seen = HashSet::with_capacity(keys.len());
    for key in keys {
        if key.kind() != kind {
            return Err(error::Error::KeyTypeMismatch);
        }
        if !seen.insert(key) {
            return Err(error::Error::KeyConflict);
        }
    }
    Ok(())
}

impl<K, V> OrderedCollection<K, V> {
    pub fn empty() -> Self {
        Self::default()
    }
}

impl<K: PositionalKey, V> OrderedCollection<K, V> {
    /// Collect a sequence; each value is keyed by its position.
    pub fn from_sequence(values: Sequence<V>) -> Self {
        let keys = (0..values.len()).map(K::from_position).collect();
        Self::from_parts(keys, values)
    }

    pub fn from_values(values: Vec<V>) -> Self {
        Self::from_sequence(values.into())
    }

    /// Collect any of the accepted source shapes.
    ///
    /// Sequences need keys that can stand for positions, so this is only
    /// available for [`PositionalKey`] keys. Collections with string keys
    /// are collected from a mapping with [`OrderedCollection::from_map`].
    pub fn collect(source: impl Into<Source<K, V>>) -> error::Result<Self> {
        match source.into() {
            Source::Absent => Ok(Self::empty()),
            Source::Sequence(values) => Ok(Self::from_sequence(values)),
            Source::Mapping(mapping) => Self::from_map(mapping),
        }
    }
}

impl<K: CollectionKey, V> OrderedCollection<K, V> {
    /// Collect the entries of an unordered mapping in canonical key order.
    pub fn from_map<I>(entries: I) -> error::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_map_with(entries, &Canonical)
    }

    /// Collect the entries of an unordered mapping, ordered by `linearizer`.
    ///
    /// A linearizer that returns key and value sequences of different
    /// lengths is rejected with
    /// [`Error::IndexOutOfRange`](error::Error::IndexOutOfRange).
    pub fn from_map_with<I, L>(entries: I, linearizer: &L) -> error::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        L: Linearizer,
    {
        let (keys, values) = linearizer.linearize(entries)?;
        if keys.len() != values.len() {
            return Err(error::Error::IndexOutOfRange);
        }
        validate_keys(keys.all())?;
        Ok(Self::from_parts(keys, values))
    }

    /// Collect pairs that are already in the wanted order.
    pub fn from_pairs(pairs: Vec<(K, V)>) -> error::Result<Self> {
        let (keys, values): (Vec<K>, Vec<V>) = pairs.into_iter().unzip();
        validate_keys(&keys)?;
        Ok(Self::from_parts(keys.into(), values.into()))
    }
}

impl OrderedCollection<Key, Value> {
    /// Collect a dynamically typed value.
    ///
    /// `Null` collects into an empty collection, a sequence by position and
    /// a map in canonical key order. Any other value is rejected with
    /// [`Error::InvalidInputKind`](error::Error::InvalidInputKind).
    pub fn collect_value(value: Value) -> error::Result<Self> {
        match value {
            Value::Null => Ok(Self::empty()),
            Value::Sequence(values) => Ok(Self::from_sequence(values)),
            Value::Map(mapping) => {
                Self::from_map(mapping.iter().map(|(k, v)| (k.clone(), v.clone())))
            }
            Value::Boolean(_)
            | Value::Integer(_)
            | Value::Float(_)
            | Value::String(_) => Err(error::Error::InvalidInputKind),
        }
    }
}

impl TryFrom<Value> for OrderedCollection<Key, Value> {
    type Error = error::Error;

    fn try_from(value: Value) -> error::Result<Self> {
        Self::collect_value(value)
    }
}

impl<K: PositionalKey, V> From<Sequence<V>> for OrderedCollection<K, V> {
    fn from(values: Sequence<V>) -> Self {
        Self::from_sequence(values)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use ahash::{HashMap, HashMapExt};
    use rstest::rstest;

    use super::*;

    fn person() -> Value {
        let mut m = HashMap::new();
        m.insert(Key::from("Age"), Value::from(28));
        m.insert(Key::from("First Name"), Value::from("John"));
        m.insert(Key::from("Last Name"), Value::from("Doe"));
        m.into()
    }

    #[test]
    fn test_collect_sequence() {
        let c = OrderedCollection::<Key, _>::collect(vec!["a", "b", "c"]).unwrap();
        assert_eq!(c.values().all(), &["a", "b", "c"]);
        assert_eq!(c.keys().all(), &[Key::from(0), Key::from(1), Key::from(2)]);
    }

    #[test]
    fn test_collect_absent() {
        let c = OrderedCollection::<i64, &str>::collect(Source::Absent).unwrap();
        assert!(c.is_empty());
        let c = OrderedCollection::<i64, &str>::collect(None::<Vec<&str>>).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn test_collect_mapping() {
        let mut m = HashMap::new();
        m.insert(3i64, "three");
        m.insert(1, "one");
        m.insert(2, "two");
        let c = OrderedCollection::<i64, &str>::collect(m).unwrap();
        assert_eq!(c.keys().all(), &[1, 2, 3]);
        assert_eq!(c.values().all(), &["one", "two", "three"]);
    }

    #[test]
    fn test_collect_value_map() {
        let c = OrderedCollection::collect_value(person()).unwrap();
        assert_eq!(c.keys().implode(","), "Age,First Name,Last Name");
        assert_eq!(
            c.values().all(),
            &[Value::from(28), Value::from("John"), Value::from("Doe")]
        );
    }

    #[test]
    fn test_collect_value_is_deterministic() {
        let a = OrderedCollection::collect_value(person()).unwrap();
        let b = OrderedCollection::collect_value(person()).unwrap();
        assert_eq!(a.keys(), b.keys());
        assert_eq!(a, b);
    }

    #[test]
    fn test_collect_value_null() {
        let c = OrderedCollection::collect_value(Value::Null).unwrap();
        assert!(c.is_empty());
    }

    #[rstest]
    #[case(Value::from(1))]
    #[case(Value::from(1.5))]
    #[case(Value::from("text"))]
    #[case(Value::from(true))]
    fn test_collect_value_scalar_fails(#[case] value: Value) {
        assert_eq!(
            OrderedCollection::<Key, Value>::try_from(value),
            Err(error::Error::InvalidInputKind)
        );
    }

    #[test]
    fn test_collect_value_mixed_keys_fail() {
        let mut m = HashMap::new();
        m.insert(Key::from("a"), Value::from(1));
        m.insert(Key::from(1), Value::from(2));
        assert_eq!(
            OrderedCollection::collect_value(m.into()),
            Err(error::Error::KeyTypeMismatch)
        );
    }

    #[test]
    fn test_from_pairs_keeps_order() {
        let c = OrderedCollection::from_pairs(vec![("b", 1), ("a", 2)]).unwrap();
        assert_eq!(c.keys().all(), &["b", "a"]);
    }

    #[test]
    fn test_from_pairs_duplicate() {
        assert_eq!(
            OrderedCollection::from_pairs(vec![("a", 1), ("a", 2)]),
            Err(error::Error::KeyConflict)
        );
    }

    #[test]
    fn test_from_pairs_mixed_kinds() {
        let pairs = vec![(Key::from("a"), 1), (Key::from(false), 2)];
        assert_eq!(
            OrderedCollection::from_pairs(pairs),
            Err(error::Error::KeyTypeMismatch)
        );
    }

    struct Descending;

    impl Linearizer for Descending {
        fn linearize<K, V, I>(&self, entries: I) -> error::Result<(Sequence<K>, Sequence<V>)>
        where
            K: CollectionKey,
            I: IntoIterator<Item = (K, V)>,
        {
            let mut entries = entries.into_iter().collect::<Vec<_>>();
            entries.sort_by(|(a, _), (b, _)| b.canonical_cmp(a).unwrap_or(Ordering::Equal));
            let (keys, values): (Vec<K>, Vec<V>) = entries.into_iter().unzip();
            Ok((keys.into(), values.into()))
        }
    }

    struct DropsLastValue;

    impl Linearizer for DropsLastValue {
        fn linearize<K, V, I>(&self, entries: I) -> error::Result<(Sequence<K>, Sequence<V>)>
        where
            K: CollectionKey,
            I: IntoIterator<Item = (K, V)>,
        {
            let (keys, mut values): (Vec<K>, Vec<V>) = entries.into_iter().unzip();
            values.pop();
            Ok((keys.into(), values.into()))
        }
    }

    #[test]
    fn test_from_map_with_misaligned_linearizer() {
        let entries = vec![(1i64, "one"), (2, "two")];
        let e = OrderedCollection::from_map_with(entries, &DropsLastValue).unwrap_err();
        assert_eq!(e, error::Error::IndexOutOfRange);
        assert!(e.note().contains("linearizer"));
    }

    #[test]
    fn test_collect_string_keys_from_map() {
        let mut m = HashMap::new();
        m.insert("b".to_string(), 2);
        m.insert("a".to_string(), 1);
        let c = OrderedCollection::from_map(m).unwrap();
        assert_eq!(c.keys().all(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_from_map_with_linearizer() {
        let entries = vec![(1i64, "one"), (3, "three"), (2, "two")];
        let c = OrderedCollection::from_map_with(entries, &Descending).unwrap();
        assert_eq!(c.keys().all(), &[3, 2, 1]);
        assert_eq!(c.values().all(), &["three", "two", "one"]);
    }
}
