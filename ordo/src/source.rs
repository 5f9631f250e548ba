use ahash::HashMap;
use ordo_sequence::Sequence;

/// The shapes a collection can be collected from.
#[derive(Debug, Clone)]
pub enum Source<K, V> {
    /// Nothing; collects into an empty collection.
    Absent,
    /// An ordered sequence; its positions become the keys.
    Sequence(Sequence<V>),
    /// An unordered mapping; ordered by a linearizer.
    Mapping(HashMap<K, V>),
}

impl<K, V> Default for Source<K, V> {
    fn default() -> Self {
        Source::Absent
    }
}

impl<K, V> From<Sequence<V>> for Source<K, V> {
    fn from(sequence: Sequence<V>) -> Self {
        Source::Sequence(sequence)
    }
}

impl<K, V> From<Vec<V>> for Source<K, V> {
    fn from(values: Vec<V>) -> Self {
        Source::Sequence(values.into())
    }
}

impl<K, V> From<HashMap<K, V>> for Source<K, V> {
    fn from(mapping: HashMap<K, V>) -> Self {
        Source::Mapping(mapping)
    }
}

impl<K, V, T> From<Option<T>> for Source<K, V>
where
    T: Into<Source<K, V>>,
{
    fn from(source: Option<T>) -> Self {
        source.map(Into::into).unwrap_or_default()
    }
}
