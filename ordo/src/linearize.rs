use std::cmp::Ordering;

use ordo_sequence::Sequence;

use crate::error;
use crate::key::CollectionKey;

/// Turns the entries of an unordered mapping into one ordered pair of
/// sequences, keys and the values aligned to them.
///
/// The resulting order must only depend on the set of keys, never on the
/// order in which the entries are produced. Both sequences must have the
/// same length: the value at each position belongs to the key at that
/// position.
pub trait Linearizer {
    fn linearize<K, V, I>(&self, entries: I) -> error::Result<(Sequence<K>, Sequence<V>)>
    where
        K: CollectionKey,
        I: IntoIterator<Item = (K, V)>;
}

/// Orders keys by [`CollectionKey::canonical_cmp`]: numerically for integer
/// keys, lexicographically for string keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canonical;

impl Linearizer for Canonical {
    fn linearize<K, V, I>(&self, entries: I) -> error::Result<(Sequence<K>, Sequence<V>)>
    where
        K: CollectionKey,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut entries = entries.into_iter().collect::<Vec<_>>();
        if let Some((first, _)) = entries.first() {
            let kind = first.kind();
            let comparable = entries
                .iter()
                .all(|(key, _)| key.kind() == kind && first.canonical_cmp(key).is_some());
            if !comparable {
                return Err(error::Error::KeyTypeMismatch);
            }
        }
        // all keys share a kind, so the comparison is total
        entries.sort_by(|(a, _), (b, _)| a.canonical_cmp(b).unwrap_or(Ordering::Equal));
        if entries.windows(2).any(|pair| pair[0].0 == pair[1].0) {
            return Err(error::Error::KeyConflict);
        }
        let (keys, values): (Vec<K>, Vec<V>) = entries.into_iter().unzip();
        Ok((keys.into(), values.into()))
    }
}

/// Linearize entries in canonical order.
pub fn linearize<K, V, I>(entries: I) -> error::Result<(Sequence<K>, Sequence<V>)>
where
    K: CollectionKey,
    I: IntoIterator<Item = (K, V)>,
{
    Canonical.linearize(entries)
}
