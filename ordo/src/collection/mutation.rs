use crate::error;
use crate::key::CollectionKey;

use super::collection_core::OrderedCollection;

impl<K: CollectionKey, V: Clone> OrderedCollection<K, V> {
    // the single insertion point check: a new key must be absent and of
    // the kind of the keys already present
    fn check_insert(&self, key: &K) -> error::Result<()> {
        if self.position(key).is_some() {
            return Err(error::Error::KeyConflict);
        }
        if let Ok(first) = self.keys.first() {
            if first.kind() != key.kind() {
                return Err(error::Error::KeyTypeMismatch);
            }
        }
        Ok(())
    }

    /// Add a pair at the end.
    pub fn append(&self, key: K, value: V) -> error::Result<Self> {
        self.check_insert(&key)?;
        Ok(Self::from_parts(self.keys.append(key), self.values.append(value)))
    }

    /// Add a pair at the front.
    pub fn prepend(&self, key: K, value: V) -> error::Result<Self> {
        self.check_insert(&key)?;
        Ok(Self::from_parts(self.keys.prepend(key), self.values.prepend(value)))
    }

    /// Replace the value of `key` where it is, or append the pair if `key`
    /// is absent.
    pub fn set(&self, key: K, value: V) -> error::Result<Self> {
        match self.position(&key) {
            Some(position) => {
                let values = self
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| if i == position { value.clone() } else { v.clone() })
                    .collect();
                Ok(Self::from_parts(self.keys.clone(), values))
            }
            None => self.append(key, value),
        }
    }

    /// Remove the pair of `key`.
    pub fn unset(&self, key: &K) -> error::Result<Self> {
        let position = self.position(key).ok_or(error::Error::KeyNotFound)?;
        Ok(self.retain_positions(|i, _| i != position))
    }

    /// Same as [`OrderedCollection::unset`].
    pub fn remove(&self, key: &K) -> error::Result<Self> {
        self.unset(key)
    }

    /// Leave out the pairs of `keys`. Keys that are not present are ignored.
    pub fn except(&self, keys: &[K]) -> Self {
        self.retain_positions(|_, key| !keys.contains(key))
    }

    /// Keep only the pairs of `keys`. Keys that are not present are ignored.
    pub fn only(&self, keys: &[K]) -> Self {
        self.retain_positions(|_, key| keys.contains(key))
    }

    pub(crate) fn retain_positions<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(usize, &K) -> bool,
    {
        let mut keys = Vec::with_capacity(self.size());
        let mut values = Vec::with_capacity(self.size());
        for (i, (k, v)) in self.iter().enumerate() {
            if keep(i, k) {
                keys.push(k.clone());
                values.push(v.clone());
            }
        }
        Self::from_parts(keys.into(), values.into())
    }
}
