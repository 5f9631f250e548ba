use std::fmt;

use crate::error;
use crate::key::CollectionKey;

use super::collection_core::OrderedCollection;
use super::creation::validate_keys;

impl<K, V> OrderedCollection<K, V> {
    /// Call `callback` with every value, its key and its position, in
    /// order. Returns the collection itself for chaining.
    pub fn each<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut(&V, &K, usize),
    {
        for (i, (k, v)) in self.iter().enumerate() {
            callback(v, k, i);
        }
        self
    }

    /// Build a new collection from the `(value, key)` pairs `callback`
    /// produces for every pair, in order.
    ///
    /// The produced keys are validated like any other insertion: they must
    /// be unique and of one kind.
    pub fn map<K2, V2, F>(&self, mut callback: F) -> error::Result<OrderedCollection<K2, V2>>
    where
        K2: CollectionKey,
        F: FnMut(&V, &K, usize) -> (V2, K2),
    {
        let (values, keys): (Vec<V2>, Vec<K2>) = self
            .iter()
            .enumerate()
            .map(|(i, (k, v))| callback(v, k, i))
            .unzip();
        validate_keys(&keys)?;
        Ok(OrderedCollection::from_parts(keys.into(), values.into()))
    }

    /// Transform every value, keeping keys and order.
    pub fn map_values<V2, F>(&self, mut callback: F) -> OrderedCollection<K, V2>
    where
        F: FnMut(&V, &K, usize) -> V2,
    {
        let values = self
            .iter()
            .enumerate()
            .map(|(i, (k, v))| callback(v, k, i))
            .collect();
        OrderedCollection::from_parts(self.keys.clone(), values)
    }

    /// Apply `callback` only if the collection has pairs.
    pub fn when_not_empty<F>(&self, callback: F) -> Self
    where
        F: FnOnce(&Self) -> Self,
    {
        if self.is_not_empty() {
            callback(self)
        } else {
            self.clone()
        }
    }
}

impl<K: CollectionKey, V: Clone> OrderedCollection<K, V> {
    /// Keep the pairs for which `callback` returns true, with their keys
    /// and in their order.
    #[doc(alias = "where")]
    pub fn filter<F>(&self, mut callback: F) -> Self
    where
        F: FnMut(&V, &K, usize) -> bool,
    {
        let values = self.values.all();
        self.retain_positions(|i, k| callback(&values[i], k, i))
    }
}

impl<K, V: fmt::Display> OrderedCollection<K, V> {
    /// Join the text form of all values with `glue`.
    pub fn implode(&self, glue: &str) -> String {
        self.values.implode(glue)
    }
}
