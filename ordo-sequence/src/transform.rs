use std::fmt;

use crate::sequence_core::Sequence;

/// The result of [`Sequence::chunk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunked<T> {
    /// The chunk size was not positive; this is the original sequence.
    Whole(Sequence<T>),
    /// Consecutive groups; only the last one may be shorter than the size.
    Chunks(Sequence<Sequence<T>>),
}

impl<T> Sequence<T> {
    /// Call `callback` with every element and its position, in order.
    pub fn each<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut(&T, usize),
    {
        for (i, item) in self.iter().enumerate() {
            callback(item, i);
        }
        self
    }

    pub fn map<U, F>(&self, callback: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(callback).collect()
    }

    /// Apply `callback` only if this sequence has elements.
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

impl<T: Clone> Sequence<T> {
    pub fn append(&self, item: T) -> Self {
        let mut vec = Vec::with_capacity(self.len() + 1);
        vec.extend(self.iter().cloned());
        vec.push(item);
        Self::new(vec)
    }

    pub fn prepend(&self, item: T) -> Self {
        let mut vec = Vec::with_capacity(self.len() + 1);
        vec.push(item);
        vec.extend(self.iter().cloned());
        Self::new(vec)
    }

    /// Concatenate two sequences producing a new sequence.
    pub fn concat(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut vec = Vec::with_capacity(self.len() + other.len());
        vec.extend(self.iter().cloned());
        vec.extend(other.iter().cloned());
        Self::new(vec)
    }

    pub fn filter<F>(&self, mut callback: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|&item| callback(item)).cloned().collect()
    }

    /// Split into consecutive groups of `size` elements.
    pub fn chunk(&self, size: isize) -> Chunked<T> {
        match usize::try_from(size) {
            Ok(size) if size > 0 => Chunked::Chunks(
                self.0
                    .chunks(size)
                    .map(|chunk| Sequence::new(chunk.to_vec()))
                    .collect(),
            ),
            _ => Chunked::Whole(self.clone()),
        }
    }
}

impl<T: fmt::Display> Sequence<T> {
    /// Join the text form of all elements with `glue`.
    pub fn implode(&self, glue: &str) -> String {
        self.iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(glue)
    }
}
