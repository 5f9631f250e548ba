use std::fmt;
use std::sync::Arc;

use crate::error;

pub type Iter<'a, T> = std::slice::Iter<'a, T>;

/// An immutable ordered list.
///
/// Elements are addressed by their 0-based position. Cloning a sequence
/// only bumps a reference count.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Sequence<T>(pub(crate) Arc<[T]>);

// elements are shared, not copied, so no `T: Clone` bound
impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Sequence<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self(items.into())
    }

    /// All elements as a slice.
    pub fn all(&self) -> &[T] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// The element at `index`.
    pub fn get(&self, index: usize) -> error::Result<&T> {
        self.0.get(index).ok_or(error::Error::IndexOutOfRange)
    }

    pub fn first(&self) -> error::Result<&T> {
        self.0.first().ok_or(error::Error::EmptyAccess)
    }

    pub fn last(&self) -> error::Result<&T> {
        self.0.last().ok_or(error::Error::EmptyAccess)
    }

    /// The positions of this sequence, `0..len`.
    pub fn keys(&self) -> Sequence<usize> {
        (0..self.len()).collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: PartialEq> Sequence<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.0.contains(item)
    }

    /// The position of the first element equal to `item`.
    pub fn index(&self, item: &T) -> Option<usize> {
        self.0.iter().position(|i| i == item)
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.implode(", "))
    }
}
