mod collection_core;
mod creation;
mod mutation;
#[cfg(feature = "serde")]
mod serialization;
mod transform;

pub use collection_core::{Entries, Iter, OrderedCollection};
