//! Immutable ordered key/value collections.
//!
//! An [`OrderedCollection`] keeps its pairs in a fixed order. It can be
//! collected from a sequence, where positions become keys, or from an
//! unordered mapping, which a [`Linearizer`] puts into a deterministic
//! order first. The default linearizer, [`Canonical`], sorts integer keys
//! numerically and string keys lexicographically, so the same mapping always
//! yields the same collection.
//!
//! ```
//! use ahash::{HashMap, HashMapExt};
//! use ordo::{Key, OrderedCollection, Value};
//!
//! let mut person = HashMap::new();
//! person.insert(Key::from("Last Name"), Value::from("Doe"));
//! person.insert(Key::from("Age"), Value::from(28));
//! person.insert(Key::from("First Name"), Value::from("John"));
//!
//! let c = OrderedCollection::collect_value(person.into()).unwrap();
//! assert_eq!(c.keys().implode(", "), "Age, First Name, Last Name");
//! ```
//!
//! Collections never change; operations that modify return a new
//! collection. Every failure is reported as one [`error::Error`].
mod collection;
pub mod error;
mod key;
mod linearize;
#[cfg(feature = "serde")]
mod serialization;
mod source;
mod value;

pub use collection::{Entries, Iter, OrderedCollection};
pub use key::{CollectionKey, Key, KeyKind, PositionalKey};
pub use linearize::{linearize, Canonical, Linearizer};
pub use ordo_sequence::{Chunked, Sequence};
pub use source::Source;
pub use value::{Mapping, Value};
