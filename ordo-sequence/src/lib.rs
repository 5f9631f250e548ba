//! An immutable, ordered list of elements.
//!
//! A [`Sequence`] never changes once it is built: operations such as
//! [`Sequence::append`] return a new sequence. Clones share the same backing
//! storage, so sequences are cheap to pass around and can be shared between
//! threads when their elements can.
mod error;
mod sequence_core;
#[cfg(feature = "serde")]
mod serialization;
mod transform;

pub use error::{Error, Result};
pub use sequence_core::{Iter, Sequence};
pub use transform::Chunked;
