use strum::EnumMessage;
use strum_macros::{Display, EnumMessage};

/// Collection error code.
///
/// Every failing operation reports exactly one of these to its caller; no
/// operation partially applies before failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumMessage)]
pub enum Error {
    /// Invalid input kind.
    ///
    /// A collection can only be collected from a sequence, an unordered
    /// mapping, or an absent value. Scalars and other shapes are rejected.
    InvalidInputKind,
    /// Key conflict.
    ///
    /// The key is already present in the collection. Keys within a
    /// collection are unique; use `set` to replace the value of an existing
    /// key.
    KeyConflict,
    /// Key type mismatch.
    ///
    /// All keys of a non-empty collection share the kind of its first key.
    /// A key of another kind cannot be inserted, and a mapping with keys of
    /// incomparable kinds cannot be ordered.
    KeyTypeMismatch,
    /// Key not found.
    ///
    /// The operation requires the key to be present in the collection, but
    /// it is not.
    KeyNotFound,
    /// Index out of range.
    ///
    /// A pair was requested at a position outside `0..size` of the
    /// collection, or a linearizer returned keys and values of different
    /// lengths so they cannot be paired by position.
    IndexOutOfRange,
    /// Empty access.
    ///
    /// The first or last pair was requested from an empty collection.
    EmptyAccess,
}

impl Error {
    pub fn code(&self) -> String {
        self.to_string()
    }

    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("");
            let second = pieces.next().unwrap_or("");
            (first, second)
        } else {
            ("", "")
        }
    }
}

impl std::error::Error for Error {}

impl From<ordo_sequence::Error> for Error {
    fn from(e: ordo_sequence::Error) -> Self {
        match e {
            ordo_sequence::Error::IndexOutOfRange => Error::IndexOutOfRange,
            ordo_sequence::Error::EmptyAccess => Error::EmptyAccess,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
