use strum::EnumMessage;
use strum_macros::{Display, EnumMessage};

/// Sequence access error.
///
/// The message and note of an error are taken from the documentation of
/// its variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumMessage)]
pub enum Error {
    /// Index out of range.
    ///
    /// An element was requested at a position that is not within
    /// `0..len` of the sequence.
    IndexOutOfRange,
    /// Empty access.
    ///
    /// The first or last element was requested from a sequence that has no
    /// elements.
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

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_variant_name() {
        assert_eq!(Error::IndexOutOfRange.code(), "IndexOutOfRange");
        assert_eq!(Error::EmptyAccess.code(), "EmptyAccess");
    }

    #[test]
    fn test_message_and_note() {
        assert_eq!(Error::EmptyAccess.message(), "Empty access.");
        assert!(Error::EmptyAccess.note().starts_with("The first or last"));
    }
}
