//! Core error types.
//!
//! Every failure the core reports is expected and recoverable: a position
//! that does not resolve, an identifier that does not exist, or an insert
//! that would introduce a duplicate. None of them should crash the caller.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, DeskError>;

/// The container an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    QuestionBank,
    StudentList,
    Quiz,
    Group,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::QuestionBank => write!(f, "question bank"),
            Collection::StudentList => write!(f, "student list"),
            Collection::Quiz => write!(f, "quiz"),
            Collection::Group => write!(f, "group"),
        }
    }
}

impl Collection {
    /// Translate a 1-based position into an offset into a collection of `len`
    /// elements.
    pub fn offset(self, index: usize, len: usize) -> Result<usize> {
        if index == 0 || index > len {
            return Err(DeskError::IndexOutOfRange {
                collection: self,
                index,
                len,
            });
        }
        Ok(index - 1)
    }

    /// Like [`Collection::offset`], but also accepts `len + 1` (append).
    pub fn insert_offset(self, slot: usize, len: usize) -> Result<usize> {
        if slot == 0 || slot > len + 1 {
            return Err(DeskError::IndexOutOfRange {
                collection: self,
                index: slot,
                len,
            });
        }
        Ok(slot - 1)
    }
}

/// Errors raised by the question bank, quizzes, and groups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeskError {
    /// A 1-based position did not resolve within the collection's bounds.
    #[error("{collection} index {index} is out of range (size {len})")]
    IndexOutOfRange {
        collection: Collection,
        index: usize,
        len: usize,
    },

    /// No entity carries the requested identifier.
    #[error("no {collection} with identifier '{id}'")]
    NotFound { collection: Collection, id: String },

    /// An entity with this identifier is already registered.
    #[error("a {collection} with identifier '{id}' already exists")]
    DuplicateIdentifier { collection: Collection, id: String },

    /// The member being inserted is already present in the target.
    #[error("already present in {collection} '{id}'")]
    DuplicateRejected { collection: Collection, id: String },
}

impl DeskError {
    /// Returns `true` for a missing identifier.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DeskError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_bounds() {
        assert_eq!(Collection::QuestionBank.offset(1, 3), Ok(0));
        assert_eq!(Collection::QuestionBank.offset(3, 3), Ok(2));
        assert!(Collection::QuestionBank.offset(0, 3).is_err());
        assert!(Collection::QuestionBank.offset(4, 3).is_err());
        assert!(Collection::QuestionBank.offset(1, 0).is_err());
    }

    #[test]
    fn insert_offset_accepts_append() {
        assert_eq!(Collection::Quiz.insert_offset(1, 0), Ok(0));
        assert_eq!(Collection::Quiz.insert_offset(4, 3), Ok(3));
        assert!(Collection::Quiz.insert_offset(5, 3).is_err());
        assert!(Collection::Quiz.insert_offset(0, 3).is_err());
    }

    #[test]
    fn error_messages() {
        let err = Collection::Group.offset(7, 2).unwrap_err();
        assert_eq!(err.to_string(), "group index 7 is out of range (size 2)");

        let err = DeskError::NotFound {
            collection: Collection::Quiz,
            id: "Finals".into(),
        };
        assert_eq!(err.to_string(), "no quiz with identifier 'Finals'");
        assert!(err.is_not_found());
    }
}
