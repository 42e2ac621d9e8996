//! Error types for the bookshelf engine.

use crate::BookId;
use thiserror::Error;

/// All possible errors from the bookshelf engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Validation errors
    #[error("invalid value for field '{field}': {constraint}")]
    Validation {
        field: &'static str,
        constraint: String,
    },

    #[error("book list should not be empty")]
    EmptyBatch,

    #[error("cannot add {requested} book(s): ids are limited to {max}")]
    IdSpaceExhausted { requested: usize, max: BookId },

    // Lookup errors
    #[error("could not find book with id {0}")]
    NotFound(BookId),
}

impl Error {
    /// Whether this error means the requested book does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Whether this error was caused by bad input.
    pub fn is_validation(&self) -> bool {
        !self.is_not_found()
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
