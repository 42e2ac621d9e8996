//! Book records and partial updates.

use crate::Patch;
use serde::{Deserialize, Serialize};

/// A book in the store.
///
/// Every field is optional. All five keys are always serialized; a missing
/// value is written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    /// Title
    pub name: Option<String>,
    /// Author
    pub author: Option<String>,
    /// Score between 0 and 10 inclusive
    pub rating: Option<f64>,
    /// Whether the book has been read
    pub read: Option<bool>,
    /// Free-form labels, kept in the order given
    pub tags: Option<Vec<String>>,
}

impl Book {
    /// Create a book with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_read(mut self, read: bool) -> Self {
        self.read = Some(read);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// A partial update to a [`Book`].
///
/// Fields left out of the request stay [`Patch::Absent`] and do not touch the
/// stored book. Fields sent as `null` clear the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookPatch {
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub author: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub rating: Patch<f64>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub read: Patch<bool>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub tags: Patch<Vec<String>>,
}

impl BookPatch {
    /// Whether the patch sets no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_absent()
            && self.author.is_absent()
            && self.rating.is_absent()
            && self.read.is_absent()
            && self.tags.is_absent()
    }

    /// Overlay the present fields of this patch onto `book`.
    pub fn apply_to(self, book: Book) -> Book {
        Book {
            name: self.name.apply_to(book.name),
            author: self.author.apply_to(book.author),
            rating: self.rating.apply_to(book.rating),
            read: self.read.apply_to(book.read),
            tags: self.tags.apply_to(book.tags),
        }
    }
}
