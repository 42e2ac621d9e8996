//! Store - the in-memory state container.
//!
//! The Store owns every book and the counter that hands out ids. It
//! validates input before mutating anything.

use crate::{error::Result, schema, Book, BookId, BookPatch, Error, MAX_BOOK_ID};
use std::collections::BTreeMap;

/// The main store holding all books.
///
/// Ids only ever grow, so ascending id order is insertion order.
#[derive(Debug, Clone)]
pub struct Store {
    /// Books by id
    books: BTreeMap<BookId, Book>,
    /// Id the next added book receives
    next_id: BookId,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            books: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Create a store holding `books`, with ids `1..=n` in the given order.
    pub fn with_books(books: Vec<Book>) -> Result<Self> {
        let mut store = Self::new();
        if !books.is_empty() {
            store.add(books)?;
        }
        Ok(store)
    }

    /// Number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the store holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Check if a book exists.
    pub fn contains(&self, id: BookId) -> bool {
        self.books.contains_key(&id)
    }

    /// Id the next added book will receive.
    pub fn next_id(&self) -> BookId {
        self.next_id
    }

    /// The first `limit` books in insertion order.
    ///
    /// Returns everything when `limit` exceeds the number of books.
    pub fn list(&self, limit: usize) -> Vec<(BookId, &Book)> {
        self.books
            .iter()
            .take(limit)
            .map(|(id, book)| (*id, book))
            .collect()
    }

    /// Get a book by id.
    pub fn get(&self, id: BookId) -> Result<&Book> {
        self.books.get(&id).ok_or(Error::NotFound(id))
    }

    /// Add a batch of books.
    ///
    /// Each book gets the next id in input order. The batch is all or
    /// nothing: if any book is invalid, or the batch would run past
    /// [`MAX_BOOK_ID`], the store is left unchanged.
    pub fn add(&mut self, books: Vec<Book>) -> Result<()> {
        if books.is_empty() {
            return Err(Error::EmptyBatch);
        }

        for book in &books {
            schema::validate_book(book)?;
        }

        let last_id = u64::from(self.next_id) + books.len() as u64 - 1;
        if last_id > u64::from(MAX_BOOK_ID) {
            return Err(Error::IdSpaceExhausted {
                requested: books.len(),
                max: MAX_BOOK_ID,
            });
        }

        for book in books {
            self.books.insert(self.next_id, book);
            self.next_id += 1;
        }

        Ok(())
    }

    /// Apply a partial update to a book.
    ///
    /// Only fields present in `patch` are written. Returns the id together
    /// with the merged book.
    pub fn update(&mut self, id: BookId, patch: BookPatch) -> Result<(BookId, Book)> {
        schema::validate_patch(&patch)?;

        let slot = self.books.get_mut(&id).ok_or(Error::NotFound(id))?;
        let merged = patch.apply_to(std::mem::take(slot));
        *slot = merged.clone();

        Ok((id, merged))
    }

    /// Remove a book.
    pub fn delete(&mut self, id: BookId) -> Result<()> {
        self.books
            .remove(&id)
            .map(|_| ())
            .ok_or(Error::NotFound(id))
    }
}
