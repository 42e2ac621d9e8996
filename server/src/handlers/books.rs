//! Book handlers - one store operation per request.

use crate::error::Result;
use bookshelf_engine::{Book, BookId, BookPatch, Store};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A book keyed by its id, serialized as `{"<id>": { ...book }}`.
#[derive(Debug, Clone, PartialEq)]
pub struct BookEntry {
    pub id: BookId,
    pub book: Book,
}

impl BookEntry {
    pub fn new(id: BookId, book: Book) -> Self {
        Self { id, book }
    }
}

impl Serialize for BookEntry {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.id.to_string(), &self.book)?;
        map.end()
    }
}

/// List the first `limit` books.
pub fn list_books(store: &Store, limit: usize) -> Vec<BookEntry> {
    let entries: Vec<_> = store
        .list(limit)
        .into_iter()
        .map(|(id, book)| BookEntry::new(id, book.clone()))
        .collect();

    tracing::debug!(limit, returned = entries.len(), "Listed books");
    entries
}

/// Fetch a single book.
pub fn get_book(store: &Store, id: BookId) -> Result<Book> {
    let book = store.get(id)?.clone();
    tracing::debug!(id, "Fetched book");
    Ok(book)
}

/// Add a batch of books.
pub fn add_books(store: &mut Store, books: Vec<Book>) -> Result<()> {
    let count = books.len();
    let first_id = store.next_id();

    store.add(books)?;

    tracing::info!(count, first_id, "Added books");
    Ok(())
}

/// Apply a partial update and return the merged book.
pub fn update_book(store: &mut Store, id: BookId, patch: BookPatch) -> Result<BookEntry> {
    let (id, book) = store.update(id, patch)?;
    tracing::info!(id, "Updated book");
    Ok(BookEntry::new(id, book))
}

/// Remove a book.
pub fn delete_book(store: &mut Store, id: BookId) -> Result<()> {
    store.delete(id)?;
    tracing::info!(id, "Deleted book");
    Ok(())
}
