//! # Bookshelf Engine
//!
//! An in-memory book store with schema validation and partial-update merging.
//!
//! This crate holds every piece of book state the HTTP layer works with. It
//! knows nothing about requests, sockets or async runtimes.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine never touches files, network or platform
//! - **Deterministic**: ids come from a monotonic counter, iteration follows
//!   insertion order
//! - **Validated**: nothing reaches the store without passing the schema
//!
//! ## Core Concepts
//!
//! ### Books
//!
//! A [`Book`] is a flat record where every field is optional:
//! name, author, rating (0 to 10 inclusive), read flag and tags.
//!
//! ### Partial updates
//!
//! A [`BookPatch`] carries one [`Patch`] per field. Each one is either
//! [`Patch::Absent`] (leave the stored value alone), [`Patch::Null`]
//! (clear it) or [`Patch::Value`] (overwrite it).
//!
//! ### Store
//!
//! The [`Store`] maps [`BookId`]s to books. Ids are handed out by a counter
//! owned by the store and are never reused after a delete.
//!
//! ## Quick Start
//!
//! ```rust
//! use bookshelf_engine::{Book, BookPatch, Patch, Store};
//!
//! let mut store = Store::new();
//! store
//!     .add(vec![Book::new("Dune").with_author("Frank Herbert")])
//!     .unwrap();
//!
//! let patch = BookPatch {
//!     rating: Patch::Value(9.0),
//!     ..BookPatch::default()
//! };
//! let (id, book) = store.update(1, patch).unwrap();
//!
//! assert_eq!(id, 1);
//! assert_eq!(book.name.as_deref(), Some("Dune"));
//! assert_eq!(book.rating, Some(9.0));
//! ```

pub mod book;
pub mod error;
pub mod patch;
pub mod schema;
pub mod store;

// Re-export main types at crate root
pub use book::{Book, BookPatch};
pub use error::Error;
pub use patch::Patch;
pub use schema::{validate_book, validate_id, validate_patch, MAX_RATING, MIN_RATING};
pub use store::Store;

/// Identifier of a book in the store.
pub type BookId = u32;

/// Highest id the store will ever hand out.
pub const MAX_BOOK_ID: BookId = 1000;
