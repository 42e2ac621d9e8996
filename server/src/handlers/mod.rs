//! Request handlers for book operations.

mod books;

pub use books::*;
