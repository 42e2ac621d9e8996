//! Built-in books loaded at startup.

use bookshelf_engine::Book;

/// The starter book list.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("Dune")
            .with_author("Frank Herbert")
            .with_rating(9.0)
            .with_read(true)
            .with_tags(["sci-fi", "classic"]),
        Book::new("The Left Hand of Darkness")
            .with_author("Ursula K. Le Guin")
            .with_rating(8.5)
            .with_read(true)
            .with_tags(["sci-fi"]),
        Book::new("Piranesi")
            .with_author("Susanna Clarke")
            .with_read(false)
            .with_tags(["fantasy"]),
        Book::new("The Pragmatic Programmer")
            .with_author("Andrew Hunt")
            .with_rating(7.0)
            .with_read(false),
    ]
}
