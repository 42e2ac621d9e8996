//! Schema validation.
//!
//! Type checks happen when JSON is deserialized into [`Book`] or
//! [`BookPatch`]. The checks here cover what the type system cannot express:
//! the rating range and the id range.

use crate::{error::Result, Book, BookId, BookPatch, Error, MAX_BOOK_ID};

/// Lowest accepted rating.
pub const MIN_RATING: f64 = 0.0;

/// Highest accepted rating.
pub const MAX_RATING: f64 = 10.0;

fn validate_rating(rating: f64) -> Result<()> {
    if rating.is_finite() && (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(Error::Validation {
            field: "rating",
            constraint: format!("must be between {MIN_RATING} and {MAX_RATING}, got {rating}"),
        })
    }
}

/// Validate a full book.
pub fn validate_book(book: &Book) -> Result<()> {
    if let Some(rating) = book.rating {
        validate_rating(rating)?;
    }
    Ok(())
}

/// Validate the fields a partial update sets.
pub fn validate_patch(patch: &BookPatch) -> Result<()> {
    if let Some(&rating) = patch.rating.as_value() {
        validate_rating(rating)?;
    }
    Ok(())
}

/// Check that a raw id is in `1..=MAX_BOOK_ID`.
pub fn validate_id(raw: i64) -> Result<BookId> {
    if raw > 0 && raw <= i64::from(MAX_BOOK_ID) {
        // In range, so the cast cannot truncate.
        Ok(raw as BookId)
    } else {
        Err(Error::Validation {
            field: "id",
            constraint: format!("must be greater than 0 and at most {MAX_BOOK_ID}, got {raw}"),
        })
    }
}
