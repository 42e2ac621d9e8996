//! Request extractors that enforce path and query constraints.
//!
//! Both run before handler logic, so a handler only ever sees an id in
//! `1..=MAX_BOOK_ID` and a well-formed list limit.

use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use bookshelf_engine::{schema, BookId};
use serde::Deserialize;

use crate::error::AppError;

/// Book id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookIdPath(pub BookId);

impl<S> FromRequestParts<S> for BookIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let parsed: i64 = raw
            .trim()
            .parse()
            .map_err(|_| AppError::BadRequest(format!("id must be an integer, got '{raw}'")))?;

        Ok(BookIdPath(schema::validate_id(parsed)?))
    }
}

/// Default for `?limit=` when omitted.
pub const DEFAULT_LIMIT: &str = "3";

/// Longest accepted `?limit=` value, in characters.
pub const MAX_LIMIT_LEN: usize = 1;

/// Query parameters for listing books.
#[derive(Debug, Deserialize)]
struct ListParams {
    limit: Option<String>,
}

/// Number of books to list, parsed from `?limit=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimit(pub usize);

impl ListLimit {
    /// Parse the raw query value.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if raw.chars().count() > MAX_LIMIT_LEN {
            return Err(AppError::BadRequest(format!(
                "limit should have at most {MAX_LIMIT_LEN} character, got '{raw}'"
            )));
        }

        raw.parse()
            .map(ListLimit)
            .map_err(|_| AppError::BadRequest(format!("limit must be an integer, got '{raw}'")))
    }
}

impl<S> FromRequestParts<S> for ListLimit
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        ListLimit::parse(params.limit.as_deref().unwrap_or(DEFAULT_LIMIT))
    }
}
