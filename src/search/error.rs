//! Search-specific error types
//!
//! - **`NoSearchCriteria`**: neither a date nor any tag value was given; the
//!   pool is never scanned
//! - **`IncompleteTagFilter`**: a custom tag row had a name without values or
//!   values without a name
//! - **`EmptyPool`**: there is nothing to search in
//!
//! An empty result is not an error, see [`super::SearchOutcome::NoResults`].

use crate::library::LibraryError;
use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("There is no entered search criteria. A search condition is needed to search.")]
    NoSearchCriteria,

    #[error("Incomplete tag filter: {0}")]
    IncompleteTagFilter(String),

    #[error("Nothing to search: {0}")]
    EmptyPool(String),

    #[error(transparent)]
    Library(#[from] LibraryError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
