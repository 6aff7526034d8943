//! The composite photo search
//!
//! A search runs two independent passes over a pool of photos and intersects
//! them:
//!
//! 1. **Date pass**: keeps photos matching the [`DateFilter`](super::DateFilter)
//! 2. **Tag pass**: keeps photos carrying at least one of the flattened
//!    filter tags (OR across every name/value pair, not grouped per name)
//!
//! The result keeps the pool's relative order.

use super::criteria::SearchCriteria;
use super::error::SearchError;
use crate::model::{Album, Photo, PhotoIndex, PhotoKey, User};
use std::collections::HashSet;
use tracing::debug;

/// Result of a well-formed search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Matching photos in pool order
    Found(Vec<PhotoKey>),
    /// Nothing matched; `searched` is the size of the pool
    NoResults { searched: usize },
}

impl SearchOutcome {
    /// Matching keys; empty for `NoResults`
    #[must_use]
    pub fn keys(&self) -> &[PhotoKey] {
        match self {
            Self::Found(keys) => keys,
            Self::NoResults { .. } => &[],
        }
    }

    #[must_use]
    pub fn into_keys(self) -> Vec<PhotoKey> {
        match self {
            Self::Found(keys) => keys,
            Self::NoResults { .. } => Vec::new(),
        }
    }

    /// Informational text for an empty result
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Found(_) => None,
            Self::NoResults { searched: 1 } => {
                Some("The one photo searched doesn't match the search criteria".to_string())
            }
            Self::NoResults { searched } => Some(format!(
                "None of the {searched} photos searched match the search criteria"
            )),
        }
    }
}

/// Search `pool` for photos matching `criteria`
///
/// # Errors
/// Returns `SearchError::NoSearchCriteria` without scanning when the criteria
/// carry neither a date nor any tag value.
pub fn search(pool: &[&Photo], criteria: &SearchCriteria) -> Result<SearchOutcome, SearchError> {
    if criteria.is_empty() {
        return Err(SearchError::NoSearchCriteria);
    }

    let by_date: HashSet<&PhotoKey> = pool
        .iter()
        .filter(|photo| criteria.date.matches(photo.date().date_naive()))
        .map(|photo| photo.key())
        .collect();

    let wanted = criteria.flatten();
    let by_tag: HashSet<&PhotoKey> = pool
        .iter()
        .filter(|photo| wanted.is_empty() || photo.has_any_tag(&wanted))
        .map(|photo| photo.key())
        .collect();

    let matches: Vec<PhotoKey> = pool
        .iter()
        .map(|photo| photo.key())
        .filter(|key| by_date.contains(key) && by_tag.contains(key))
        .cloned()
        .collect();

    debug!(
        pool = pool.len(),
        date_pass = by_date.len(),
        tag_pass = by_tag.len(),
        matches = matches.len(),
        "search complete"
    );

    if matches.is_empty() {
        Ok(SearchOutcome::NoResults { searched: pool.len() })
    } else {
        Ok(SearchOutcome::Found(matches))
    }
}

/// The photos of one album, in album order
#[must_use]
pub fn album_pool<'a>(album: &'a Album, index: &'a PhotoIndex) -> Vec<&'a Photo> {
    index.resolve(album.photos()).collect()
}

/// Every photo across a user's albums, first occurrence wins
///
/// The inbox is not part of the pool.
#[must_use]
pub fn user_pool<'a>(user: &'a User, index: &'a PhotoIndex) -> Vec<&'a Photo> {
    let mut seen = HashSet::new();
    user.albums()
        .iter()
        .flat_map(|album| index.resolve(album.photos()))
        .filter(|photo| seen.insert(photo.key()))
        .collect()
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
