//! Photo search by date and tags
//!
//! Searches run over a pool: either one album's photos or the de-duplicated
//! union of all of a user's albums. See [`engine`] for the algorithm.

pub mod criteria;
pub mod engine;
pub mod error;

pub use criteria::{DateFilter, SearchCriteria, SearchCriteriaBuilder, TagFilter};
pub use engine::{SearchOutcome, album_pool, search, user_pool};
pub use error::SearchError;

use crate::library::{LibraryError, Library};

/// Which photos a search looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchScope {
    /// Every album the user owns
    AllAlbums,
    /// A single named album
    Album(String),
}

impl Library {
    /// Search one of a user's albums, or all of them
    ///
    /// # Errors
    /// Returns `SearchError::EmptyPool` when the scope holds no photos,
    /// `SearchError::NoSearchCriteria` for empty criteria, or a lookup error.
    pub fn search(
        &self,
        username: &str,
        scope: &SearchScope,
        criteria: &SearchCriteria,
    ) -> Result<SearchOutcome, SearchError> {
        let user = self.user(username)?;
        let pool = match scope {
            SearchScope::AllAlbums => {
                if user.albums().is_empty() {
                    return Err(SearchError::EmptyPool("you have no albums".into()));
                }
                let pool = user_pool(user, &self.photos);
                if pool.is_empty() {
                    return Err(SearchError::EmptyPool("none of your albums have photos".into()));
                }
                pool
            }
            SearchScope::Album(name) => {
                let album = user
                    .album(name)
                    .ok_or_else(|| LibraryError::AlbumNotFound(name.clone()))?;
                let pool = album_pool(album, &self.photos);
                if pool.is_empty() {
                    return Err(SearchError::EmptyPool(format!("album '{name}' has no photos")));
                }
                pool
            }
        };

        search(&pool, criteria)
    }
}
