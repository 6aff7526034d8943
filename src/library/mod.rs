//! The process-wide photo library
//!
//! [`Library`] is the explicit context object every operation runs against:
//! the roster of users plus the shared [`PhotoIndex`]. It is loaded (or
//! bootstrapped) once at start-up by the `db` module and persisted once on
//! shutdown.
//!
//! The workflows here mirror what a front-end offers a logged-in user:
//! account administration, album management and photo editing. Each one
//! validates its inputs fully before touching the graph.

pub mod error;

pub use error::LibraryError;

use crate::model::{
    ADMIN_USERNAME, Album, Photo, PhotoIndex, PhotoKey, Resources, SortOrder, Tag, User,
    incomplete_row, parse_values,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

type Result<T> = std::result::Result<T, LibraryError>;

/// A photo container owned by a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container {
    /// One of the user's named albums
    Album(String),
    /// The user's receive tray
    Inbox,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Album(name) => f.write_str(name),
            Self::Inbox => f.write_str(crate::model::INBOX_NAME),
        }
    }
}

/// One row of a user's album listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumSummary {
    pub name: String,
    pub photo_count: usize,
    pub date_range: String,
}

/// All users and all photos
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    pub users: Vec<User>,
    pub photos: PhotoIndex,
}

impl Library {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticate a user
    ///
    /// Builds a candidate from the given credentials and looks for an equal
    /// user on the roster; the stored user is returned, not the candidate.
    ///
    /// # Errors
    /// Returns `LibraryError::InvalidCredentials` when no user matches.
    pub fn login(&self, username: &str, password: &str) -> Result<&User> {
        let candidate = User::new(username, password);
        match self.users.iter().find(|user| **user == candidate) {
            Some(user) => {
                info!(user = username, "login succeeded");
                Ok(user)
            }
            None => {
                debug!(user = username, "login rejected");
                Err(LibraryError::InvalidCredentials)
            }
        }
    }

    /// # Errors
    /// Returns `LibraryError::UserNotFound` if no user has that name.
    pub fn user(&self, username: &str) -> Result<&User> {
        self.users
            .iter()
            .find(|user| user.username() == username)
            .ok_or_else(|| LibraryError::UserNotFound(username.to_string()))
    }

    /// # Errors
    /// Returns `LibraryError::UserNotFound` if no user has that name.
    pub fn user_mut(&mut self, username: &str) -> Result<&mut User> {
        self.users
            .iter_mut()
            .find(|user| user.username() == username)
            .ok_or_else(|| LibraryError::UserNotFound(username.to_string()))
    }

    #[must_use]
    pub fn usernames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.users.iter().map(User::username).collect();
        names.sort_unstable();
        names
    }

    /// Add a user to the roster (admin action)
    ///
    /// # Errors
    /// Returns `LibraryError::EmptyUsername` for a blank name and
    /// `LibraryError::DuplicateUser` if the username is taken, whatever the
    /// password.
    pub fn create_user(&mut self, username: &str, password: &str) -> Result<()> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LibraryError::EmptyUsername);
        }
        if self.users.iter().any(|user| user.username() == username) {
            return Err(LibraryError::DuplicateUser(username.to_string()));
        }

        self.users.push(User::new(username, password));
        info!(user = username, "created user");
        Ok(())
    }

    /// Remove a user from the roster (admin action)
    ///
    /// # Errors
    /// Returns `LibraryError::ReservedAccount` for the admin account and
    /// `LibraryError::UserNotFound` for an unknown name.
    pub fn delete_user(&mut self, username: &str) -> Result<()> {
        if username == ADMIN_USERNAME {
            return Err(LibraryError::ReservedAccount(username.to_string()));
        }
        let index = self
            .users
            .iter()
            .position(|user| user.username() == username)
            .ok_or_else(|| LibraryError::UserNotFound(username.to_string()))?;

        self.users.remove(index);
        info!(user = username, "deleted user");
        Ok(())
    }

    /// # Errors
    /// Returns `LibraryError::UserNotFound` or `LibraryError::AlbumNotFound`.
    pub fn container(&self, username: &str, container: &Container) -> Result<&Album> {
        let user = self.user(username)?;
        match container {
            Container::Inbox => Ok(user.inbox()),
            Container::Album(name) => user
                .album(name)
                .ok_or_else(|| LibraryError::AlbumNotFound(name.clone())),
        }
    }

    /// # Errors
    /// Returns `LibraryError::UserNotFound` or `LibraryError::AlbumNotFound`.
    pub fn container_mut(&mut self, username: &str, container: &Container) -> Result<&mut Album> {
        let user = self.user_mut(username)?;
        match container {
            Container::Inbox => Ok(user.inbox_mut()),
            Container::Album(name) => user
                .album_mut(name)
                .ok_or_else(|| LibraryError::AlbumNotFound(name.clone())),
        }
    }

    /// Name, photo count and date range of each album, ordered by name
    ///
    /// # Errors
    /// Returns `LibraryError::UserNotFound` for an unknown user.
    pub fn album_summaries(&self, username: &str) -> Result<Vec<AlbumSummary>> {
        let user = self.user(username)?;
        let mut summaries: Vec<AlbumSummary> = user
            .albums()
            .iter()
            .map(|album| AlbumSummary {
                name: album.name().to_string(),
                photo_count: album.len(),
                date_range: album.date_range(&self.photos),
            })
            .collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(summaries)
    }

    /// # Errors
    /// Returns `LibraryError::EmptyAlbumName`, `LibraryError::DuplicateAlbum`
    /// or `LibraryError::UserNotFound`.
    pub fn create_album(&mut self, username: &str, name: &str) -> Result<()> {
        self.create_album_from(username, name, &[])
    }

    /// Create an album already holding `photos`, e.g. a set of search results
    ///
    /// # Errors
    /// Returns `LibraryError::EmptyAlbumName`, `LibraryError::DuplicateAlbum`,
    /// `LibraryError::PhotoNotFound` for a key the index does not know, or
    /// `LibraryError::UserNotFound`.
    pub fn create_album_from(
        &mut self,
        username: &str,
        name: &str,
        photos: &[PhotoKey],
    ) -> Result<()> {
        if name.is_empty() {
            return Err(LibraryError::EmptyAlbumName);
        }
        if let Some(missing) = photos.iter().find(|key| !self.photos.contains(key)) {
            return Err(LibraryError::PhotoNotFound(missing.to_string()));
        }

        let user = self.user_mut(username)?;
        let mut album = Album::new(name);
        for key in photos {
            album.add_photo(key.clone());
        }
        if !user.add_album(album) {
            return Err(LibraryError::DuplicateAlbum(name.to_string()));
        }

        info!(user = username, album = name, photos = photos.len(), "created album");
        Ok(())
    }

    /// Rename one of a user's albums
    ///
    /// The new name is checked against every album the user owns, the album
    /// being renamed included.
    ///
    /// # Errors
    /// Returns `LibraryError::EmptyAlbumName`, `LibraryError::DuplicateAlbum`,
    /// `LibraryError::AlbumNotFound` or `LibraryError::UserNotFound`.
    pub fn rename_album(&mut self, username: &str, current: &str, new_name: &str) -> Result<()> {
        if new_name.is_empty() {
            return Err(LibraryError::EmptyAlbumName);
        }

        let user = self.user_mut(username)?;
        if !user.has_album(current) {
            return Err(LibraryError::AlbumNotFound(current.to_string()));
        }
        if user.has_album(new_name) {
            return Err(LibraryError::DuplicateAlbum(new_name.to_string()));
        }

        if let Some(album) = user.album_mut(current) {
            album.rename(new_name);
        }
        info!(user = username, from = current, to = new_name, "renamed album");
        Ok(())
    }

    /// # Errors
    /// Returns `LibraryError::AlbumNotFound` or `LibraryError::UserNotFound`.
    pub fn delete_album(&mut self, username: &str, name: &str) -> Result<()> {
        let user = self.user_mut(username)?;
        if !user.remove_album(&Album::new(name)) {
            return Err(LibraryError::AlbumNotFound(name.to_string()));
        }
        info!(user = username, album = name, "deleted album");
        Ok(())
    }

    /// Add a photo of the resource at `path` to one of a user's albums
    ///
    /// Without a caption the file name minus its extension is used. Tags are
    /// sorted by name. A photo already known to the library under the same
    /// canonical path keeps its existing caption and tags.
    ///
    /// # Errors
    /// Returns `LibraryError::Model` if the resource is missing,
    /// `LibraryError::EmptyCaption`, `LibraryError::DuplicatePhoto` if the
    /// album already holds it, or a lookup error.
    pub fn add_photo(
        &mut self,
        username: &str,
        album: &str,
        path: &Path,
        caption: Option<&str>,
        tags: Vec<Tag>,
        resources: &dyn Resources,
    ) -> Result<PhotoKey> {
        let caption = caption.map_or_else(|| resources.caption_from_filename(path), str::to_string);
        if caption.is_empty() {
            return Err(LibraryError::EmptyCaption);
        }

        let mut photo = Photo::new(path, caption, tags, resources)?;
        photo.sort_tags();

        let target = self
            .user(username)?
            .album(album)
            .ok_or_else(|| LibraryError::AlbumNotFound(album.to_string()))?;
        if target.contains(photo.key()) {
            return Err(LibraryError::DuplicatePhoto {
                photo: photo.key().to_string(),
                album: album.to_string(),
            });
        }

        if self.photos.contains(photo.key()) {
            debug!(photo = %photo.key(), "photo already in library, reusing it");
        }
        let key = self.photos.insert(photo);
        self.container_mut(username, &Container::Album(album.to_string()))?
            .add_photo(key.clone());

        info!(user = username, album, photo = %key, "added photo");
        Ok(key)
    }

    /// # Errors
    /// Returns `LibraryError::PhotoNotFound` if the container does not hold
    /// the photo, or a lookup error.
    pub fn remove_photo(
        &mut self,
        username: &str,
        container: &Container,
        key: &PhotoKey,
    ) -> Result<()> {
        if !self.container_mut(username, container)?.remove_photo(key) {
            return Err(LibraryError::PhotoNotFound(key.to_string()));
        }
        info!(user = username, container = %container, photo = %key, "removed photo");
        Ok(())
    }

    /// # Errors
    /// Returns `LibraryError::PhotoNotFound` if the index has no such photo.
    pub fn photo(&self, key: &PhotoKey) -> Result<&Photo> {
        self.photos
            .get(key)
            .ok_or_else(|| LibraryError::PhotoNotFound(key.to_string()))
    }

    /// # Errors
    /// Returns `LibraryError::PhotoNotFound` if the index has no such photo.
    pub fn photo_mut(&mut self, key: &PhotoKey) -> Result<&mut Photo> {
        self.photos
            .get_mut(key)
            .ok_or_else(|| LibraryError::PhotoNotFound(key.to_string()))
    }

    /// # Errors
    /// Returns `LibraryError::PhotoNotFound` if the index has no such photo.
    pub fn set_caption(&mut self, key: &PhotoKey, caption: &str) -> Result<()> {
        self.photo_mut(key)?.set_caption(caption);
        Ok(())
    }

    /// Add one tag to a photo, normalized from user input
    ///
    /// Returns whether the tag was new.
    ///
    /// # Errors
    /// Returns `LibraryError::IncompleteTag` if either part is blank, or
    /// `LibraryError::PhotoNotFound`.
    pub fn add_tag(&mut self, key: &PhotoKey, name: &str, value: &str) -> Result<bool> {
        if name.trim().is_empty() || value.trim().is_empty() {
            return Err(LibraryError::IncompleteTag(
                incomplete_row(name, value)
                    .unwrap_or_else(|| "tag name and value are required".into()),
            ));
        }
        let photo = self.photo_mut(key)?;
        let added = photo.add_tag(Tag::normalized(name, value));
        if added {
            photo.sort_tags();
        }
        Ok(added)
    }

    /// # Errors
    /// Returns `LibraryError::PhotoNotFound`.
    pub fn remove_tag(&mut self, key: &PhotoKey, tag: &Tag) -> Result<bool> {
        Ok(self.photo_mut(key)?.remove_tag(tag))
    }

    /// Apply an edit form: new caption and a full replacement of the tags
    ///
    /// Each row is a tag name and a comma-separated list of values. Rows with
    /// both parts blank are skipped; a row with only one part filled in
    /// rejects the whole edit.
    ///
    /// # Errors
    /// Returns `LibraryError::IncompleteTag` or `LibraryError::PhotoNotFound`.
    pub fn edit_photo(
        &mut self,
        key: &PhotoKey,
        caption: &str,
        rows: &[(String, String)],
    ) -> Result<()> {
        if let Some(problem) = rows.iter().find_map(|(name, value)| incomplete_row(name, value)) {
            return Err(LibraryError::IncompleteTag(problem));
        }

        let tags: Vec<Tag> = rows
            .iter()
            .flat_map(|(name, value)| {
                let name = name.trim().to_lowercase();
                parse_values(value)
                    .into_iter()
                    .map(move |value| Tag::new(name.clone(), value))
            })
            .collect();

        let photo = self.photo_mut(key)?;
        photo.set_caption(caption);
        photo.replace_tags(tags);
        debug!(photo = %key, tags = photo.tags().len(), "edited photo");
        Ok(())
    }

    /// # Errors
    /// Returns `LibraryError::AlbumNotFound` or `LibraryError::UserNotFound`.
    pub fn sort_album(
        &mut self,
        username: &str,
        container: &Container,
        order: SortOrder,
    ) -> Result<()> {
        let Self { users, photos } = self;
        let user = users
            .iter_mut()
            .find(|user| user.username() == username)
            .ok_or_else(|| LibraryError::UserNotFound(username.to_string()))?;
        let album = match container {
            Container::Inbox => user.inbox_mut(),
            Container::Album(name) => user
                .album_mut(name)
                .ok_or_else(|| LibraryError::AlbumNotFound(name.clone()))?,
        };
        album.sort_photos(order, photos);
        Ok(())
    }

    /// Drop photos that no album or inbox references any more
    pub fn prune_unreferenced(&mut self) -> usize {
        let Self { users, photos } = self;
        let referenced: HashSet<&PhotoKey> = users
            .iter()
            .flat_map(|user| user.albums().iter().chain(std::iter::once(user.inbox())))
            .flat_map(Album::photos)
            .collect();
        let pruned = photos.retain_referenced(&referenced);
        if pruned > 0 {
            debug!(pruned, "pruned unreferenced photos");
        }
        pruned
    }
}

#[cfg(test)]
#[path = "library_tests.rs"]
mod library_tests;
