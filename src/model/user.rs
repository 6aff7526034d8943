//! Users: credentials, owned albums and an inbox

use super::album::Album;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Username of the reserved superuser account
pub const ADMIN_USERNAME: &str = "admin";

/// A library user
///
/// Equality compares the (username, password) pair; this is what login and
/// the admin roster match against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    username: String,
    password: String,
    albums: Vec<Album>,
    inbox: Album,
}

impl User {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            albums: Vec::new(),
            inbox: Album::inbox(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.username == ADMIN_USERNAME
    }

    #[must_use]
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn albums_mut(&mut self) -> &mut [Album] {
        &mut self.albums
    }

    #[must_use]
    pub const fn inbox(&self) -> &Album {
        &self.inbox
    }

    pub fn inbox_mut(&mut self) -> &mut Album {
        &mut self.inbox
    }

    /// Add an album unless one with the same name already exists
    pub fn add_album(&mut self, album: Album) -> bool {
        if self.albums.contains(&album) {
            return false;
        }
        self.albums.push(album);
        true
    }

    /// Remove the album equal to `album` (same name)
    pub fn remove_album(&mut self, album: &Album) -> bool {
        match self.albums.iter().position(|a| a == album) {
            Some(index) => {
                self.albums.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn has_album(&self, name: &str) -> bool {
        self.albums.iter().any(|a| a.name() == name)
    }

    #[must_use]
    pub fn album(&self, name: &str) -> Option<&Album> {
        self.albums.iter().find(|a| a.name() == name)
    }

    pub fn album_mut(&mut self, name: &str) -> Option<&mut Album> {
        self.albums.iter_mut().find(|a| a.name() == name)
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username && self.password == other.password
    }
}

impl Eq for User {}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}
