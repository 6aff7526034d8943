//! Copying, moving and sending photos between containers
//!
//! Every transfer starts from a source container and a selected photo, and
//! picks its target from a candidate list:
//!
//! - copy/move: the user's albums other than the source (all albums when the
//!   source is the inbox)
//! - send: every user except the sender and the reserved admin account
//!
//! Transfers place the photo's key, never a copy of the photo, so the photo
//! stays one logical photo wherever it ends up.

pub mod error;

pub use error::TransferError;

use crate::library::{Container, Library};
use crate::model::{Album, PhotoKey, User};
use tracing::info;

type Result<T> = std::result::Result<T, TransferError>;

/// Albums a photo in `source` can be copied or moved to
#[must_use]
pub fn copy_targets<'a>(user: &'a User, source: &Container) -> Vec<&'a Album> {
    user.albums()
        .iter()
        .filter(|album| match source {
            Container::Album(name) => album.name() != name,
            Container::Inbox => true,
        })
        .collect()
}

/// Users a photo can be sent to
#[must_use]
pub fn send_targets<'a>(library: &'a Library, sender: &str) -> Vec<&'a User> {
    library
        .users
        .iter()
        .filter(|user| user.username() != sender && !user.is_admin())
        .collect()
}

impl Library {
    /// Add the selected photo to another of the user's albums
    ///
    /// # Errors
    /// Returns a `TransferError` if nothing is selected, the photo is not in
    /// `source`, there are no candidate albums, `target` is not a candidate,
    /// or `target` already holds the photo.
    pub fn copy_photo(
        &mut self,
        username: &str,
        source: &Container,
        selected: Option<&PhotoKey>,
        target: &str,
    ) -> Result<()> {
        let key = self.check_album_transfer(username, source, selected, target)?;
        self.container_mut(username, &Container::Album(target.to_string()))?
            .add_photo(key.clone());
        info!(user = username, from = %source, to = target, photo = %key, "copied photo");
        Ok(())
    }

    /// Add the selected photo to another album, then take it out of `source`
    ///
    /// # Errors
    /// Same as [`Library::copy_photo`]; on error neither container changes.
    pub fn move_photo(
        &mut self,
        username: &str,
        source: &Container,
        selected: Option<&PhotoKey>,
        target: &str,
    ) -> Result<()> {
        let key = self.check_album_transfer(username, source, selected, target)?;
        self.container_mut(username, &Container::Album(target.to_string()))?
            .add_photo(key.clone());
        self.container_mut(username, source)?.remove_photo(&key);
        info!(user = username, from = %source, to = target, photo = %key, "moved photo");
        Ok(())
    }

    /// Put the selected photo in another user's inbox
    ///
    /// # Errors
    /// Returns a `TransferError` if nothing is selected, the photo is not in
    /// `source`, there is nobody to send to, `recipient` is not a candidate,
    /// or the recipient's inbox already holds the photo.
    pub fn send_photo(
        &mut self,
        username: &str,
        source: &Container,
        selected: Option<&PhotoKey>,
        recipient: &str,
    ) -> Result<()> {
        let key = self.check_selection(username, source, selected)?;

        let candidates = send_targets(self, username);
        if candidates.is_empty() {
            return Err(TransferError::NoEligibleTargets);
        }
        let target = candidates
            .into_iter()
            .find(|user| user.username() == recipient)
            .ok_or_else(|| TransferError::TargetNotFound(recipient.to_string()))?;
        if target.inbox().contains(&key) {
            return Err(TransferError::DuplicatePhoto {
                photo: key.to_string(),
                target: format!("{recipient}'s inbox"),
            });
        }

        self.container_mut(recipient, &Container::Inbox)?.add_photo(key.clone());
        info!(from = username, to = recipient, photo = %key, "sent photo");
        Ok(())
    }

    fn check_selection(
        &self,
        username: &str,
        source: &Container,
        selected: Option<&PhotoKey>,
    ) -> Result<PhotoKey> {
        let key = selected.ok_or(TransferError::NoSelection)?;
        if !self.container(username, source)?.contains(key) {
            return Err(TransferError::NotInSource {
                photo: key.to_string(),
                source_name: source.to_string(),
            });
        }
        Ok(key.clone())
    }

    fn check_album_transfer(
        &self,
        username: &str,
        source: &Container,
        selected: Option<&PhotoKey>,
        target: &str,
    ) -> Result<PhotoKey> {
        let key = self.check_selection(username, source, selected)?;

        let user = self.user(username)?;
        let candidates = copy_targets(user, source);
        if candidates.is_empty() {
            return Err(TransferError::NoEligibleTargets);
        }
        let album = candidates
            .into_iter()
            .find(|album| album.name() == target)
            .ok_or_else(|| TransferError::TargetNotFound(target.to_string()))?;
        if album.contains(&key) {
            return Err(TransferError::DuplicatePhoto {
                photo: key.to_string(),
                target: target.to_string(),
            });
        }
        Ok(key)
    }
}
