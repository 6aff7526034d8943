//! Library workflow errors
//!
//! These are expected, user-facing validation outcomes (bad credentials,
//! duplicate names, missing selections) rather than defects. Every check runs
//! before any mutation, so an error always leaves the library untouched.

use crate::model::ModelError;
use thiserror::Error;

/// Errors from library workflows
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Login failed; does not say which field was wrong
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("User '{0}' already exists")]
    DuplicateUser(String),

    /// The reserved admin account cannot take part in this operation
    #[error("'{0}' is a reserved account")]
    ReservedAccount(String),

    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Album name cannot be empty")]
    EmptyAlbumName,

    #[error("Caption cannot be empty")]
    EmptyCaption,

    #[error("Album '{0}' already exists")]
    DuplicateAlbum(String),

    #[error("Album '{0}' not found")]
    AlbumNotFound(String),

    #[error("Photo '{0}' not found")]
    PhotoNotFound(String),

    #[error("Photo '{photo}' is already in '{album}'")]
    DuplicatePhoto { photo: String, album: String },

    /// A tag input row had a name without a value or the reverse
    #[error("Incomplete tag: {0}")]
    IncompleteTag(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}
