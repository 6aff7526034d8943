//! Command implementations
//!
//! Each command is a module with functions that take parsed CLI args and run
//! the operation against the loaded library as the logged-in user.

pub mod account;
pub mod albums;
pub mod photo;
pub mod search;
pub mod transfer;
pub mod view;

use crate::PhotosError;
use crate::cli::ContainerArgs;
use crate::library::Container;
use crate::model::{PhotoKey, Resources};
use std::path::Path;

type Result<T> = std::result::Result<T, PhotosError>;

/// Key of the photo for an image file given on the command line
pub fn photo_key(path: &Path, resources: &dyn Resources) -> PhotoKey {
    PhotoKey::new(resources.canonicalize(path))
}

/// The container selected by `--album`/`--inbox`
///
/// # Errors
/// Returns `PhotosError::InvalidInput` if neither flag was given.
pub fn require_container(args: &ContainerArgs) -> Result<Container> {
    args.container().ok_or_else(|| {
        PhotosError::InvalidInput("Specify an album with --album or use --inbox".into())
    })
}
